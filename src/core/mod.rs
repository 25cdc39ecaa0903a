pub mod runner;
pub mod stripper;

pub use crate::domain::model::{RemovedBlock, ResourceTarget, StripOutcome};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
