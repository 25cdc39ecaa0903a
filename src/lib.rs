pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::StripSettings;
pub use crate::core::runner::{remove_s3_resources, StripRunner};
pub use crate::core::stripper::strip_resources;
pub use crate::domain::model::{RemovedBlock, ResourceTarget, StripOutcome};
pub use crate::utils::error::{Result, StripError};
