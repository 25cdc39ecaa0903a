use crate::adapters::storage::LocalStorage;
use crate::core::stripper::strip_resources;
use crate::domain::model::{ResourceTarget, StripOutcome};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::Path;

pub fn completion_message(output: &Path) -> String {
    format!("S3 bucket resources removed and saved to {}", output.display())
}

pub fn dry_run_message(outcome: &StripOutcome, input: &Path) -> String {
    format!(
        "Dry run: {} resource block(s) would be removed from {}",
        outcome.removed_count(),
        input.display()
    )
}

pub struct StripRunner<S: Storage> {
    storage: S,
    targets: Vec<ResourceTarget>,
}

impl<S: Storage> StripRunner<S> {
    pub fn new(storage: S, targets: Vec<ResourceTarget>) -> Self {
        Self { storage, targets }
    }

    pub fn targets(&self) -> &[ResourceTarget] {
        &self.targets
    }

    /// Reads and transforms `input` without writing anything.
    pub fn preview(&self, input: &Path) -> Result<StripOutcome> {
        tracing::info!("📖 Reading template: {}", input.display());
        let content = self.storage.read_text(input)?;

        let outcome = strip_resources(&content, &self.targets)?;
        for block in &outcome.removed {
            tracing::info!(
                "✂️  {} ({}) at line {}, {} line(s)",
                block.name,
                block.resource_type,
                block.start_line,
                block.line_count
            );
        }

        Ok(outcome)
    }

    /// Read, strip, write. Nothing is written when the read or the transform fails.
    pub fn run(&self, input: &Path, output: &Path) -> Result<StripOutcome> {
        let outcome = self.preview(input)?;

        tracing::info!("💾 Writing template: {}", output.display());
        self.storage.write_text(output, &outcome.content)?;

        Ok(outcome)
    }
}

/// Strips the frontend bucket and its policy from `input`, saves the result to `output`
/// and prints the completion line.
pub fn remove_s3_resources(input: &Path, output: &Path) -> Result<()> {
    let runner = StripRunner::new(LocalStorage::new(), ResourceTarget::default_targets());
    runner.run(input, output)?;
    println!("{}", completion_message(output));
    Ok(())
}
