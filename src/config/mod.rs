#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ResourceTarget;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT: &str = "infrastructure/learner-lab-template.yaml";
pub const DEFAULT_OUTPUT: &str = "infrastructure/learner-lab-template-modified.yaml";

/// First directory at or above the executable's own directory that holds the default template.
pub fn base_dir_for_exe(exe: &Path) -> Option<PathBuf> {
    exe.parent()?
        .ancestors()
        .find(|dir| dir.join(DEFAULT_INPUT).is_file())
        .map(Path::to_path_buf)
}

/// Directory the default template paths are resolved against, found from the running
/// executable's location. Falls back to the source tree the binary was built from, then
/// to the executable's own directory.
pub fn default_base_dir() -> PathBuf {
    let exe = std::env::current_exe().and_then(|exe| exe.canonicalize());
    let exe = match exe {
        Ok(exe) => exe,
        Err(e) => {
            tracing::debug!("Cannot locate the running executable: {}", e);
            return PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        }
    };

    if let Some(dir) = base_dir_for_exe(&exe) {
        return dir;
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.is_dir() {
        return manifest_dir;
    }

    exe.parent().map(Path::to_path_buf).unwrap_or(manifest_dir)
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub targets: Vec<ResourceTarget>,
}

impl StripSettings {
    pub fn with_defaults(base_dir: &Path) -> Self {
        Self {
            input: base_dir.join(DEFAULT_INPUT),
            output: base_dir.join(DEFAULT_OUTPUT),
            targets: ResourceTarget::default_targets(),
        }
    }

    /// Layers the TOML file and then explicit paths over the defaults.
    /// Relative paths from the file are taken relative to `base_dir`.
    pub fn resolve(
        base_dir: &Path,
        file: Option<&TomlConfig>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        let mut settings = Self::with_defaults(base_dir);

        if let Some(file) = file {
            if let Some(path) = &file.input {
                settings.input = base_dir.join(path);
            }
            if let Some(path) = &file.output {
                settings.output = base_dir.join(path);
            }
            if let Some(resources) = &file.resources {
                settings.targets = resources.clone();
            }
        }

        if let Some(path) = input {
            settings.input = path;
        }
        if let Some(path) = output {
            settings.output = path;
        }

        settings
    }
}

impl Validate for StripSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output", &self.output)?;
        validation::validate_not_empty("resources", &self.targets)?;
        for target in &self.targets {
            validation::validate_resource_name("resources.name", &target.name)?;
            validation::validate_non_empty_string("resources.type", &target.resource_type)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sibling_paths() {
        let settings = StripSettings::with_defaults(Path::new("/repo"));

        assert_eq!(settings.input, Path::new("/repo/infrastructure/learner-lab-template.yaml"));
        assert_eq!(
            settings.output,
            Path::new("/repo/infrastructure/learner-lab-template-modified.yaml")
        );
        assert_eq!(settings.input.parent(), settings.output.parent());
        assert_eq!(settings.targets, ResourceTarget::default_targets());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_paths_override_file() {
        let file = TomlConfig {
            input: Some("tpl/in.yaml".to_string()),
            output: Some("tpl/out.yaml".to_string()),
            resources: Some(vec![ResourceTarget::new("LogsBucket", "AWS::S3::Bucket")]),
        };

        let settings = StripSettings::resolve(
            Path::new("/repo"),
            Some(&file),
            None,
            Some(PathBuf::from("/elsewhere/out.yaml")),
        );

        assert_eq!(settings.input, Path::new("/repo/tpl/in.yaml"));
        assert_eq!(settings.output, Path::new("/elsewhere/out.yaml"));
        assert_eq!(settings.targets[0].name, "LogsBucket");
    }

    #[test]
    fn test_base_dir_found_above_executable() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let root = temp_dir.path();
        std::fs::create_dir_all(root.join("infrastructure")).unwrap();
        std::fs::write(root.join(DEFAULT_INPUT), "Resources:\n").unwrap();
        std::fs::create_dir_all(root.join("target/release")).unwrap();

        let exe = root.join("target/release/cfn-strip");
        assert_eq!(base_dir_for_exe(&exe), Some(root.to_path_buf()));

        let beside = root.join("cfn-strip");
        assert_eq!(base_dir_for_exe(&beside), Some(root.to_path_buf()));
    }

    #[test]
    fn test_empty_targets_fail_validation() {
        let mut settings = StripSettings::with_defaults(Path::new("/repo"));
        settings.targets.clear();
        assert!(settings.validate().is_err());
    }
}
