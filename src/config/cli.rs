use crate::config::toml_config::TomlConfig;
use crate::config::{default_base_dir, StripSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "cfn-strip")]
#[command(about = "Remove the frontend S3 bucket resources from a CloudFormation template")]
pub struct CliConfig {
    /// Template to read (default: infrastructure/learner-lab-template.yaml under the base dir)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Where to write the stripped template
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory default and config-file paths are resolved against (default: the nearest
    /// directory above the executable holding infrastructure/learner-lab-template.yaml)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// TOML file overriding paths and the resources to strip
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would be removed without writing the output
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn settings(&self) -> Result<StripSettings> {
        let base_dir = self.base_dir.clone().unwrap_or_else(default_base_dir);

        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = StripSettings::resolve(
            &base_dir,
            file.as_ref(),
            self.input.clone(),
            self.output.clone(),
        );
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = CliConfig::parse_from(["cfn-strip", "--base-dir", "/repo"]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings, StripSettings::with_defaults(Path::new("/repo")));
        assert!(!cli.dry_run);
        assert_eq!(cli.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags_are_parsed() {
        let cli = CliConfig::parse_from([
            "cfn-strip",
            "--input",
            "a.yaml",
            "--output",
            "b.yaml",
            "--dry-run",
            "-v",
            "--log-format",
            "json",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.input, Path::new("a.yaml"));
        assert_eq!(settings.output, Path::new("b.yaml"));
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["cfn-strip", "--config", "/nonexistent/cfn-strip.toml"]);
        assert!(cli.settings().is_err());
    }
}
