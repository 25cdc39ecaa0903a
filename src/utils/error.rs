use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid resource pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl StripError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StripError::Read { .. } | StripError::Write { .. } => ErrorCategory::Io,
            StripError::Pattern(_) => ErrorCategory::Internal,
            StripError::ConfigParseError { .. }
            | StripError::InvalidConfigValueError { .. }
            | StripError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// I/O 錯誤的底層種類，非 I/O 錯誤回傳 None
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            StripError::Read { source, .. } | StripError::Write { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StripError::Read { path, source } => {
                format!("Cannot read template '{}': {}", path.display(), source)
            }
            StripError::Write { path, source } => {
                format!("Cannot write template '{}': {}", path.display(), source)
            }
            StripError::Pattern(_) => "Internal error while building resource patterns".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StripError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input template exists or pass --input".to_string()
            }
            StripError::Read { .. } => "Check the permissions of the input template".to_string(),
            StripError::Write { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                "Create the output directory first; it is never created automatically".to_string()
            }
            StripError::Write { .. } => "Check that the output location is writable".to_string(),
            StripError::Pattern(_) => "Check the configured resource names and types".to_string(),
            StripError::ConfigParseError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            StripError::InvalidConfigValueError { field, .. }
            | StripError::MissingConfigError { field } => {
                format!("Fix the '{}' setting", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
