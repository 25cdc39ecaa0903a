use crate::domain::ports::Storage;
use crate::utils::error::{Result, StripError};
use std::fs;
use std::path::Path;

/// Filesystem storage. Writes never create missing parent directories.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| StripError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| StripError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
