use std::fs;
use std::path::PathBuf;

use crate::error::{GenError, Result};

/// Validate a hostname for use as an output file name.
/// Allows alphanumeric, hyphens, dots, and underscores. No path separators.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > 253 || hostname.chars().all(|c| c == '.') {
        return false;
    }
    hostname
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_')
}

/// Convert a hostname to its config filename
/// e.g., "sw-core-01" -> "sw-core-01.txt"
pub fn config_filename(hostname: &str) -> String {
    format!("{}.txt", hostname)
}

/// OutputWriter persists rendered configs under one directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Create the output directory up front
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| GenError::write(&self.output_dir, e))
    }

    pub fn path_for(&self, hostname: &str) -> PathBuf {
        self.output_dir.join(config_filename(hostname))
    }

    /// Write `<output_dir>/<hostname>.txt`, replacing any existing file.
    pub fn write(&self, hostname: &str, config: &str) -> Result<PathBuf> {
        let path = self.path_for(hostname);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GenError::write(parent, e))?;
        }
        fs::write(&path, config).map_err(|e| GenError::write(&path, e))?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(path)
    }
}
