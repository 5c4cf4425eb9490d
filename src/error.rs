//! Error types for the generation pipeline.
//!
//! Fatal failures are [`GenError`]; they stop the batch. Per-switch lookup
//! misses are [`SkipReason`]; the generator logs them and moves on.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal pipeline errors.
#[derive(Debug, Error)]
pub enum GenError {
    /// A fact, template, or config file does not exist.
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// A JSON or YAML document could not be parsed.
    #[error("Failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The inventory could not be read.
    #[error("Inventory error: {message}")]
    DataSource {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    /// Template lookup, parsing, or rendering failed.
    #[error("Template error in '{template}': {message}")]
    Template { template: String, message: String },

    /// Output could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an existing file failed for a reason other than absence.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenError {
    pub fn missing_file(path: impl AsRef<Path>) -> Self {
        Self::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn parse(path: impl AsRef<Path>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            message: message.to_string(),
        }
    }

    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
            source: None,
        }
    }

    pub fn sqlx(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::DataSource {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Tera nests the useful detail in the source chain, so flatten it.
    pub fn template(template: impl Into<String>, err: &tera::Error) -> Self {
        use std::error::Error as _;

        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Template {
            template: template.into(),
            message,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Map an I/O error from reading `path`, treating NotFound as MissingFile.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::missing_file(path)
        } else {
            Self::Read {
                path: path.as_ref().to_path_buf(),
                source,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GenError>;

/// Recoverable per-switch misses. The switch is skipped, the batch continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No template is mapped for the switch model.
    NoTemplate { model: String },
    /// No VLAN fact file exists for the host.
    NoVlanFile { path: PathBuf },
    /// Hostname is unusable as an output file name.
    InvalidHostname,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoTemplate { model } => {
                write!(f, "no template found for model '{}'", model)
            }
            SkipReason::NoVlanFile { path } => {
                write!(f, "no VLAN file found at {}", path.display())
            }
            SkipReason::InvalidHostname => write!(f, "hostname is not a valid file name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_not_found_is_missing_file() {
        let err = GenError::read(
            "facts/vlan_list.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, GenError::MissingFile { .. }));
        assert_eq!(err.to_string(), "File not found: facts/vlan_list.json");
    }

    #[test]
    fn test_read_other_io_error() {
        let err = GenError::read(
            "facts/vlan_list.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, GenError::Read { .. }));
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::NoTemplate {
            model: "WS-C3850".into(),
        };
        assert_eq!(reason.to_string(), "no template found for model 'WS-C3850'");
    }
}
