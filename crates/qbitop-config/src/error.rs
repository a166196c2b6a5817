//! # Design
//!
//! - Provide structured, constant-message errors for configuration handling.
//! - Keep parse failures distinct from IO failures so callers can tell a
//!   malformed file apart from a missing-permission write.
//! - Preserve source errors without interpolating context into messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced while loading, parsing, or persisting the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO failures while reading or writing the backing file.
    #[error("config io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The existing file could not be parsed into a document.
    #[error("config parse failure")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
        /// Static reason for the failure.
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, reason: &'static str) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            reason,
        }
    }
}
