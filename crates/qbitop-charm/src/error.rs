//! # Design
//!
//! - Centralize charm-level errors for hook dispatch and bootstrap.
//! - Keep error messages constant while carrying context fields.
//! - Preserve source errors without re-logging at call sites.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for charm operations.
pub type CharmResult<T> = Result<T, CharmError>;

/// Charm-level error type.
#[derive(Debug, Error)]
pub enum CharmError {
    /// IO operations failed.
    #[error("io operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The configuration snapshot could not be decoded.
    #[error("snapshot decode failed")]
    Snapshot {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Source JSON error.
        source: serde_json::Error,
    },
    /// A snapshot value failed validation.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Field name that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Optional value associated with the failure.
        value: Option<String>,
    },
    /// Daemon configuration operations failed.
    #[error("daemon configuration failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: qbitop_config::ConfigError,
    },
    /// Host provisioning operations failed.
    #[error("host provisioning failed")]
    HostOps {
        /// Operation identifier.
        operation: &'static str,
        /// Source provisioning error.
        source: qbitop_hostops::HostOpsError,
    },
    /// Logging initialisation failed.
    #[error("logging initialisation failed")]
    Logging {
        /// Failure detail reported by the subscriber.
        detail: String,
    },
}

impl CharmError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn snapshot(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Snapshot {
            path: path.into(),
            source,
        }
    }

    pub(crate) const fn config(operation: &'static str, source: qbitop_config::ConfigError) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn hostops(
        operation: &'static str,
        source: qbitop_hostops::HostOpsError,
    ) -> Self {
        Self::HostOps { operation, source }
    }
}
