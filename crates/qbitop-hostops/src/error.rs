//! # Design
//!
//! - Provide structured, constant-message errors for host provisioning.
//! - Capture the program, path, or unit involved so failures are
//!   reproducible in tests.
//! - Preserve source errors without interpolating context into messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for host provisioning operations.
pub type HostOpsResult<T> = Result<T, HostOpsError>;

/// Errors produced while provisioning the host.
#[derive(Debug, Error)]
pub enum HostOpsError {
    /// IO failures while interacting with the filesystem.
    #[error("hostops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A host command could not be spawned.
    #[error("hostops command spawn failure")]
    CommandSpawn {
        /// Program that failed to spawn.
        program: &'static str,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Waiting on a spawned host command failed.
    #[error("hostops command wait failure")]
    CommandWait {
        /// Program being awaited.
        program: &'static str,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A host command exited unsuccessfully.
    #[error("hostops command failed")]
    CommandFailed {
        /// Program that failed.
        program: &'static str,
        /// Arguments the program was invoked with.
        args: Vec<String>,
        /// Exit code when the process exited normally.
        code: Option<i32>,
    },
    /// Walkdir traversal failures during ownership walks.
    #[error("hostops walkdir failure")]
    Walkdir {
        /// Operation that triggered the walkdir failure.
        operation: &'static str,
        /// Path involved in the walkdir failure.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },
    /// Service user lookup failed.
    #[error("hostops user lookup failed")]
    UserLookup {
        /// Username that failed lookup.
        user: String,
        /// Underlying nix error when the lookup itself failed.
        source: Option<nix::Error>,
    },
    /// Nix syscall failures.
    #[error("hostops nix failure")]
    Nix {
        /// Operation that triggered the nix failure.
        operation: &'static str,
        /// Path involved in the nix failure.
        path: PathBuf,
        /// Underlying nix error.
        source: nix::Error,
    },
    /// Operation is unsupported on this platform.
    #[error("hostops unsupported operation")]
    Unsupported {
        /// Operation that is unsupported.
        operation: &'static str,
    },
}

impl HostOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) const fn spawn(program: &'static str, source: io::Error) -> Self {
        Self::CommandSpawn { program, source }
    }

    pub(crate) const fn wait_failed(program: &'static str, source: io::Error) -> Self {
        Self::CommandWait { program, source }
    }

    pub(crate) fn command_failed(
        program: &'static str,
        args: &[&str],
        code: Option<i32>,
    ) -> Self {
        Self::CommandFailed {
            program,
            args: args.iter().map(ToString::to_string).collect(),
            code,
        }
    }

    pub(crate) fn walkdir(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: walkdir::Error,
    ) -> Self {
        Self::Walkdir {
            operation,
            path: path.into(),
            source,
        }
    }

    #[cfg(unix)]
    pub(crate) fn nix(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: nix::Error,
    ) -> Self {
        Self::Nix {
            operation,
            path: path.into(),
            source,
        }
    }
}
