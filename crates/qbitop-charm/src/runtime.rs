//! Reporting back to the orchestration runtime.
//!
//! Hook handlers never depend on the orchestrator's own types; they talk to
//! a small capability trait, and the production implementation shells out
//! to the runtime's hook tools when they are on `PATH`.

use std::io;
use std::process::Command;

use tracing::{debug, warn};

/// Unit status reported back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The unit is busy provisioning.
    Maintenance(String),
    /// The unit is up and serving.
    Active(String),
}

impl Status {
    /// Status kind as the hook tools spell it.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Maintenance(_) => "maintenance",
            Self::Active(_) => "active",
        }
    }

    /// Human-readable status message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Maintenance(message) | Self::Active(message) => message,
        }
    }
}

/// Capabilities the handlers need from the orchestration runtime.
pub trait Runtime {
    /// Report the unit's status.
    fn set_status(&mut self, status: Status);
    /// Declare a TCP port as externally reachable.
    fn open_port(&mut self, port: u16);
}

/// Production runtime that invokes the orchestrator's hook tools.
///
/// Missing tools are tolerated so the binary stays runnable outside the
/// orchestrator (local dry runs, tests); any other failure is logged and
/// otherwise ignored, matching the advisory nature of status updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HookToolRuntime;

impl HookToolRuntime {
    /// Construct the hook-tool runtime.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn invoke(tool: &'static str, args: &[&str]) {
        match Command::new(tool).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!(tool, code = ?status.code(), "hook tool exited unsuccessfully");
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(tool, "hook tool not found; running outside the orchestrator");
            }
            Err(err) => {
                warn!(tool, error = %err, "hook tool invocation failed");
            }
        }
    }
}

impl Runtime for HookToolRuntime {
    fn set_status(&mut self, status: Status) {
        Self::invoke("status-set", &[status.kind(), status.message()]);
    }

    fn open_port(&mut self, port: u16) {
        Self::invoke("open-port", &[&format!("{port}/tcp")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_exposes_kind_and_message() {
        let maintenance = Status::Maintenance("installing qbittorrent".to_string());
        assert_eq!(maintenance.kind(), "maintenance");
        assert_eq!(maintenance.message(), "installing qbittorrent");

        let active = Status::Active("running".to_string());
        assert_eq!(active.kind(), "active");
        assert_eq!(active.message(), "running");
    }

    #[test]
    fn missing_hook_tools_are_tolerated() {
        let mut runtime = HookToolRuntime::new();
        runtime.set_status(Status::Active("running".to_string()));
        runtime.open_port(8080);
    }
}
