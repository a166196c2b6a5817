//! Binary entrypoint wiring: argument parsing and hook dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::error;

use crate::config::CharmConfig;
use crate::error::CharmResult;
use crate::hooks::{Charm, HookEvent};
use crate::logging::{LoggingConfig, init_logging};
use crate::runtime::HookToolRuntime;
use qbitop_hostops::{HostOps, HostPaths};

/// qBittorrent host operator: executes one lifecycle hook per invocation.
#[derive(Debug, Parser)]
#[command(name = "qbitop", version, about)]
pub struct Cli {
    /// Path to the orchestrator's configuration snapshot (JSON).
    #[arg(long, env = "QBITOP_CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Hook to execute.
    #[command(subcommand)]
    pub hook: HookCommand,
}

/// Lifecycle hooks understood by the binary.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum HookCommand {
    /// Provision packages, the service user, and the daemon configuration.
    Install,
    /// Start the sshfs mount and the daemon.
    Start,
    /// Stop the daemon.
    Stop,
    /// Apply a changed configuration snapshot.
    ConfigChanged,
}

impl From<HookCommand> for HookEvent {
    fn from(command: HookCommand) -> Self {
        match command {
            HookCommand::Install => Self::Install,
            HookCommand::Start => Self::Start,
            HookCommand::Stop => Self::Stop,
            HookCommand::ConfigChanged => Self::ConfigChanged,
        }
    }
}

/// Parse arguments, load the snapshot, and run the requested hook.
///
/// # Errors
///
/// Returns an error when the snapshot cannot be loaded or the hook's side
/// effects fail; the orchestrator treats a non-zero exit as a failed hook.
pub fn run() -> CharmResult<()> {
    init_logging(&LoggingConfig::default())?;
    let cli = Cli::parse();

    let config = CharmConfig::load(&cli.config_file)?;
    let ops = HostOps::new(HostPaths::default());
    let mut charm = Charm::new(config, ops, HookToolRuntime::new());

    let event = HookEvent::from(cli.hook);
    charm.handle(event).inspect_err(|err| {
        error!(hook = event.as_str(), error = %err, "hook failed");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn hook_subcommands_map_onto_events() {
        assert_eq!(HookEvent::from(HookCommand::Install), HookEvent::Install);
        assert_eq!(
            HookEvent::from(HookCommand::ConfigChanged),
            HookEvent::ConfigChanged
        );
    }

    #[test]
    fn config_changed_subcommand_uses_the_hook_spelling() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "qbitop",
            "--config-file",
            "/tmp/snapshot.json",
            "config-changed",
        ])?;
        assert!(matches!(cli.hook, HookCommand::ConfigChanged));
        Ok(())
    }
}
