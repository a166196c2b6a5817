#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Lifecycle layer of the qBittorrent operator: maps orchestrator hook
//! events onto host provisioning and configuration writes.
//!
//! Layout: `config.rs` (charm configuration snapshot), `runtime.rs`
//! (status/port reporting back to the orchestrator), `hooks.rs` (the four
//! hook handlers), `cli.rs` (binary entrypoint wiring).

pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod runtime;

pub use cli::run;
pub use config::CharmConfig;
pub use error::{CharmError, CharmResult};
pub use hooks::{Charm, HookEvent};
pub use runtime::{HookToolRuntime, Runtime, Status};
