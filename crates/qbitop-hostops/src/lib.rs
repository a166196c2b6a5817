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

//! Host provisioning side effects for the qBittorrent operator: package
//! installation, system-user creation, systemd unit management, SSH key
//! installation, and ownership walks.
//!
//! Layout: `paths.rs` (host path set), `units.rs` (systemd unit text),
//! `service.rs` (`HostOps` entry point).

pub mod error;
pub mod paths;
pub mod service;
pub mod units;

pub use error::{HostOpsError, HostOpsResult};
pub use paths::{HostPaths, SERVICE_USER};
pub use service::{HostCommands, HostOps, PackageInstall, QBITTORRENT_SERVICE, SSHFS_SERVICE};
