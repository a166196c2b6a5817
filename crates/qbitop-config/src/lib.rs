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

//! Case-sensitive, order-preserving configuration store for the qBittorrent
//! daemon's `qBittorrent.conf` file.
//!
//! Layout: `document.rs` (ordered INI model, parser and writer), `store.rs`
//! (`QbConfig` facade with the semantic setters and password hashing).

pub mod document;
pub mod error;
pub mod store;

pub use document::{ConfDocument, ConfSection};
pub use error::{ConfigError, ConfigResult};
pub use store::QbConfig;
