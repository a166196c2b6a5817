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

//! Binary entrypoint for the qBittorrent host operator.

use qbitop_charm::{CharmResult, run};

/// Executes one lifecycle hook and exits.
fn main() -> CharmResult<()> {
    run()
}
