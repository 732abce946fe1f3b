//! Pocket Ledger keeps a per-month list of income and expense entries with an
//! optional budget ceiling per month, persisted as JSON blobs and driven from
//! an interactive shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("pocket ledger tracing initialized");
    });
}
