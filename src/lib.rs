#![doc(test(attr(deny(warnings))))]

//! Bank Core keeps per-account movement ledgers, derives balances and
//! summaries from them, and queues loan requests for approval. The
//! `bank_core_cli` binary exposes it as an interactive shell.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Bank Core tracing initialized.");
    });
}
