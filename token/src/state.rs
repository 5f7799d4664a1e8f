//! Contract identity
//!
//! Balances, allowances and permit nonces live in the shared ledger layout
//! (`common::ledger`).

pub const CONTRACT_NAME: &str = "crates.io:file-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
