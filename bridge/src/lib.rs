//! FileBridge Contract
//!
//! Source side: governance lists which tokens may leave the chain and the
//! wrapped token each one is locked into. A deposit wraps the caller's tokens
//! and leaves the wrapped balance with the bridge.
//!
//! Destination side: a guardian signs an EIP-712 `Redeem` for the recipient's
//! current nonce and the bridge pays out from its own balance.
//!
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

pub mod contract;
pub mod error;
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
