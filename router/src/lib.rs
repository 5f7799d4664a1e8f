//! Fileswap Router
//!
//! Stateless orchestration over the factory and its pairs. The router never
//! holds balances between calls: it pulls tokens from the caller straight
//! into pairs through the caller's allowance, and every hop sends its output
//! directly to the next pair.
//!
//! - `library` - pricing math and factory/pair lookups
//! - `execute` - liquidity and swap handlers
//! - `contract` - entry points

pub mod contract;
pub mod error;
pub mod execute;
pub mod library;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
