//! Fileswap Pair - Constant-Product Market
//!
//! Holds reserves of two cw20 tokens and issues LP shares against them.
//! The implementation is split into:
//! - `contract` - entry points, including the swap reply
//! - `execute` - liquidity, swap and reserve maintenance handlers
//! - `query` - reserves, accumulators and LP ledger queries

pub mod contract;
pub mod error;
pub mod execute;
pub mod query;
pub mod state;

pub use crate::error::ContractError;
