//! WrappedToken - Underlying-backed cw20
//!
//! Deposits pull the underlying cw20 from the caller and mint the same amount;
//! withdrawals burn and hand the underlying back. The contract's underlying
//! balance is the backing of its supply.

pub mod contract;
pub mod error;
pub mod state;

pub use crate::error::ContractError;
