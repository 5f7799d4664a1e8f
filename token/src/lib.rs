//! FileToken - Plain cw20 Asset with Permit
//!
//! A cw20 ledger whose supply is created only by its minter, extended with
//! absolute approvals, unlimited allowances and EIP-2612 permits. Test
//! fixtures and bridge deployments use it as the underlying asset.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
