//! Fileswap Factory
//!
//! Registry mapping each unordered token pair to exactly one pair contract.
//! Pairs are deployed with `instantiate2`, salted by the sorted tokens, so
//! anyone can compute a pair's address from the factory, the pair code
//! checksum and the two tokens.

pub mod contract;
pub mod error;
pub mod state;

pub use crate::error::ContractError;
