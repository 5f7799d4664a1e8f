//! Error types for the Fileswap pair

use common::pair::TokenOrderError;
use common::LedgerError;
use cosmwasm_std::{ConversionOverflowError, DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),

    #[error("{0}")]
    TokenOrder(#[from] TokenOrderError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Fileswap: FORBIDDEN")]
    Forbidden,

    // ========================================================================
    // State Errors
    // ========================================================================
    #[error("Fileswap: ALREADY_INITIALIZED")]
    AlreadyInitialized,

    #[error("Fileswap: NOT_INITIALIZED")]
    NotInitialized,

    #[error("Fileswap: LOCKED")]
    Locked,

    #[error("Fileswap: unknown reply id {id}")]
    UnknownReply { id: u64 },

    // ========================================================================
    // Invariant Errors
    // ========================================================================
    #[error("Fileswap: K")]
    K,

    #[error("Fileswap: OVERFLOW")]
    Overflow,

    #[error("Fileswap: INSUFFICIENT_LIQUIDITY")]
    InsufficientLiquidity,

    #[error("Fileswap: INSUFFICIENT_LIQUIDITY_MINTED")]
    InsufficientLiquidityMinted,

    #[error("Fileswap: INSUFFICIENT_LIQUIDITY_BURNED")]
    InsufficientLiquidityBurned,

    #[error("Fileswap: INSUFFICIENT_OUTPUT_AMOUNT")]
    InsufficientOutputAmount,

    #[error("Fileswap: INSUFFICIENT_INPUT_AMOUNT")]
    InsufficientInputAmount,

    #[error("Fileswap: INVALID_TO")]
    InvalidTo,
}

impl From<OverflowError> for ContractError {
    fn from(err: OverflowError) -> Self {
        ContractError::Std(err.into())
    }
}

impl From<DivideByZeroError> for ContractError {
    fn from(err: DivideByZeroError) -> Self {
        ContractError::Std(err.into())
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(err: ConversionOverflowError) -> Self {
        ContractError::Std(err.into())
    }
}
