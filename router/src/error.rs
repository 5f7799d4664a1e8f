//! Error types for the Fileswap router

use common::pair::TokenOrderError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    TokenOrder(#[from] TokenOrderError),

    #[error("Unauthorized: only the router itself can perform this action")]
    Unauthorized,

    // ========================================================================
    // Bound Errors
    // ========================================================================
    #[error("FileswapRouter: EXPIRED (deadline {deadline}, block time {now})")]
    Expired { deadline: u64, now: u64 },

    #[error("FileswapRouter: INSUFFICIENT_A_AMOUNT")]
    InsufficientAAmount,

    #[error("FileswapRouter: INSUFFICIENT_B_AMOUNT")]
    InsufficientBAmount,

    #[error("FileswapRouter: INSUFFICIENT_OUTPUT_AMOUNT")]
    InsufficientOutputAmount,

    #[error("FileswapRouter: EXCESSIVE_INPUT_AMOUNT")]
    ExcessiveInputAmount,

    #[error("FileswapRouter: INVALID_PATH")]
    InvalidPath,

    #[error("FileswapRouter: pair not found for {token_a} and {token_b}")]
    PairNotFound { token_a: String, token_b: String },

    // ========================================================================
    // Library Errors
    // ========================================================================
    #[error("FileswapLibrary: INSUFFICIENT_AMOUNT")]
    InsufficientAmount,

    #[error("FileswapLibrary: INSUFFICIENT_LIQUIDITY")]
    InsufficientLiquidity,

    #[error("FileswapLibrary: INSUFFICIENT_INPUT_AMOUNT")]
    InsufficientInputAmount,

    #[error("FileswapLibrary: INSUFFICIENT_OUTPUT_AMOUNT")]
    InsufficientLibraryOutputAmount,

    #[error("FileswapLibrary: OVERFLOW")]
    Overflow,
}
