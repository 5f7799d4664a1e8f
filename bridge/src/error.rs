use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Unauthorized: accounts can only renounce roles for themselves")]
    Unauthorized,

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { role: String, account: String },

    #[error("Invalid role: expected 32 bytes, got {len}")]
    InvalidRole { len: usize },

    #[error("Invalid signature")]
    InvalidSignature,

    // ========================================================================
    // Allow-list Errors
    // ========================================================================
    #[error("TOKEN_EXIST: {token} already has a wrapped token")]
    TokenExists { token: String },

    #[error("TOKEN_DOESNT_EXIST: {token} has no wrapped token")]
    TokenMissing { token: String },

    #[error("Token not supported: {token}")]
    TokenNotSupported { token: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
