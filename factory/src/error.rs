use common::pair::TokenOrderError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    TokenOrder(#[from] TokenOrderError),

    #[error("Fileswap: FORBIDDEN")]
    Forbidden,

    #[error("Fileswap: PAIR_EXISTS")]
    PairExists,
}
