//! Fileswap pair interface
//!
//! Shared by the pair contract, the factory that deploys it and the router
//! that drives it.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Api, Binary, StdError, Uint128, Uint256};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};
use thiserror::Error;

use crate::address::is_zero_address;
use crate::ledger::{DomainSeparatorResponse, PermitNonceResponse};

/// LP shares locked at the zero address on the first mint
pub const MINIMUM_LIQUIDITY: u128 = 1000;

pub const LP_TOKEN_NAME: &str = "Fileswap V2";
pub const LP_TOKEN_SYMBOL: &str = "FILE-V2";

#[cw_serde]
pub struct InstantiateMsg {
    /// Chain id bound into the LP permit domain
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Factory only: assign the token pair once
    Initialize { token0: String, token1: String },
    /// Mint LP shares for tokens sent to the pair since the last update
    Mint { to: String },
    /// Burn the LP shares held by the pair and pay out both tokens to `to`
    Burn { to: String },
    /// Send outputs to `to`, optionally calling it back with `data`, then
    /// require the fee-adjusted product not to shrink
    Swap {
        amount0_out: Uint128,
        amount1_out: Uint128,
        to: String,
        data: Binary,
    },
    /// Send balances above the reserves to `to`
    Skim { to: String },
    /// Set reserves to the current balances
    Sync {},

    // LP share ledger
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    Approve {
        spender: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Factory and the two tokens
    #[returns(PairInfoResponse)]
    Pair {},
    #[returns(ReservesResponse)]
    Reserves {},
    #[returns(PriceCumulativeResponse)]
    PriceCumulativeLast {},
    #[returns(KLastResponse)]
    KLast {},
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(PermitNonceResponse)]
    PermitNonce { owner: String },
    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},
}

#[cw_serde]
pub struct PairInfoResponse {
    pub factory: Addr,
    pub token0: Addr,
    pub token1: Addr,
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserve0: Uint128,
    pub reserve1: Uint128,
    pub block_timestamp_last: u32,
}

#[cw_serde]
pub struct PriceCumulativeResponse {
    pub price0_cumulative_last: Uint256,
    pub price1_cumulative_last: Uint256,
}

#[cw_serde]
pub struct KLastResponse {
    pub k_last: Uint256,
}

/// Message a flash swap sends to its `to` contract while the pair is locked
#[cw_serde]
pub enum FileswapCalleeMsg {
    FileswapCall {
        sender: String,
        amount0: Uint128,
        amount1: Uint128,
        data: Binary,
    },
}

// ============================================================================
// Token ordering
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum TokenOrderError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Fileswap: IDENTICAL_ADDRESSES")]
    IdenticalAddresses,

    #[error("Fileswap: ZERO_ADDRESS")]
    ZeroAddress,
}

/// Order two tokens by canonical address bytes
pub fn sort_tokens(api: &dyn Api, a: &Addr, b: &Addr) -> Result<(Addr, Addr), TokenOrderError> {
    if a == b {
        return Err(TokenOrderError::IdenticalAddresses);
    }
    let ca = api.addr_canonicalize(a.as_str())?;
    let cb = api.addr_canonicalize(b.as_str())?;
    let (token0, token1) = if ca.as_slice() < cb.as_slice() {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    };
    if is_zero_address(api, &token0)? {
        return Err(TokenOrderError::ZeroAddress);
    }
    Ok((token0, token1))
}
