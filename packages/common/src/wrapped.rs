//! Wrapped token interface
//!
//! A wrapped token is a cw20 ledger backed 1:1 by its balance of an
//! underlying cw20. The bridge deposits into it on behalf of users.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Expiration, TokenInfoResponse};

use crate::ledger::{DomainSeparatorResponse, PermitNonceResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub underlying: String,
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Pull `amount` underlying from the caller and mint the same amount
    Deposit { amount: Uint128 },
    /// Burn `amount` and return the underlying to the caller
    Withdraw { amount: Uint128 },

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
    #[returns(UnderlyingResponse)]
    Underlying {},
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
pub struct UnderlyingResponse {
    pub underlying: Addr,
}
