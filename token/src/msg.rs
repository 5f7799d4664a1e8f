use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};
use cw20::{
    AllowanceResponse, BalanceResponse, Cw20Coin, Expiration, MinterResponse, TokenInfoResponse,
};

use common::ledger::{DomainSeparatorResponse, PermitNonceResponse};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Only this account may mint; `None` fixes the supply at the initial balances
    pub minter: Option<String>,
    pub initial_balances: Vec<Cw20Coin>,
    /// Chain id bound into the permit domain
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
    /// Set the allowance of `spender` to exactly `amount`
    Approve {
        spender: String,
        amount: Uint128,
    },
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Fails instead of clamping when `amount` exceeds the allowance
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },
    /// Approve from an off-chain EIP-712 signature of `owner`
    Permit {
        owner: String,
        spender: String,
        amount: Uint128,
        deadline: u64,
        v: u8,
        r: Binary,
        s: Binary,
    },
    /// Minter only
    Mint {
        recipient: String,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BalanceResponse)]
    Balance { address: String },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },
    #[returns(Option<MinterResponse>)]
    Minter {},
    /// Nonce the next permit of `owner` must sign
    #[returns(PermitNonceResponse)]
    PermitNonce { owner: String },
    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},
}

#[cw_serde]
pub struct MigrateMsg {}
