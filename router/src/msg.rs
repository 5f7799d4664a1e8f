use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub factory: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit both tokens at the pool ratio and mint LP shares to `to`,
    /// creating the pair on first use
    AddLiquidity {
        token_a: String,
        token_b: String,
        amount_a_desired: Uint128,
        amount_b_desired: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: String,
        deadline: u64,
    },
    /// Return LP shares to their pair and pay both tokens to `to`
    RemoveLiquidity {
        token_a: String,
        token_b: String,
        liquidity: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: String,
        deadline: u64,
    },
    /// `RemoveLiquidity` approved by an LP permit signed by the caller;
    /// `approve_max` signs for an unlimited allowance
    RemoveLiquidityWithPermit {
        token_a: String,
        token_b: String,
        liquidity: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
        to: String,
        deadline: u64,
        approve_max: bool,
        v: u8,
        r: Binary,
        s: Binary,
    },
    SwapExactTokensForTokens {
        amount_in: Uint128,
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    SwapTokensForExactTokens {
        amount_out: Uint128,
        amount_in_max: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    /// Router only: closes a liquidity removal once the pair has paid out
    AssertLiquidityReceived {
        to: String,
        token_a: String,
        token_b: String,
        balance_a_before: Uint128,
        balance_b_before: Uint128,
        amount_a_min: Uint128,
        amount_b_min: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(AmountResponse)]
    Quote {
        amount_a: Uint128,
        reserve_a: Uint128,
        reserve_b: Uint128,
    },
    #[returns(AmountResponse)]
    GetAmountOut {
        amount_in: Uint128,
        reserve_in: Uint128,
        reserve_out: Uint128,
    },
    #[returns(AmountResponse)]
    GetAmountIn {
        amount_out: Uint128,
        reserve_in: Uint128,
        reserve_out: Uint128,
    },
    #[returns(AmountsResponse)]
    GetAmountsOut { amount_in: Uint128, path: Vec<String> },
    #[returns(AmountsResponse)]
    GetAmountsIn { amount_out: Uint128, path: Vec<String> },
    /// Reserves ordered as `(token_a, token_b)`
    #[returns(RouterReservesResponse)]
    Reserves { token_a: String, token_b: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub factory: Addr,
}

#[cw_serde]
pub struct AmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct AmountsResponse {
    pub amounts: Vec<Uint128>,
}

#[cw_serde]
pub struct RouterReservesResponse {
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
}
