//! Fileswap factory interface

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};

#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to change the protocol fee recipient
    pub fee_to_setter: String,
    /// Stored code of the pair contract
    pub pair_code_id: u64,
    /// Chain id handed to every pair for its LP permit domain
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deploy the pair for two tokens at its deterministic address
    CreatePair { token_a: String, token_b: String },
    /// Fee setter only; `None` or the zero address turns the protocol fee off
    SetFeeTo { fee_to: Option<String> },
    /// Fee setter only
    SetFeeToSetter { fee_to_setter: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Registered pair for two tokens, in either order
    #[returns(GetPairResponse)]
    Pair { token_a: String, token_b: String },
    /// Address the pair for two tokens has or will have
    #[returns(PairAddressResponse)]
    PairAddress { token_a: String, token_b: String },
    #[returns(AllPairsResponse)]
    AllPairs { index: u64 },
    #[returns(AllPairsLengthResponse)]
    AllPairsLength {},
    #[returns(FeeToResponse)]
    FeeTo {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub fee_to_setter: Addr,
    pub pair_code_id: u64,
    pub pair_checksum: HexBinary,
    pub chain_id: u64,
}

#[cw_serde]
pub struct GetPairResponse {
    pub pair: Option<Addr>,
}

#[cw_serde]
pub struct PairAddressResponse {
    pub pair: Addr,
    pub token0: Addr,
    pub token1: Addr,
}

#[cw_serde]
pub struct AllPairsResponse {
    pub pair: Addr,
}

#[cw_serde]
pub struct AllPairsLengthResponse {
    pub length: u64,
}

#[cw_serde]
pub struct FeeToResponse {
    pub fee_to: Option<Addr>,
}
