//! State definitions for the Fileswap factory

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:fileswap-factory";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    pub fee_to_setter: Addr,
    pub pair_code_id: u64,
    /// Checksum of the pair code, input to every pair address
    pub pair_checksum: HexBinary,
    pub chain_id: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Protocol fee recipient; absent while the fee is off
pub const FEE_TO: Item<Addr> = Item::new("fee_to");

/// Pair by token pair, stored under both orderings
pub const PAIRS: Map<(&Addr, &Addr), Addr> = Map::new("pairs");

/// Append-only pair list
pub const ALL_PAIRS: Map<u64, Addr> = Map::new("all_pairs");
pub const ALL_PAIRS_LENGTH: Item<u64> = Item::new("all_pairs_length");
