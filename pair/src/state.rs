//! State definitions for the Fileswap pair
//!
//! LP balances, allowances and permit nonces live in the shared ledger
//! layout (`common::ledger`).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:fileswap-pair";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the last message of a swap; the invariant check runs there
pub const SWAP_REPLY_ID: u64 = 1;

/// Deployer; the only account allowed to initialize the tokens
pub const FACTORY: Item<Addr> = Item::new("factory");

#[cw_serde]
pub struct PairTokens {
    pub token0: Addr,
    pub token1: Addr,
}

/// Set once by `Initialize`
pub const TOKENS: Item<PairTokens> = Item::new("tokens");

#[cw_serde]
pub struct Reserves {
    pub reserve0: Uint128,
    pub reserve1: Uint128,
    /// Block time of the last update, mod 2^32
    pub block_timestamp_last: u32,
}

pub const RESERVES: Item<Reserves> = Item::new("reserves");

/// UQ112x112 prices times seconds, wrapping
#[cw_serde]
pub struct PriceCumulative {
    pub price0: Uint256,
    pub price1: Uint256,
}

pub const PRICE_CUMULATIVE: Item<PriceCumulative> = Item::new("price_cumulative");

/// reserve0 * reserve1 after the last liquidity event while the protocol fee is on
pub const K_LAST: Item<Uint256> = Item::new("k_last");

/// Held from a swap's optimistic transfers until its reply has run
pub const LOCKED: Item<bool> = Item::new("locked");

/// A swap waiting for its invariant check
#[cw_serde]
pub struct PendingSwap {
    pub sender: Addr,
    pub to: Addr,
    pub amount0_out: Uint128,
    pub amount1_out: Uint128,
}

pub const PENDING_SWAP: Item<PendingSwap> = Item::new("pending_swap");
