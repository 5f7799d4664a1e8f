//! Execute handlers for the Fileswap pair.
//!
//! - `liquidity` - Initialize, Mint, Burn and the protocol fee
//! - `swap` - Swap and its reply-side invariant check
//! - `reserves` - Skim, Sync and the reserve/TWAP update shared by all

mod liquidity;
mod reserves;
mod swap;

pub use liquidity::*;
pub use reserves::*;
pub use swap::*;

use cosmwasm_std::{Addr, QuerierWrapper, Storage, Uint128};

use common::ledger::query_cw20_balance;

use crate::error::ContractError;
use crate::state::{PairTokens, LOCKED, TOKENS};

/// Every mutating handler starts here
pub fn ensure_unlocked(storage: &dyn Storage) -> Result<(), ContractError> {
    if LOCKED.may_load(storage)?.unwrap_or(false) {
        return Err(ContractError::Locked);
    }
    Ok(())
}

pub(crate) fn load_tokens(storage: &dyn Storage) -> Result<PairTokens, ContractError> {
    TOKENS
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized)
}

/// Current cw20 balances of the pair
pub(crate) fn pair_balances(
    querier: &QuerierWrapper,
    tokens: &PairTokens,
    pair: &Addr,
) -> Result<(Uint128, Uint128), ContractError> {
    let balance0 = query_cw20_balance(querier, &tokens.token0, pair)?;
    let balance1 = query_cw20_balance(querier, &tokens.token1, pair)?;
    Ok((balance0, balance1))
}
