//! Query handlers for the Fileswap pair.

use cosmwasm_std::{Deps, StdResult};

use common::pair::{KLastResponse, PairInfoResponse, PriceCumulativeResponse, ReservesResponse};

use crate::state::{FACTORY, K_LAST, PRICE_CUMULATIVE, RESERVES, TOKENS};

pub fn query_pair(deps: Deps) -> StdResult<PairInfoResponse> {
    let tokens = TOKENS.load(deps.storage)?;
    Ok(PairInfoResponse {
        factory: FACTORY.load(deps.storage)?,
        token0: tokens.token0,
        token1: tokens.token1,
    })
}

pub fn query_reserves(deps: Deps) -> StdResult<ReservesResponse> {
    let reserves = RESERVES.load(deps.storage)?;
    Ok(ReservesResponse {
        reserve0: reserves.reserve0,
        reserve1: reserves.reserve1,
        block_timestamp_last: reserves.block_timestamp_last,
    })
}

pub fn query_price_cumulative(deps: Deps) -> StdResult<PriceCumulativeResponse> {
    let cumulative = PRICE_CUMULATIVE.load(deps.storage)?;
    Ok(PriceCumulativeResponse {
        price0_cumulative_last: cumulative.price0,
        price1_cumulative_last: cumulative.price1,
    })
}

pub fn query_k_last(deps: Deps) -> StdResult<KLastResponse> {
    Ok(KLastResponse {
        k_last: K_LAST.load(deps.storage)?,
    })
}
