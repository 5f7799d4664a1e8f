//! Exchange library - pricing math and pair lookup used by the router
//!
//! The pure functions mirror the constant-product formulas with the 0.3% swap
//! fee (997/1000). Intermediate products are computed in 256 bits; a result
//! that does not fit back into 128 bits is `Overflow`.

use cosmwasm_std::{Addr, Api, QuerierWrapper, Uint128, Uint256};

use common::factory::{GetPairResponse, QueryMsg as FactoryQueryMsg};
use common::pair::{sort_tokens, QueryMsg as PairQueryMsg, ReservesResponse};

use crate::error::ContractError;

// ============================================================================
// Pure Math
// ============================================================================

fn narrow(value: Uint256) -> Result<Uint128, ContractError> {
    Uint128::try_from(value).map_err(|_| ContractError::Overflow)
}

/// Equivalent amount of the other asset at the current reserve ratio
pub fn quote(
    amount_a: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
) -> Result<Uint128, ContractError> {
    if amount_a.is_zero() {
        return Err(ContractError::InsufficientAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }
    narrow(Uint256::from(amount_a) * Uint256::from(reserve_b) / Uint256::from(reserve_a))
}

/// Maximum output for an exact input, after the 0.3% fee
pub fn get_amount_out(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::InsufficientInputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }
    let amount_in_with_fee = Uint256::from(amount_in) * Uint256::from(997u32);
    let numerator = amount_in_with_fee * Uint256::from(reserve_out);
    let denominator = Uint256::from(reserve_in) * Uint256::from(1000u32) + amount_in_with_fee;
    narrow(numerator / denominator)
}

/// Minimum input for an exact output, rounded up
pub fn get_amount_in(
    amount_out: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if amount_out.is_zero() {
        return Err(ContractError::InsufficientLibraryOutputAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(ContractError::InsufficientLiquidity);
    }
    let numerator =
        Uint256::from(reserve_in) * Uint256::from(amount_out) * Uint256::from(1000u32);
    let denominator = Uint256::from(reserve_out - amount_out) * Uint256::from(997u32);
    narrow(numerator / denominator + Uint256::one())
}

// ============================================================================
// State Reads
// ============================================================================

/// Registered pair for `(token_a, token_b)`
pub fn pair_of(
    querier: &QuerierWrapper,
    factory: &Addr,
    token_a: &Addr,
    token_b: &Addr,
) -> Result<Addr, ContractError> {
    let res: GetPairResponse = querier.query_wasm_smart(
        factory,
        &FactoryQueryMsg::Pair {
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
        },
    )?;
    res.pair.ok_or_else(|| ContractError::PairNotFound {
        token_a: token_a.to_string(),
        token_b: token_b.to_string(),
    })
}

/// Reserves ordered as `(token_a, token_b)`
pub fn get_reserves(
    api: &dyn Api,
    querier: &QuerierWrapper,
    factory: &Addr,
    token_a: &Addr,
    token_b: &Addr,
) -> Result<(Uint128, Uint128), ContractError> {
    let (token0, _) = sort_tokens(api, token_a, token_b)?;
    let pair = pair_of(querier, factory, token_a, token_b)?;
    let reserves: ReservesResponse = querier.query_wasm_smart(&pair, &PairQueryMsg::Reserves {})?;

    if token_a == &token0 {
        Ok((reserves.reserve0, reserves.reserve1))
    } else {
        Ok((reserves.reserve1, reserves.reserve0))
    }
}

/// Chained `get_amount_out` along `path`
pub fn get_amounts_out(
    api: &dyn Api,
    querier: &QuerierWrapper,
    factory: &Addr,
    amount_in: Uint128,
    path: &[Addr],
) -> Result<Vec<Uint128>, ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidPath);
    }
    let mut amounts = Vec::with_capacity(path.len());
    amounts.push(amount_in);
    for hop in path.windows(2) {
        let (reserve_in, reserve_out) = get_reserves(api, querier, factory, &hop[0], &hop[1])?;
        let previous = amounts[amounts.len() - 1];
        amounts.push(get_amount_out(previous, reserve_in, reserve_out)?);
    }
    Ok(amounts)
}

/// Chained `get_amount_in` along `path`, computed from the output back
pub fn get_amounts_in(
    api: &dyn Api,
    querier: &QuerierWrapper,
    factory: &Addr,
    amount_out: Uint128,
    path: &[Addr],
) -> Result<Vec<Uint128>, ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidPath);
    }
    let mut amounts = vec![Uint128::zero(); path.len()];
    amounts[path.len() - 1] = amount_out;
    for i in (1..path.len()).rev() {
        let (reserve_in, reserve_out) =
            get_reserves(api, querier, factory, &path[i - 1], &path[i])?;
        amounts[i - 1] = get_amount_in(amounts[i], reserve_in, reserve_out)?;
    }
    Ok(amounts)
}
