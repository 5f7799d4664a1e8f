//! Liquidity handlers.

use cosmwasm_std::{
    Addr, DepsMut, Env, MessageInfo, QuerierWrapper, Response, Storage, Uint128, Uint256,
};

use common::factory::{FeeToResponse, QueryMsg as FactoryQueryMsg};
use common::ledger::{balance_of, burn_shares, mint_shares, total_supply, transfer_msg};
use common::math::sqrt;
use common::pair::{sort_tokens, MINIMUM_LIQUIDITY};
use common::zero_address;

use super::reserves::update;
use super::{ensure_unlocked, load_tokens, pair_balances};
use crate::error::ContractError;
use crate::state::{PairTokens, Reserves, FACTORY, K_LAST, RESERVES, TOKENS};

/// One-time token assignment, callable by the factory only
pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    token0: String,
    token1: String,
) -> Result<Response, ContractError> {
    if info.sender != FACTORY.load(deps.storage)? {
        return Err(ContractError::Forbidden);
    }
    if TOKENS.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let token0 = deps.api.addr_validate(&token0)?;
    let token1 = deps.api.addr_validate(&token1)?;
    // The factory sorts; this only guards against a mis-ordered call
    let (token0, token1) = sort_tokens(deps.api, &token0, &token1)?;
    TOKENS.save(
        deps.storage,
        &PairTokens {
            token0: token0.clone(),
            token1: token1.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "initialize")
        .add_attribute("token0", token0)
        .add_attribute("token1", token1))
}

/// Protocol fee as LP shares: one sixth of the growth in `sqrt(k)` since the
/// last liquidity event.
pub fn protocol_fee_liquidity(
    total_supply: Uint256,
    root_k: Uint256,
    root_k_last: Uint256,
) -> Option<Uint256> {
    if root_k <= root_k_last {
        return Some(Uint256::zero());
    }
    let numerator = total_supply.checked_mul(root_k - root_k_last).ok()?;
    let denominator = root_k
        .checked_mul(Uint256::from(5u8))
        .ok()?
        .checked_add(root_k_last)
        .ok()?;
    Some(numerator / denominator)
}

/// Mint the protocol fee to the factory's fee recipient if one is set;
/// returns whether the fee is on
fn mint_fee(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    reserves: &Reserves,
) -> Result<bool, ContractError> {
    let factory = FACTORY.load(storage)?;
    let fee_to: FeeToResponse = querier.query_wasm_smart(&factory, &FactoryQueryMsg::FeeTo {})?;
    let k_last = K_LAST.load(storage)?;

    match fee_to.fee_to {
        Some(fee_to) => {
            if !k_last.is_zero() {
                let root_k =
                    sqrt(Uint256::from(reserves.reserve0) * Uint256::from(reserves.reserve1));
                let root_k_last = sqrt(k_last);
                let supply = Uint256::from(total_supply(storage)?);
                let liquidity = protocol_fee_liquidity(supply, root_k, root_k_last)
                    .ok_or(ContractError::Overflow)?;
                if !liquidity.is_zero() {
                    mint_shares(storage, &fee_to, Uint128::try_from(liquidity)?)?;
                }
            }
            Ok(true)
        }
        None => {
            if !k_last.is_zero() {
                K_LAST.save(storage, &Uint256::zero())?;
            }
            Ok(false)
        }
    }
}

fn refresh_k_last(storage: &mut dyn Storage, reserves: &Reserves) -> Result<(), ContractError> {
    K_LAST.save(
        storage,
        &(Uint256::from(reserves.reserve0) * Uint256::from(reserves.reserve1)),
    )?;
    Ok(())
}

/// Mint LP shares for whatever has been sent to the pair since the last update
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let tokens = load_tokens(deps.storage)?;
    let to = deps.api.addr_validate(&to)?;
    let reserves = RESERVES.load(deps.storage)?;
    let (balance0, balance1) = pair_balances(&deps.querier, &tokens, &env.contract.address)?;
    let amount0 = balance0.checked_sub(reserves.reserve0)?;
    let amount1 = balance1.checked_sub(reserves.reserve1)?;

    let fee_on = mint_fee(deps.storage, &deps.querier, &reserves)?;
    let supply = Uint256::from(total_supply(deps.storage)?);

    let liquidity = if supply.is_zero() {
        let root = sqrt(Uint256::from(amount0) * Uint256::from(amount1));
        let liquidity = root
            .checked_sub(Uint256::from(MINIMUM_LIQUIDITY))
            .map_err(|_| ContractError::InsufficientLiquidityMinted)?;
        // permanently lock the first MINIMUM_LIQUIDITY shares
        let zero = zero_address(deps.api)?;
        mint_shares(deps.storage, &zero, Uint128::new(MINIMUM_LIQUIDITY))?;
        liquidity
    } else {
        let liquidity0 =
            (Uint256::from(amount0) * supply).checked_div(Uint256::from(reserves.reserve0))?;
        let liquidity1 =
            (Uint256::from(amount1) * supply).checked_div(Uint256::from(reserves.reserve1))?;
        liquidity0.min(liquidity1)
    };

    if liquidity.is_zero() {
        return Err(ContractError::InsufficientLiquidityMinted);
    }
    let liquidity = Uint128::try_from(liquidity)?;
    mint_shares(deps.storage, &to, liquidity)?;

    let updated = update(deps.storage, &env, balance0, balance1, &reserves)?;
    if fee_on {
        refresh_k_last(deps.storage, &updated)?;
    }

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("sender", info.sender)
        .add_attribute("to", to)
        .add_attribute("amount0", amount0)
        .add_attribute("amount1", amount1)
        .add_attribute("liquidity", liquidity)
        .add_attribute("reserve0", updated.reserve0)
        .add_attribute("reserve1", updated.reserve1))
}

/// Burn the LP shares held by the pair itself and pay out the share of both
/// balances to `to`
pub fn execute_burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let tokens = load_tokens(deps.storage)?;
    let to = deps.api.addr_validate(&to)?;
    let pair: &Addr = &env.contract.address;
    let reserves = RESERVES.load(deps.storage)?;
    let (balance0, balance1) = pair_balances(&deps.querier, &tokens, pair)?;
    let liquidity = balance_of(deps.storage, pair)?;

    let fee_on = mint_fee(deps.storage, &deps.querier, &reserves)?;
    let supply = Uint256::from(total_supply(deps.storage)?);
    if supply.is_zero() {
        return Err(ContractError::InsufficientLiquidityBurned);
    }

    // pro-rata distribution
    let amount0 = Uint128::try_from(Uint256::from(liquidity) * Uint256::from(balance0) / supply)?;
    let amount1 = Uint128::try_from(Uint256::from(liquidity) * Uint256::from(balance1) / supply)?;
    if amount0.is_zero() || amount1.is_zero() {
        return Err(ContractError::InsufficientLiquidityBurned);
    }

    burn_shares(deps.storage, pair, liquidity)?;

    // The transfers run after this handler returns; reserves track the
    // balances they leave behind
    let updated = update(
        deps.storage,
        &env,
        balance0 - amount0,
        balance1 - amount1,
        &reserves,
    )?;
    if fee_on {
        refresh_k_last(deps.storage, &updated)?;
    }

    Ok(Response::new()
        .add_message(transfer_msg(&tokens.token0, &to, amount0)?)
        .add_message(transfer_msg(&tokens.token1, &to, amount1)?)
        .add_attribute("action", "burn")
        .add_attribute("sender", info.sender)
        .add_attribute("to", to)
        .add_attribute("amount0", amount0)
        .add_attribute("amount1", amount1)
        .add_attribute("liquidity", liquidity)
        .add_attribute("reserve0", updated.reserve0)
        .add_attribute("reserve1", updated.reserve1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u128) -> Uint256 {
        Uint256::from(v)
    }

    #[test]
    fn test_protocol_fee_formula() {
        // sqrt(k) grew from 1000 to 1100 with 1000 LP outstanding:
        // 1000 * 100 / (1100 * 5 + 1000) = 15
        assert_eq!(protocol_fee_liquidity(n(1000), n(1100), n(1000)), Some(n(15)));
    }

    #[test]
    fn test_protocol_fee_zero_without_growth() {
        assert_eq!(
            protocol_fee_liquidity(n(1000), n(1000), n(1000)),
            Some(Uint256::zero())
        );
        assert_eq!(
            protocol_fee_liquidity(n(1000), n(900), n(1000)),
            Some(Uint256::zero())
        );
    }
}
