//! Reserve maintenance.

use cosmwasm_std::{DepsMut, Env, Response, Storage, Uint128, Uint256};

use common::ledger::transfer_msg;
use common::math::{uq112x112_div, uq112x112_encode, U112_MAX};

use super::{ensure_unlocked, load_tokens, pair_balances};
use crate::error::ContractError;
use crate::state::{Reserves, PRICE_CUMULATIVE, RESERVES};

/// Store new reserves and, on the first update of each block time, grow the
/// price accumulators by `price * seconds_elapsed`.
pub(crate) fn update(
    storage: &mut dyn Storage,
    env: &Env,
    balance0: Uint128,
    balance1: Uint128,
    reserves: &Reserves,
) -> Result<Reserves, ContractError> {
    if Uint256::from(balance0) > U112_MAX || Uint256::from(balance1) > U112_MAX {
        return Err(ContractError::Overflow);
    }

    let block_timestamp = (env.block.time.seconds() % (1u64 << 32)) as u32;
    let time_elapsed = block_timestamp.wrapping_sub(reserves.block_timestamp_last);

    if time_elapsed > 0 && !reserves.reserve0.is_zero() && !reserves.reserve1.is_zero() {
        let elapsed = Uint256::from(time_elapsed);
        let reserve0 = Uint256::from(reserves.reserve0);
        let reserve1 = Uint256::from(reserves.reserve1);
        let price0 = uq112x112_div(uq112x112_encode(reserve1), reserve0);
        let price1 = uq112x112_div(uq112x112_encode(reserve0), reserve1);

        let mut cumulative = PRICE_CUMULATIVE.load(storage)?;
        cumulative.price0 = cumulative.price0.wrapping_add(price0.wrapping_mul(elapsed));
        cumulative.price1 = cumulative.price1.wrapping_add(price1.wrapping_mul(elapsed));
        PRICE_CUMULATIVE.save(storage, &cumulative)?;
    }

    let updated = Reserves {
        reserve0: balance0,
        reserve1: balance1,
        block_timestamp_last: block_timestamp,
    };
    RESERVES.save(storage, &updated)?;
    Ok(updated)
}

/// Send any balance above the reserves to `to`
pub fn execute_skim(deps: DepsMut, env: Env, to: String) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let tokens = load_tokens(deps.storage)?;
    let to = deps.api.addr_validate(&to)?;
    let reserves = RESERVES.load(deps.storage)?;
    let (balance0, balance1) = pair_balances(&deps.querier, &tokens, &env.contract.address)?;

    let excess0 = balance0.saturating_sub(reserves.reserve0);
    let excess1 = balance1.saturating_sub(reserves.reserve1);

    let mut res = Response::new();
    if !excess0.is_zero() {
        res = res.add_message(transfer_msg(&tokens.token0, &to, excess0)?);
    }
    if !excess1.is_zero() {
        res = res.add_message(transfer_msg(&tokens.token1, &to, excess1)?);
    }

    Ok(res
        .add_attribute("action", "skim")
        .add_attribute("to", to)
        .add_attribute("amount0", excess0)
        .add_attribute("amount1", excess1))
}

/// Force reserves to match balances
pub fn execute_sync(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    ensure_unlocked(deps.storage)?;
    let tokens = load_tokens(deps.storage)?;
    let reserves = RESERVES.load(deps.storage)?;
    let (balance0, balance1) = pair_balances(&deps.querier, &tokens, &env.contract.address)?;

    let updated = update(deps.storage, &env, balance0, balance1, &reserves)?;

    Ok(Response::new()
        .add_attribute("action", "sync")
        .add_attribute("reserve0", updated.reserve0)
        .add_attribute("reserve1", updated.reserve1))
}
