//! Liquidity handlers.
//!
//! Removal cannot read the pair's payout from a message result, so the router
//! snapshots the recipient's balances, lets the pair burn, and then calls
//! itself with `AssertLiquidityReceived` to compare against the minimums. A
//! failed assertion reverts the whole transaction.

use cosmwasm_std::{Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use common::factory::{
    ExecuteMsg as FactoryExecuteMsg, PairAddressResponse, QueryMsg as FactoryQueryMsg,
};
use common::ledger::{query_cw20_balance, transfer_from_msg};
use common::pair::ExecuteMsg as PairExecuteMsg;

use super::{ensure_deadline, wasm_execute_msg};
use crate::error::ContractError;
use crate::library::{get_reserves, pair_of, quote};
use crate::msg::ExecuteMsg;
use crate::state::CONFIG;

/// Bounds on one liquidity removal
pub struct RemoveBounds {
    pub liquidity: Uint128,
    pub amount_a_min: Uint128,
    pub amount_b_min: Uint128,
}

/// Deposit amounts at the current pool ratio, within the desired maximums
/// and the caller's minimums
pub fn optimal_amounts(
    reserve_a: Uint128,
    reserve_b: Uint128,
    amount_a_desired: Uint128,
    amount_b_desired: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if reserve_a.is_zero() && reserve_b.is_zero() {
        return Ok((amount_a_desired, amount_b_desired));
    }

    let amount_b_optimal = quote(amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            return Err(ContractError::InsufficientBAmount);
        }
        return Ok((amount_a_desired, amount_b_optimal));
    }

    let amount_a_optimal = quote(amount_b_desired, reserve_b, reserve_a)?;
    if amount_a_optimal > amount_a_desired || amount_a_optimal < amount_a_min {
        return Err(ContractError::InsufficientAAmount);
    }
    Ok((amount_a_optimal, amount_b_desired))
}

/// Pull both tokens from the caller into the pair and mint LP shares to
/// `to`. A missing pair is created first at its predicted address.
#[allow(clippy::too_many_arguments)]
pub fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    amount_a_desired: Uint128,
    amount_b_desired: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    ensure_deadline(&env, deadline)?;
    let factory = CONFIG.load(deps.storage)?.factory;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let to = deps.api.addr_validate(&to)?;

    let mut msgs: Vec<CosmosMsg> = vec![];
    let (pair, reserve_a, reserve_b) = match pair_of(&deps.querier, &factory, &token_a, &token_b) {
        Ok(pair) => {
            let (reserve_a, reserve_b) =
                get_reserves(deps.api, &deps.querier, &factory, &token_a, &token_b)?;
            (pair, reserve_a, reserve_b)
        }
        Err(ContractError::PairNotFound { .. }) => {
            let predicted: PairAddressResponse = deps.querier.query_wasm_smart(
                &factory,
                &FactoryQueryMsg::PairAddress {
                    token_a: token_a.to_string(),
                    token_b: token_b.to_string(),
                },
            )?;
            msgs.push(wasm_execute_msg(
                &factory,
                &FactoryExecuteMsg::CreatePair {
                    token_a: token_a.to_string(),
                    token_b: token_b.to_string(),
                },
            )?);
            (predicted.pair, Uint128::zero(), Uint128::zero())
        }
        Err(err) => return Err(err),
    };

    let (amount_a, amount_b) = optimal_amounts(
        reserve_a,
        reserve_b,
        amount_a_desired,
        amount_b_desired,
        amount_a_min,
        amount_b_min,
    )?;

    msgs.push(transfer_from_msg(&token_a, &info.sender, &pair, amount_a)?);
    msgs.push(transfer_from_msg(&token_b, &info.sender, &pair, amount_b)?);
    msgs.push(wasm_execute_msg(
        &pair,
        &PairExecuteMsg::Mint { to: to.to_string() },
    )?);

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "add_liquidity")
        .add_attribute("pair", pair)
        .add_attribute("amount_a", amount_a)
        .add_attribute("amount_b", amount_b)
        .add_attribute("to", to))
}

/// Messages shared by both removal paths: return the shares, burn, assert
#[allow(clippy::too_many_arguments)]
fn removal_messages(
    deps: Deps,
    env: &Env,
    owner: &Addr,
    pair: &Addr,
    token_a: &Addr,
    token_b: &Addr,
    to: &Addr,
    bounds: &RemoveBounds,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let balance_a_before = query_cw20_balance(&deps.querier, token_a, to)?;
    let balance_b_before = query_cw20_balance(&deps.querier, token_b, to)?;

    Ok(vec![
        wasm_execute_msg(
            pair,
            &PairExecuteMsg::TransferFrom {
                owner: owner.to_string(),
                recipient: pair.to_string(),
                amount: bounds.liquidity,
            },
        )?,
        wasm_execute_msg(pair, &PairExecuteMsg::Burn { to: to.to_string() })?,
        wasm_execute_msg(
            &env.contract.address,
            &ExecuteMsg::AssertLiquidityReceived {
                to: to.to_string(),
                token_a: token_a.to_string(),
                token_b: token_b.to_string(),
                balance_a_before,
                balance_b_before,
                amount_a_min: bounds.amount_a_min,
                amount_b_min: bounds.amount_b_min,
            },
        )?,
    ])
}

/// Return LP shares to their pair and pay both tokens to `to`
#[allow(clippy::too_many_arguments)]
pub fn execute_remove_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    bounds: RemoveBounds,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    ensure_deadline(&env, deadline)?;
    let factory = CONFIG.load(deps.storage)?.factory;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let to = deps.api.addr_validate(&to)?;
    let pair = pair_of(&deps.querier, &factory, &token_a, &token_b)?;

    let msgs = removal_messages(
        deps.as_ref(),
        &env,
        &info.sender,
        &pair,
        &token_a,
        &token_b,
        &to,
        &bounds,
    )?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "remove_liquidity")
        .add_attribute("pair", pair)
        .add_attribute("liquidity", bounds.liquidity)
        .add_attribute("to", to))
}

/// Removal preceded by an LP permit from the caller to the router
#[allow(clippy::too_many_arguments)]
pub fn execute_remove_liquidity_with_permit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    bounds: RemoveBounds,
    to: String,
    deadline: u64,
    approve_max: bool,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, ContractError> {
    ensure_deadline(&env, deadline)?;
    let factory = CONFIG.load(deps.storage)?.factory;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let to = deps.api.addr_validate(&to)?;
    let pair = pair_of(&deps.querier, &factory, &token_a, &token_b)?;

    let value = if approve_max {
        Uint128::MAX
    } else {
        bounds.liquidity
    };
    let mut msgs = vec![wasm_execute_msg(
        &pair,
        &PairExecuteMsg::Permit {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
            amount: value,
            deadline,
            v,
            r,
            s,
        },
    )?];
    msgs.extend(removal_messages(
        deps.as_ref(),
        &env,
        &info.sender,
        &pair,
        &token_a,
        &token_b,
        &to,
        &bounds,
    )?);

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "remove_liquidity_with_permit")
        .add_attribute("pair", pair)
        .add_attribute("liquidity", bounds.liquidity)
        .add_attribute("to", to))
}

/// Router only: compare what `to` received against the minimums
#[allow(clippy::too_many_arguments)]
pub fn execute_assert_liquidity_received(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    token_a: String,
    token_b: String,
    balance_a_before: Uint128,
    balance_b_before: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::Unauthorized);
    }
    let to = deps.api.addr_validate(&to)?;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;

    let amount_a = query_cw20_balance(&deps.querier, &token_a, &to)?.saturating_sub(balance_a_before);
    let amount_b = query_cw20_balance(&deps.querier, &token_b, &to)?.saturating_sub(balance_b_before);
    if amount_a < amount_a_min {
        return Err(ContractError::InsufficientAAmount);
    }
    if amount_b < amount_b_min {
        return Err(ContractError::InsufficientBAmount);
    }

    Ok(Response::new()
        .add_attribute("action", "liquidity_received")
        .add_attribute("amount_a", amount_a)
        .add_attribute("amount_b", amount_b))
}
