//! Swap handlers.
//!
//! The caller's input goes straight into the first pair; each pair then sends
//! its output to the next pair on the path, and the last one pays `to`.

use cosmwasm_std::{Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use common::ledger::transfer_from_msg;
use common::pair::{sort_tokens, ExecuteMsg as PairExecuteMsg};

use super::{ensure_deadline, wasm_execute_msg};
use crate::error::ContractError;
use crate::library::{get_amounts_in, get_amounts_out, pair_of};
use crate::state::CONFIG;

pub(crate) fn validate_path(deps: Deps, path: &[String]) -> Result<Vec<Addr>, ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidPath);
    }
    path.iter()
        .map(|token| deps.api.addr_validate(token).map_err(ContractError::from))
        .collect()
}

/// Transfer of the first input plus one pair swap per hop
fn swap_messages(
    deps: Deps,
    factory: &Addr,
    sender: &Addr,
    amounts: &[Uint128],
    path: &[Addr],
    to: &Addr,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let first_pair = pair_of(&deps.querier, factory, &path[0], &path[1])?;
    let mut msgs = vec![transfer_from_msg(&path[0], sender, &first_pair, amounts[0])?];

    let mut pair = first_pair;
    for i in 0..path.len() - 1 {
        let (input, output) = (&path[i], &path[i + 1]);
        let (token0, _) = sort_tokens(deps.api, input, output)?;
        let amount_out = amounts[i + 1];
        let (amount0_out, amount1_out) = if input == &token0 {
            (Uint128::zero(), amount_out)
        } else {
            (amount_out, Uint128::zero())
        };

        let next_pair = if i + 2 < path.len() {
            Some(pair_of(&deps.querier, factory, output, &path[i + 2])?)
        } else {
            None
        };
        let recipient = next_pair.clone().unwrap_or_else(|| to.clone());

        msgs.push(wasm_execute_msg(
            &pair,
            &PairExecuteMsg::Swap {
                amount0_out,
                amount1_out,
                to: recipient.to_string(),
                data: Binary::default(),
            },
        )?);
        if let Some(next) = next_pair {
            pair = next;
        }
    }
    Ok(msgs)
}

/// Swap an exact input along `path` for at least `amount_out_min`
#[allow(clippy::too_many_arguments)]
pub fn execute_swap_exact_tokens_for_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    ensure_deadline(&env, deadline)?;
    let factory = CONFIG.load(deps.storage)?.factory;
    let path = validate_path(deps.as_ref(), &path)?;
    let to = deps.api.addr_validate(&to)?;

    let amounts = get_amounts_out(deps.api, &deps.querier, &factory, amount_in, &path)?;
    let amount_out = amounts[amounts.len() - 1];
    if amount_out < amount_out_min {
        return Err(ContractError::InsufficientOutputAmount);
    }

    let msgs = swap_messages(deps.as_ref(), &factory, &info.sender, &amounts, &path, &to)?;
    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "swap_exact_tokens_for_tokens")
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("to", to))
}

/// Swap at most `amount_in_max` along `path` for an exact output
#[allow(clippy::too_many_arguments)]
pub fn execute_swap_tokens_for_exact_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_out: Uint128,
    amount_in_max: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    ensure_deadline(&env, deadline)?;
    let factory = CONFIG.load(deps.storage)?.factory;
    let path = validate_path(deps.as_ref(), &path)?;
    let to = deps.api.addr_validate(&to)?;

    let amounts = get_amounts_in(deps.api, &deps.querier, &factory, amount_out, &path)?;
    let amount_in = amounts[0];
    if amount_in > amount_in_max {
        return Err(ContractError::ExcessiveInputAmount);
    }

    let msgs = swap_messages(deps.as_ref(), &factory, &info.sender, &amounts, &path, &to)?;
    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "swap_tokens_for_exact_tokens")
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("to", to))
}
