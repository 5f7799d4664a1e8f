//! Swap handlers.
//!
//! A swap is split across two calls on the pair:
//! - `execute_swap` validates, takes the lock and emits the optimistic
//!   transfers plus the flash callback; its last message carries a reply
//! - `finish_swap` runs from that reply, after every transfer and the
//!   callback have executed, checks the fee-adjusted invariant, updates the
//!   reserves and releases the lock

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, SubMsg, Uint128,
    Uint256, WasmMsg,
};

use common::ledger::transfer_msg;
use common::pair::FileswapCalleeMsg;

use super::reserves::update;
use super::{ensure_unlocked, load_tokens, pair_balances};
use crate::error::ContractError;
use crate::state::{PendingSwap, LOCKED, PENDING_SWAP, RESERVES, SWAP_REPLY_ID};

/// Send the requested outputs, run the flash callback when `data` is
/// non-empty, then (in the reply) require the fee-adjusted product not to
/// shrink
pub fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    amount0_out: Uint128,
    amount1_out: Uint128,
    to: String,
    data: Binary,
) -> Result<Response, ContractError> {
    // Lock first: a re-entrant call fails with Locked whatever it asks for
    ensure_unlocked(deps.storage)?;
    if amount0_out.is_zero() && amount1_out.is_zero() {
        return Err(ContractError::InsufficientOutputAmount);
    }

    let tokens = load_tokens(deps.storage)?;
    let reserves = RESERVES.load(deps.storage)?;
    if amount0_out >= reserves.reserve0 || amount1_out >= reserves.reserve1 {
        return Err(ContractError::InsufficientLiquidity);
    }

    let to = deps.api.addr_validate(&to)?;
    if to == tokens.token0 || to == tokens.token1 {
        return Err(ContractError::InvalidTo);
    }

    LOCKED.save(deps.storage, &true)?;
    PENDING_SWAP.save(
        deps.storage,
        &PendingSwap {
            sender: info.sender.clone(),
            to: to.clone(),
            amount0_out,
            amount1_out,
        },
    )?;

    // optimistic transfers
    let mut msgs: Vec<CosmosMsg> = vec![];
    if !amount0_out.is_zero() {
        msgs.push(transfer_msg(&tokens.token0, &to, amount0_out)?);
    }
    if !amount1_out.is_zero() {
        msgs.push(transfer_msg(&tokens.token1, &to, amount1_out)?);
    }
    if !data.is_empty() {
        msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: to.to_string(),
            msg: to_json_binary(&FileswapCalleeMsg::FileswapCall {
                sender: info.sender.to_string(),
                amount0: amount0_out,
                amount1: amount1_out,
                data,
            })?,
            funds: vec![],
        }));
    }

    // At least one output is non-zero, so there is a last message
    let last = msgs.pop().ok_or(ContractError::InsufficientOutputAmount)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_submessage(SubMsg::reply_on_success(last, SWAP_REPLY_ID))
        .add_attribute("action", "swap_start")
        .add_attribute("sender", info.sender)
        .add_attribute("to", to))
}

/// Invariant check and reserve update once the outputs and callback ran
pub fn finish_swap(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let pending = PENDING_SWAP.load(deps.storage)?;
    PENDING_SWAP.remove(deps.storage);

    let tokens = load_tokens(deps.storage)?;
    let reserves = RESERVES.load(deps.storage)?;
    let (balance0, balance1) = pair_balances(&deps.querier, &tokens, &env.contract.address)?;

    let remaining0 = reserves.reserve0 - pending.amount0_out;
    let remaining1 = reserves.reserve1 - pending.amount1_out;
    let amount0_in = balance0.saturating_sub(remaining0);
    let amount1_in = balance1.saturating_sub(remaining1);
    if amount0_in.is_zero() && amount1_in.is_zero() {
        return Err(ContractError::InsufficientInputAmount);
    }

    check_k(
        balance0,
        balance1,
        amount0_in,
        amount1_in,
        reserves.reserve0,
        reserves.reserve1,
    )?;

    let updated = update(deps.storage, &env, balance0, balance1, &reserves)?;
    LOCKED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("action", "swap")
        .add_attribute("sender", pending.sender)
        .add_attribute("to", pending.to)
        .add_attribute("amount0_in", amount0_in)
        .add_attribute("amount1_in", amount1_in)
        .add_attribute("amount0_out", pending.amount0_out)
        .add_attribute("amount1_out", pending.amount1_out)
        .add_attribute("reserve0", updated.reserve0)
        .add_attribute("reserve1", updated.reserve1))
}

/// `(b0*1000 - in0*3) * (b1*1000 - in1*3) >= r0 * r1 * 1000^2`
pub fn check_k(
    balance0: Uint128,
    balance1: Uint128,
    amount0_in: Uint128,
    amount1_in: Uint128,
    reserve0: Uint128,
    reserve1: Uint128,
) -> Result<(), ContractError> {
    let thousand = Uint256::from(1000u32);
    let three = Uint256::from(3u32);

    let adjusted = |balance: Uint128, amount_in: Uint128| -> Result<Uint256, ContractError> {
        Uint256::from(balance)
            .checked_mul(thousand)
            .and_then(|b| b.checked_sub(Uint256::from(amount_in) * three))
            .map_err(|_| ContractError::Overflow)
    };
    let balance0_adjusted = adjusted(balance0, amount0_in)?;
    let balance1_adjusted = adjusted(balance1, amount1_in)?;

    let lhs = balance0_adjusted
        .checked_mul(balance1_adjusted)
        .map_err(|_| ContractError::Overflow)?;
    let rhs = Uint256::from(reserve0) * Uint256::from(reserve1) * Uint256::from(1_000_000u32);
    if lhs < rhs {
        return Err(ContractError::K);
    }
    Ok(())
}
