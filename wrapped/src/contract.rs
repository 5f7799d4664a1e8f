//! WrappedToken - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use common::ledger::{
    burn_shares, execute_approve, execute_decrease_allowance, execute_increase_allowance,
    execute_permit, execute_transfer, execute_transfer_from, init_ledger, mint_shares,
    query_domain_separator, query_permit_nonce, transfer_from_msg, transfer_msg,
};
use common::wrapped::{ExecuteMsg, InstantiateMsg, QueryMsg, UnderlyingResponse};

use crate::error::ContractError;
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, UNDERLYING};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let underlying = deps.api.addr_validate(&msg.underlying)?;
    UNDERLYING.save(deps.storage, &underlying)?;
    init_ledger(deps.branch(), &env, &msg.name, &msg.symbol, None, msg.chain_id)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("name", msg.name)
        .add_attribute("underlying", underlying))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let res = match msg {
        ExecuteMsg::Deposit { amount } => return execute_deposit(deps, env, info, amount),
        ExecuteMsg::Withdraw { amount } => return execute_withdraw(deps, info, amount),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)?
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, env, info, owner, recipient, amount)?,
        ExecuteMsg::Approve { spender, amount } => execute_approve(deps, info, spender, amount)?,
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_increase_allowance(deps, env, info, spender, amount, expires)?,
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute_decrease_allowance(deps, env, info, spender, amount, expires)?,
        ExecuteMsg::Permit {
            owner,
            spender,
            amount,
            deadline,
            v,
            r,
            s,
        } => execute_permit(deps, env, owner, spender, amount, deadline, v, r, s)?,
    };
    Ok(res)
}

/// Mint first; the underlying pull runs as a sub-message and reverts the
/// whole call if the caller's allowance or balance is short.
fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let underlying = UNDERLYING.load(deps.storage)?;
    mint_shares(deps.storage, &info.sender, amount)?;

    let pull = transfer_from_msg(&underlying, &info.sender, &env.contract.address, amount)?;

    Ok(Response::new()
        .add_message(pull)
        .add_attribute("action", "deposit")
        .add_attribute("dst", info.sender)
        .add_attribute("amount", amount))
}

fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let underlying = UNDERLYING.load(deps.storage)?;
    burn_shares(deps.storage, &info.sender, amount)?;

    let release = transfer_msg(&underlying, &info.sender, amount)?;

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "withdrawal")
        .add_attribute("src", info.sender)
        .add_attribute("amount", amount))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Underlying {} => to_json_binary(&UnderlyingResponse {
            underlying: UNDERLYING.load(deps.storage)?,
        }),
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
        QueryMsg::Allowance { owner, spender } => to_json_binary(
            &cw20_base::allowances::query_allowance(deps, owner, spender)?,
        ),
        QueryMsg::PermitNonce { owner } => to_json_binary(&query_permit_nonce(deps, owner)?),
        QueryMsg::DomainSeparator {} => to_json_binary(&query_domain_separator(deps)?),
    }
}
