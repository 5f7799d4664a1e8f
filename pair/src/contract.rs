//! Fileswap Pair - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128, Uint256,
};
use cw2::set_contract_version;

use common::ledger::{
    execute_approve, execute_decrease_allowance, execute_increase_allowance, execute_permit,
    execute_transfer, execute_transfer_from, init_ledger, query_domain_separator,
    query_permit_nonce,
};
use common::pair::{ExecuteMsg, InstantiateMsg, QueryMsg, LP_TOKEN_NAME, LP_TOKEN_SYMBOL};

use crate::error::ContractError;
use crate::execute::{
    execute_burn, execute_initialize, execute_mint, execute_skim, execute_swap, execute_sync,
    finish_swap,
};
use crate::query::{query_k_last, query_pair, query_price_cumulative, query_reserves};
use crate::state::{
    PriceCumulative, Reserves, CONTRACT_NAME, CONTRACT_VERSION, FACTORY, K_LAST, LOCKED,
    PRICE_CUMULATIVE, RESERVES, SWAP_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

/// The instantiating account becomes the factory
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    FACTORY.save(deps.storage, &info.sender)?;
    RESERVES.save(
        deps.storage,
        &Reserves {
            reserve0: Uint128::zero(),
            reserve1: Uint128::zero(),
            block_timestamp_last: 0,
        },
    )?;
    PRICE_CUMULATIVE.save(
        deps.storage,
        &PriceCumulative {
            price0: Uint256::zero(),
            price1: Uint256::zero(),
        },
    )?;
    K_LAST.save(deps.storage, &Uint256::zero())?;
    LOCKED.save(deps.storage, &false)?;
    init_ledger(
        deps.branch(),
        &env,
        LP_TOKEN_NAME,
        LP_TOKEN_SYMBOL,
        None,
        msg.chain_id,
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("factory", info.sender))
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
    match msg {
        ExecuteMsg::Initialize { token0, token1 } => {
            execute_initialize(deps, info, token0, token1)
        }
        ExecuteMsg::Mint { to } => execute_mint(deps, env, info, to),
        ExecuteMsg::Burn { to } => execute_burn(deps, env, info, to),
        ExecuteMsg::Swap {
            amount0_out,
            amount1_out,
            to,
            data,
        } => execute_swap(deps, info, amount0_out, amount1_out, to, data),
        ExecuteMsg::Skim { to } => execute_skim(deps, env, to),
        ExecuteMsg::Sync {} => execute_sync(deps, env),

        // LP share ledger
        ExecuteMsg::Transfer { recipient, amount } => {
            Ok(execute_transfer(deps, info, recipient, amount)?)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::Approve { spender, amount } => {
            Ok(execute_approve(deps, info, spender, amount)?)
        }
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::Permit {
            owner,
            spender,
            amount,
            deadline,
            v,
            r,
            s,
        } => Ok(execute_permit(
            deps, env, owner, spender, amount, deadline, v, r, s,
        )?),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        SWAP_REPLY_ID => finish_swap(deps, env),
        id => Err(ContractError::UnknownReply { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Pair {} => to_json_binary(&query_pair(deps)?),
        QueryMsg::Reserves {} => to_json_binary(&query_reserves(deps)?),
        QueryMsg::PriceCumulativeLast {} => to_json_binary(&query_price_cumulative(deps)?),
        QueryMsg::KLast {} => to_json_binary(&query_k_last(deps)?),
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
