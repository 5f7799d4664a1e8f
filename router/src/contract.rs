//! Fileswap Router - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_liquidity, execute_assert_liquidity_received, execute_remove_liquidity,
    execute_remove_liquidity_with_permit, execute_swap_exact_tokens_for_tokens,
    execute_swap_tokens_for_exact_tokens, RemoveBounds,
};
use crate::library::{
    get_amount_in, get_amount_out, get_amounts_in, get_amounts_out, get_reserves, quote,
};
use crate::msg::{
    AmountResponse, AmountsResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    RouterReservesResponse,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let factory = deps.api.addr_validate(&msg.factory)?;
    CONFIG.save(
        deps.storage,
        &Config {
            factory: factory.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("factory", factory))
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
        ExecuteMsg::AddLiquidity {
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        } => execute_add_liquidity(
            deps,
            env,
            info,
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        ),
        ExecuteMsg::RemoveLiquidity {
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
        } => execute_remove_liquidity(
            deps,
            env,
            info,
            token_a,
            token_b,
            RemoveBounds {
                liquidity,
                amount_a_min,
                amount_b_min,
            },
            to,
            deadline,
        ),
        ExecuteMsg::RemoveLiquidityWithPermit {
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            to,
            deadline,
            approve_max,
            v,
            r,
            s,
        } => execute_remove_liquidity_with_permit(
            deps,
            env,
            info,
            token_a,
            token_b,
            RemoveBounds {
                liquidity,
                amount_a_min,
                amount_b_min,
            },
            to,
            deadline,
            approve_max,
            v,
            r,
            s,
        ),
        ExecuteMsg::SwapExactTokensForTokens {
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        } => execute_swap_exact_tokens_for_tokens(
            deps,
            env,
            info,
            amount_in,
            amount_out_min,
            path,
            to,
            deadline,
        ),
        ExecuteMsg::SwapTokensForExactTokens {
            amount_out,
            amount_in_max,
            path,
            to,
            deadline,
        } => execute_swap_tokens_for_exact_tokens(
            deps,
            env,
            info,
            amount_out,
            amount_in_max,
            path,
            to,
            deadline,
        ),
        ExecuteMsg::AssertLiquidityReceived {
            to,
            token_a,
            token_b,
            balance_a_before,
            balance_b_before,
            amount_a_min,
            amount_b_min,
        } => execute_assert_liquidity_received(
            deps,
            env,
            info,
            to,
            token_a,
            token_b,
            balance_a_before,
            balance_b_before,
            amount_a_min,
            amount_b_min,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

fn to_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    }
}

fn validate_path(deps: Deps, path: &[String]) -> StdResult<Vec<Addr>> {
    path.iter().map(|token| deps.api.addr_validate(token)).collect()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&ConfigResponse {
            factory: CONFIG.load(deps.storage)?.factory,
        }),
        QueryMsg::Quote {
            amount_a,
            reserve_a,
            reserve_b,
        } => to_json_binary(&AmountResponse {
            amount: quote(amount_a, reserve_a, reserve_b).map_err(to_std)?,
        }),
        QueryMsg::GetAmountOut {
            amount_in,
            reserve_in,
            reserve_out,
        } => to_json_binary(&AmountResponse {
            amount: get_amount_out(amount_in, reserve_in, reserve_out).map_err(to_std)?,
        }),
        QueryMsg::GetAmountIn {
            amount_out,
            reserve_in,
            reserve_out,
        } => to_json_binary(&AmountResponse {
            amount: get_amount_in(amount_out, reserve_in, reserve_out).map_err(to_std)?,
        }),
        QueryMsg::GetAmountsOut { amount_in, path } => {
            let factory = CONFIG.load(deps.storage)?.factory;
            let path = validate_path(deps, &path)?;
            let amounts = get_amounts_out(deps.api, &deps.querier, &factory, amount_in, &path)
                .map_err(to_std)?;
            to_json_binary(&AmountsResponse { amounts })
        }
        QueryMsg::GetAmountsIn { amount_out, path } => {
            let factory = CONFIG.load(deps.storage)?.factory;
            let path = validate_path(deps, &path)?;
            let amounts = get_amounts_in(deps.api, &deps.querier, &factory, amount_out, &path)
                .map_err(to_std)?;
            to_json_binary(&AmountsResponse { amounts })
        }
        QueryMsg::Reserves { token_a, token_b } => {
            let factory = CONFIG.load(deps.storage)?.factory;
            let token_a = deps.api.addr_validate(&token_a)?;
            let token_b = deps.api.addr_validate(&token_b)?;
            let (reserve_a, reserve_b) =
                get_reserves(deps.api, &deps.querier, &factory, &token_a, &token_b)
                    .map_err(to_std)?;
            to_json_binary(&RouterReservesResponse {
                reserve_a,
                reserve_b,
            })
        }
    }
}
