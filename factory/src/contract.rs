//! Fileswap Factory - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, WasmMsg,
};
use cw2::set_contract_version;

use common::factory::{
    AllPairsLengthResponse, AllPairsResponse, ConfigResponse, ExecuteMsg, FeeToResponse,
    GetPairResponse, InstantiateMsg, PairAddressResponse, QueryMsg,
};
use common::pair::{
    sort_tokens, ExecuteMsg as PairExecuteMsg, InstantiateMsg as PairInstantiateMsg,
};
use common::{is_zero_address, pair_address, pair_salt};

use crate::error::ContractError;
use crate::state::{
    Config, ALL_PAIRS, ALL_PAIRS_LENGTH, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FEE_TO, PAIRS,
};

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

    let fee_to_setter = deps.api.addr_validate(&msg.fee_to_setter)?;
    // Pair addresses commit to the code checksum, so read it once up front
    let code_info = deps.querier.query_wasm_code_info(msg.pair_code_id)?;

    CONFIG.save(
        deps.storage,
        &Config {
            fee_to_setter: fee_to_setter.clone(),
            pair_code_id: msg.pair_code_id,
            pair_checksum: code_info.checksum,
            chain_id: msg.chain_id,
        },
    )?;
    ALL_PAIRS_LENGTH.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("fee_to_setter", fee_to_setter)
        .add_attribute("pair_code_id", msg.pair_code_id.to_string()))
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
        ExecuteMsg::CreatePair { token_a, token_b } => {
            execute_create_pair(deps, env, token_a, token_b)
        }
        ExecuteMsg::SetFeeTo { fee_to } => execute_set_fee_to(deps, info, fee_to),
        ExecuteMsg::SetFeeToSetter { fee_to_setter } => {
            execute_set_fee_to_setter(deps, info, fee_to_setter)
        }
    }
}

fn execute_create_pair(
    deps: DepsMut,
    env: Env,
    token_a: String,
    token_b: String,
) -> Result<Response, ContractError> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let (token0, token1) = sort_tokens(deps.api, &token_a, &token_b)?;

    // Both orderings are stored, so one lookup covers them
    if PAIRS.has(deps.storage, (&token0, &token1)) {
        return Err(ContractError::PairExists);
    }

    let config = CONFIG.load(deps.storage)?;
    let pair = pair_address(
        deps.api,
        &env.contract.address,
        config.pair_checksum.as_slice(),
        &token0,
        &token1,
    )?;

    PAIRS.save(deps.storage, (&token0, &token1), &pair)?;
    PAIRS.save(deps.storage, (&token1, &token0), &pair)?;
    let index = ALL_PAIRS_LENGTH.load(deps.storage)?;
    ALL_PAIRS.save(deps.storage, index, &pair)?;
    ALL_PAIRS_LENGTH.save(deps.storage, &(index + 1))?;

    let canonical0 = deps.api.addr_canonicalize(token0.as_str())?;
    let canonical1 = deps.api.addr_canonicalize(token1.as_str())?;
    let salt = pair_salt(canonical0.as_slice(), canonical1.as_slice());

    let deploy = CosmosMsg::Wasm(WasmMsg::Instantiate2 {
        admin: None,
        code_id: config.pair_code_id,
        label: format!("fileswap-pair-{}", index),
        msg: to_json_binary(&PairInstantiateMsg {
            chain_id: config.chain_id,
        })?,
        funds: vec![],
        salt: Binary::from(salt.to_vec()),
    });
    let initialize = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pair.to_string(),
        msg: to_json_binary(&PairExecuteMsg::Initialize {
            token0: token0.to_string(),
            token1: token1.to_string(),
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(deploy)
        .add_message(initialize)
        .add_attribute("action", "pair_created")
        .add_attribute("token0", token0)
        .add_attribute("token1", token1)
        .add_attribute("pair", pair)
        .add_attribute("all_pairs_length", (index + 1).to_string()))
}

fn ensure_fee_to_setter(deps: Deps, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.fee_to_setter {
        return Err(ContractError::Forbidden);
    }
    Ok(config)
}

fn execute_set_fee_to(
    deps: DepsMut,
    info: MessageInfo,
    fee_to: Option<String>,
) -> Result<Response, ContractError> {
    ensure_fee_to_setter(deps.as_ref(), &info)?;

    let fee_to = fee_to.map(|a| deps.api.addr_validate(&a)).transpose()?;
    let fee_to = match fee_to {
        Some(addr) if !is_zero_address(deps.api, &addr)? => Some(addr),
        _ => None,
    };

    match &fee_to {
        Some(addr) => FEE_TO.save(deps.storage, addr)?,
        None => FEE_TO.remove(deps.storage),
    }

    Ok(Response::new()
        .add_attribute("action", "fee_to_updated")
        .add_attribute(
            "fee_to",
            fee_to
                .map(|a| a.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ))
}

fn execute_set_fee_to_setter(
    deps: DepsMut,
    info: MessageInfo,
    fee_to_setter: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_fee_to_setter(deps.as_ref(), &info)?;
    config.fee_to_setter = deps.api.addr_validate(&fee_to_setter)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "fee_to_setter_updated")
        .add_attribute("fee_to_setter", config.fee_to_setter))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pair { token_a, token_b } => to_json_binary(&query_pair(deps, token_a, token_b)?),
        QueryMsg::PairAddress { token_a, token_b } => {
            to_json_binary(&query_pair_address(deps, env, token_a, token_b)?)
        }
        QueryMsg::AllPairs { index } => to_json_binary(&AllPairsResponse {
            pair: ALL_PAIRS.load(deps.storage, index)?,
        }),
        QueryMsg::AllPairsLength {} => to_json_binary(&AllPairsLengthResponse {
            length: ALL_PAIRS_LENGTH.load(deps.storage)?,
        }),
        QueryMsg::FeeTo {} => to_json_binary(&FeeToResponse {
            fee_to: FEE_TO.may_load(deps.storage)?,
        }),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        fee_to_setter: config.fee_to_setter,
        pair_code_id: config.pair_code_id,
        pair_checksum: config.pair_checksum,
        chain_id: config.chain_id,
    })
}

fn query_pair(deps: Deps, token_a: String, token_b: String) -> StdResult<GetPairResponse> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    Ok(GetPairResponse {
        pair: PAIRS.may_load(deps.storage, (&token_a, &token_b))?,
    })
}

/// Deterministic address of the pair, whether or not it has been created
fn query_pair_address(
    deps: Deps,
    env: Env,
    token_a: String,
    token_b: String,
) -> StdResult<PairAddressResponse> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let (token0, token1) = sort_tokens(deps.api, &token_a, &token_b)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let config = CONFIG.load(deps.storage)?;
    let pair = pair_address(
        deps.api,
        &env.contract.address,
        config.pair_checksum.as_slice(),
        &token0,
        &token1,
    )?;
    Ok(PairAddressResponse {
        pair,
        token0,
        token1,
    })
}
