//! FileBridge Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::{addr_to_evm, domain_separator};

use crate::error::ContractError;
use crate::execute::{
    execute_add_wtoken, execute_change_wtoken, execute_deposit_token, execute_grant_role,
    execute_redeem_token, execute_remove_wtoken, execute_renounce_role, execute_revoke_role,
    grant_role,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_domain_separator, query_has_role, query_nonce, query_redeem_hash,
    query_wtoken,
};
use crate::state::{
    governance_role, Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_ADMIN_ROLE,
    DOMAIN_NAME, DOMAIN_VERSION,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let separator = domain_separator(
        DOMAIN_NAME,
        DOMAIN_VERSION,
        msg.chain_id,
        &addr_to_evm(deps.api, &env.contract.address)?,
    );
    CONFIG.save(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
            domain_separator: separator,
        },
    )?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    grant_role(deps.storage, &DEFAULT_ADMIN_ROLE, &admin)?;
    let governance = governance_role();
    for governor in &msg.governors {
        let governor = deps.api.addr_validate(governor)?;
        grant_role(deps.storage, &governance, &governor)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("governors", msg.governors.len().to_string())
        .add_attribute("chain_id", msg.chain_id.to_string()))
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
        // Roles
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role, account } => {
            execute_renounce_role(deps, info, role, account)
        }

        // Allow-list
        ExecuteMsg::AddWToken { token, w_token } => execute_add_wtoken(deps, info, token, w_token),
        ExecuteMsg::RemoveWToken { token } => execute_remove_wtoken(deps, info, token),
        ExecuteMsg::ChangeWToken { token, new_w_token } => {
            execute_change_wtoken(deps, info, token, new_w_token)
        }

        // Bridging
        ExecuteMsg::DepositToken {
            to,
            destination_chain_id,
            token,
            amount,
        } => execute_deposit_token(deps, env, info, to, destination_chain_id, token, amount),
        ExecuteMsg::RedeemToken {
            to,
            chain_id,
            token,
            amount,
            guardian,
            r,
            vs,
        } => execute_redeem_token(deps, info, to, chain_id, token, amount, guardian, r, vs),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::WToken { token } => to_json_binary(&query_wtoken(deps, token)?),
        QueryMsg::Nonce { account } => to_json_binary(&query_nonce(deps, account)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::DomainSeparator {} => to_json_binary(&query_domain_separator(deps)?),
        QueryMsg::RedeemHash {
            to,
            chain_id,
            token,
            amount,
            nonce,
        } => to_json_binary(&query_redeem_hash(deps, to, chain_id, token, amount, nonce)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
