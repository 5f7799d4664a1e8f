//! Allow-list governance.
//!
//! Per token: unlisted -> listed -> relisted under another wrapped token, or
//! unlisted again. Only deposits consult the list.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use super::admin::check_role;
use crate::error::ContractError;
use crate::state::{governance_role, TOKEN_TO_WTOKEN};

/// List `token` as bridgeable through `w_token` (governance only).
pub fn execute_add_wtoken(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    w_token: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &governance_role(), &info.sender)?;
    let token = deps.api.addr_validate(&token)?;
    let w_token = deps.api.addr_validate(&w_token)?;

    if TOKEN_TO_WTOKEN.has(deps.storage, &token) {
        return Err(ContractError::TokenExists {
            token: token.to_string(),
        });
    }
    TOKEN_TO_WTOKEN.save(deps.storage, &token, &w_token)?;

    Ok(Response::new()
        .add_attribute("action", "token_added_to_list")
        .add_attribute("token", token)
        .add_attribute("w_token", w_token))
}

/// Unlist `token` (governance only).
pub fn execute_remove_wtoken(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &governance_role(), &info.sender)?;
    let token = deps.api.addr_validate(&token)?;

    let w_token = TOKEN_TO_WTOKEN
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::TokenMissing {
            token: token.to_string(),
        })?;
    TOKEN_TO_WTOKEN.remove(deps.storage, &token);

    Ok(Response::new()
        .add_attribute("action", "token_removed_from_list")
        .add_attribute("token", token)
        .add_attribute("w_token", w_token))
}

/// Rebind a listed `token` to `new_w_token` (governance only).
pub fn execute_change_wtoken(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    new_w_token: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &governance_role(), &info.sender)?;
    let token = deps.api.addr_validate(&token)?;
    let new_w_token = deps.api.addr_validate(&new_w_token)?;

    let old_w_token = TOKEN_TO_WTOKEN
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::TokenMissing {
            token: token.to_string(),
        })?;
    TOKEN_TO_WTOKEN.save(deps.storage, &token, &new_w_token)?;

    // Indexers tracking the list see the old binding removed and the new one added
    let removed = Event::new("token_removed_from_list")
        .add_attribute("token", &token)
        .add_attribute("w_token", &old_w_token);
    let added = Event::new("token_added_to_list")
        .add_attribute("token", &token)
        .add_attribute("w_token", &new_w_token);

    Ok(Response::new()
        .add_event(removed)
        .add_event(added)
        .add_attribute("action", "wtoken_changed")
        .add_attribute("token", token)
        .add_attribute("old_w_token", old_w_token)
        .add_attribute("new_w_token", new_w_token))
}
