//! Role management handlers.
//!
//! `DEFAULT_ADMIN_ROLE` administers every role, itself included. Granting a
//! role that is already held and revoking one that is not change nothing and
//! emit no role attributes.

use cosmwasm_std::{Addr, Binary, DepsMut, MessageInfo, Response, Storage};

use common::bytes32_to_hex;

use crate::error::ContractError;
use crate::state::{DEFAULT_ADMIN_ROLE, ROLES};

/// Reject role ids that are not 32 bytes
pub fn role_id(role: &Binary) -> Result<[u8; 32], ContractError> {
    role.as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidRole { len: role.len() })
}

pub fn has_role(storage: &dyn Storage, role: &[u8; 32], account: &Addr) -> bool {
    ROLES.has(storage, (role.as_slice(), account))
}

/// Fail with `MissingRole` unless `account` holds `role`
pub fn check_role(
    storage: &dyn Storage,
    role: &[u8; 32],
    account: &Addr,
) -> Result<(), ContractError> {
    if !has_role(storage, role, account) {
        return Err(ContractError::MissingRole {
            role: bytes32_to_hex(role),
            account: account.to_string(),
        });
    }
    Ok(())
}

/// Returns whether the account was newly added
pub(crate) fn grant_role(
    storage: &mut dyn Storage,
    role: &[u8; 32],
    account: &Addr,
) -> Result<bool, ContractError> {
    if has_role(storage, role, account) {
        return Ok(false);
    }
    ROLES.save(storage, (role.as_slice(), account), &true)?;
    Ok(true)
}

fn revoke_role(storage: &mut dyn Storage, role: &[u8; 32], account: &Addr) -> bool {
    if !has_role(storage, role, account) {
        return false;
    }
    ROLES.remove(storage, (role.as_slice(), account));
    true
}

fn role_response(
    action: &str,
    changed: bool,
    role: &[u8; 32],
    account: &Addr,
    sender: &Addr,
) -> Response {
    let res = Response::new().add_attribute("action", action);
    if !changed {
        return res;
    }
    res.add_attribute("role", bytes32_to_hex(role))
        .add_attribute("account", account)
        .add_attribute("sender", sender)
}

/// Grant `role` to `account` (role admin only).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
    account: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;
    let role = role_id(&role)?;
    let account = deps.api.addr_validate(&account)?;

    let granted = grant_role(deps.storage, &role, &account)?;
    Ok(role_response(
        "role_granted",
        granted,
        &role,
        &account,
        &info.sender,
    ))
}

/// Revoke `role` from `account` (role admin only).
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
    account: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, &DEFAULT_ADMIN_ROLE, &info.sender)?;
    let role = role_id(&role)?;
    let account = deps.api.addr_validate(&account)?;

    let revoked = revoke_role(deps.storage, &role, &account);
    Ok(role_response(
        "role_revoked",
        revoked,
        &role,
        &account,
        &info.sender,
    ))
}

/// Give up a role held by the caller. `account` must be the caller.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Binary,
    account: String,
) -> Result<Response, ContractError> {
    let role = role_id(&role)?;
    let account = deps.api.addr_validate(&account)?;
    if account != info.sender {
        return Err(ContractError::Unauthorized);
    }

    let revoked = revoke_role(deps.storage, &role, &account);
    Ok(role_response(
        "role_revoked",
        revoked,
        &role,
        &account,
        &info.sender,
    ))
}
