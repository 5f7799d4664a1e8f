//! Query handlers for the FileBridge contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use common::ledger::DomainSeparatorResponse;

use crate::execute::{has_role, redeem_token_hash, role_id};
use crate::msg::{
    ConfigResponse, HasRoleResponse, NonceResponse, RedeemHashResponse, WTokenResponse,
};
use crate::state::{CONFIG, NONCES, TOKEN_TO_WTOKEN};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        chain_id: config.chain_id,
        domain_separator: Binary::from(config.domain_separator.to_vec()),
    })
}

pub fn query_wtoken(deps: Deps, token: String) -> StdResult<WTokenResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(WTokenResponse {
        w_token: TOKEN_TO_WTOKEN.may_load(deps.storage, &token)?,
    })
}

pub fn query_nonce(deps: Deps, account: String) -> StdResult<NonceResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(NonceResponse {
        nonce: NONCES.may_load(deps.storage, &account)?.unwrap_or_default(),
    })
}

pub fn query_has_role(deps: Deps, role: Binary, account: String) -> StdResult<HasRoleResponse> {
    let role = role_id(&role).map_err(|e| StdError::generic_err(e.to_string()))?;
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: has_role(deps.storage, &role, &account),
    })
}

pub fn query_domain_separator(deps: Deps) -> StdResult<DomainSeparatorResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(DomainSeparatorResponse {
        domain_separator: Binary::from(config.domain_separator.to_vec()),
        chain_id: config.chain_id,
    })
}

pub fn query_redeem_hash(
    deps: Deps,
    to: String,
    chain_id: u64,
    token: String,
    amount: Uint128,
    nonce: u64,
) -> StdResult<RedeemHashResponse> {
    let to = deps.api.addr_validate(&to)?;
    let token = deps.api.addr_validate(&token)?;
    let hash = redeem_token_hash(deps.storage, deps.api, &to, chain_id, &token, amount, nonce)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(RedeemHashResponse {
        hash: Binary::from(hash.to_vec()),
    })
}
