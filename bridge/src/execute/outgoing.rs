//! Outgoing deposits.

use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};

use common::ledger::{increase_allowance_msg, transfer_from_msg};
use common::wrapped::ExecuteMsg as WrappedExecuteMsg;

use crate::error::ContractError;
use crate::state::TOKEN_TO_WTOKEN;

/// Lock `amount` of a listed token for `to` on `destination_chain_id`.
///
/// Pulls the token from the caller, approves the wrapped token and deposits
/// into it, so the bridge ends up holding the wrapped balance. Relayers pick
/// the transfer up from the `token_deposit` attributes.
pub fn execute_deposit_token(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to: String,
    destination_chain_id: u64,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;
    let to = deps.api.addr_validate(&to)?;

    let w_token = TOKEN_TO_WTOKEN
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::TokenNotSupported {
            token: token.to_string(),
        })?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be greater than zero".to_string(),
        });
    }

    let bridge = &env.contract.address;
    let wrap = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: w_token.to_string(),
        msg: to_json_binary(&WrappedExecuteMsg::Deposit { amount })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_from_msg(&token, &info.sender, bridge, amount)?)
        .add_message(increase_allowance_msg(&token, &w_token, amount)?)
        .add_message(wrap)
        .add_attribute("action", "token_deposit")
        .add_attribute("from", info.sender)
        .add_attribute("to", to)
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("w_token", w_token)
        .add_attribute("amount", amount))
}
