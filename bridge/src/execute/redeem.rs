//! Guardian-signed redemptions.
//!
//! The guardian signs the EIP-712 `Redeem(to, chainId, token, amount, nonce)`
//! struct under the bridge domain, where `nonce` is the recipient's current
//! redemption nonce. A redemption consumes the nonce, so every signature is
//! good for exactly one payout. Addresses enter the struct through their
//! 20-byte EVM view.

use cosmwasm_std::{
    Addr, Api, Binary, DepsMut, MessageInfo, Response, Storage, Uint128, Uint256,
};

use common::ledger::transfer_msg;
use common::{
    addr_to_evm, is_signer_account, recover_compact, redeem_struct_hash, typed_data_hash,
    CompactSignature,
};

use crate::error::ContractError;
use crate::state::{CONFIG, NONCES};

/// EIP-712 digest a guardian signs to authorize a redemption
pub fn redeem_token_hash(
    storage: &dyn Storage,
    api: &dyn Api,
    to: &Addr,
    chain_id: u64,
    token: &Addr,
    amount: Uint128,
    nonce: u64,
) -> Result<[u8; 32], ContractError> {
    let config = CONFIG.load(storage)?;
    let struct_hash = redeem_struct_hash(
        &addr_to_evm(api, to)?,
        chain_id,
        &addr_to_evm(api, token)?,
        &Uint256::from(amount),
        &Uint256::from(nonce),
    );
    Ok(typed_data_hash(&config.domain_separator, &struct_hash))
}

/// Pay out `amount` of `token` from the bridge to `to` against a guardian
/// signature over the recipient's current nonce.
///
/// The signer must control `guardian`; the guardian itself is not checked
/// against any role.
#[allow(clippy::too_many_arguments)]
pub fn execute_redeem_token(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    chain_id: u64,
    token: String,
    amount: Uint128,
    guardian: String,
    r: Binary,
    vs: Binary,
) -> Result<Response, ContractError> {
    let to = deps.api.addr_validate(&to)?;
    let token = deps.api.addr_validate(&token)?;
    let guardian = deps.api.addr_validate(&guardian)?;

    let nonce = NONCES.may_load(deps.storage, &to)?.unwrap_or_default();
    let digest = redeem_token_hash(deps.storage, deps.api, &to, chain_id, &token, amount, nonce)?;

    let signature = CompactSignature::from_slices(r.as_slice(), vs.as_slice())
        .map_err(|_| ContractError::InvalidSignature)?;
    let signer = recover_compact(deps.api, &digest, &signature)
        .map_err(|_| ContractError::InvalidSignature)?;
    if !is_signer_account(deps.api, &guardian, &signer)? {
        return Err(ContractError::InvalidSignature);
    }

    NONCES.save(deps.storage, &to, &(nonce + 1))?;

    Ok(Response::new()
        .add_message(transfer_msg(&token, &to, amount)?)
        .add_attribute("action", "token_redeemed")
        .add_attribute("sender", info.sender)
        .add_attribute("to", to)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("guardian", guardian))
}
