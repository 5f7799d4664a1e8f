//! Token ledger shared by plain tokens, wrapped tokens and LP shares
//!
//! Balances, allowances and token info live in the `cw20-base` storage
//! layout so the standard cw20 queries keep working. On top of that this
//! module adds what the exchange and the bridge rely on:
//!
//! - absolute `approve` (not only increase/decrease)
//! - an unexpiring `Uint128::MAX` allowance is never decremented
//! - EIP-2612 `permit` with per-owner nonces and an EIP-712 domain bound to
//!   the chain id and this contract
//! - ERC-20 style errors for the failure cases

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, BlockInfo, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    QuerierWrapper, Response, StdError, StdResult, Storage, Uint128, Uint256, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Expiration};
use cw20_base::state::{MinterData, TokenInfo, ALLOWANCES, ALLOWANCES_SPENDER, BALANCES, TOKEN_INFO};
use cw_storage_plus::{Item, Map};
use thiserror::Error;

use crate::address::{addr_to_evm, is_signer_account, is_zero_address};
use crate::hash::{domain_separator, permit_struct_hash, typed_data_hash};
use crate::signature::{recover_vrs, to_word};

/// Every ledger in the system uses 18 decimals
pub const DECIMALS: u8 = 18;

/// EIP-712 domain version
pub const DOMAIN_VERSION: &str = "1";

// ============================================================================
// State
// ============================================================================

/// EIP-712 domain fixed at instantiation
#[cw_serde]
pub struct PermitDomain {
    pub chain_id: u64,
    pub separator: [u8; 32],
}

pub const PERMIT_DOMAIN: Item<PermitDomain> = Item::new("permit_domain");

/// Next permit nonce per owner
pub const PERMIT_NONCES: Map<&Addr, u64> = Map::new("permit_nonces");

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, PartialEq)]
pub enum LedgerError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Cw20(#[from] cw20_base::ContractError),

    #[error("ERC20: transfer amount exceeds balance")]
    InsufficientBalance,

    #[error("ERC20: insufficient allowance")]
    InsufficientAllowance,

    #[error("ERC20: decreased allowance below zero")]
    AllowanceBelowZero,

    #[error("ERC20: zero address")]
    ZeroAddress,

    #[error("Permit: expired deadline {deadline} (block time {now})")]
    Expired { deadline: u64, now: u64 },

    #[error("Permit: invalid signature")]
    InvalidSignature,
}

// ============================================================================
// Responses
// ============================================================================

#[cw_serde]
pub struct PermitNonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct DomainSeparatorResponse {
    pub domain_separator: Binary,
    pub chain_id: u64,
}

// ============================================================================
// Setup
// ============================================================================

/// Store token info and fix the permit domain for this contract
pub fn init_ledger(
    deps: DepsMut,
    env: &Env,
    name: &str,
    symbol: &str,
    minter: Option<Addr>,
    chain_id: u64,
) -> Result<(), LedgerError> {
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: DECIMALS,
            total_supply: Uint128::zero(),
            mint: minter.map(|minter| MinterData { minter, cap: None }),
        },
    )?;

    let contract = addr_to_evm(deps.api, &env.contract.address)?;
    PERMIT_DOMAIN.save(
        deps.storage,
        &PermitDomain {
            chain_id,
            separator: domain_separator(name, DOMAIN_VERSION, chain_id, &contract),
        },
    )?;
    Ok(())
}

// ============================================================================
// Storage primitives
// ============================================================================

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOKEN_INFO.load(storage)?.total_supply)
}

pub fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), LedgerError> {
    BALANCES.update(storage, from, |balance| -> Result<_, LedgerError> {
        balance
            .unwrap_or_default()
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientBalance)
    })?;
    BALANCES.update(storage, to, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

pub fn mint_shares(storage: &mut dyn Storage, to: &Addr, amount: Uint128) -> Result<(), LedgerError> {
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info.total_supply.checked_add(amount)?;
        Ok(info)
    })?;
    BALANCES.update(storage, to, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}

pub fn burn_shares(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<(), LedgerError> {
    BALANCES.update(storage, from, |balance| -> Result<_, LedgerError> {
        balance
            .unwrap_or_default()
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientBalance)
    })?;
    TOKEN_INFO.update(storage, |mut info| -> StdResult<_> {
        info.total_supply = info.total_supply.checked_sub(amount)?;
        Ok(info)
    })?;
    Ok(())
}

/// Overwrite the allowance in both cw20-base indexes
pub fn set_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> StdResult<()> {
    if amount.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
        ALLOWANCES_SPENDER.remove(storage, (spender, owner));
        return Ok(());
    }
    let allowance = AllowanceResponse {
        allowance: amount,
        expires: Expiration::Never {},
    };
    ALLOWANCES.save(storage, (owner, spender), &allowance)?;
    ALLOWANCES_SPENDER.save(storage, (spender, owner), &allowance)?;
    Ok(())
}

fn spend_allowance(
    storage: &mut dyn Storage,
    block: &BlockInfo,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), LedgerError> {
    let current = ALLOWANCES
        .may_load(storage, (owner, spender))?
        .filter(|a| !a.expires.is_expired(block));
    let Some(mut allowance) = current else {
        return Err(LedgerError::InsufficientAllowance);
    };
    if allowance.allowance < amount {
        return Err(LedgerError::InsufficientAllowance);
    }
    if allowance.allowance == Uint128::MAX {
        return Ok(());
    }

    allowance.allowance -= amount;
    if allowance.allowance.is_zero() {
        ALLOWANCES.remove(storage, (owner, spender));
        ALLOWANCES_SPENDER.remove(storage, (spender, owner));
    } else {
        ALLOWANCES.save(storage, (owner, spender), &allowance)?;
        ALLOWANCES_SPENDER.save(storage, (spender, owner), &allowance)?;
    }
    Ok(())
}

fn validate_recipient(deps: Deps, recipient: &str) -> Result<Addr, LedgerError> {
    let addr = deps.api.addr_validate(recipient)?;
    if is_zero_address(deps.api, &addr)? {
        return Err(LedgerError::ZeroAddress);
    }
    Ok(addr)
}

// ============================================================================
// Execute handlers
// ============================================================================

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let rcpt = validate_recipient(deps.as_ref(), &recipient)?;
    move_balance(deps.storage, &info.sender, &rcpt, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", rcpt)
        .add_attribute("amount", amount))
}

pub fn execute_transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let rcpt = validate_recipient(deps.as_ref(), &recipient)?;

    spend_allowance(deps.storage, &env.block, &owner_addr, &info.sender, amount)?;
    move_balance(deps.storage, &owner_addr, &rcpt, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("from", owner_addr)
        .add_attribute("to", rcpt)
        .add_attribute("by", info.sender)
        .add_attribute("amount", amount))
}

/// Set the allowance to exactly `amount`
pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, LedgerError> {
    let spender_addr = validate_recipient(deps.as_ref(), &spender)?;
    set_allowance(deps.storage, &info.sender, &spender_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("owner", info.sender)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount))
}

pub fn execute_increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, LedgerError> {
    validate_recipient(deps.as_ref(), &spender)?;
    Ok(cw20_base::allowances::execute_increase_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn execute_decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, LedgerError> {
    let spender_addr = validate_recipient(deps.as_ref(), &spender)?;
    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender_addr))?
        .map(|a| a.allowance)
        .unwrap_or_default();
    if current < amount {
        return Err(LedgerError::AllowanceBelowZero);
    }
    Ok(cw20_base::allowances::execute_decrease_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

/// Set an allowance from an owner's EIP-712 signature
#[allow(clippy::too_many_arguments)]
pub fn execute_permit(
    deps: DepsMut,
    env: Env,
    owner: String,
    spender: String,
    amount: Uint128,
    deadline: u64,
    v: u8,
    r: Binary,
    s: Binary,
) -> Result<Response, LedgerError> {
    let now = env.block.time.seconds();
    if now > deadline {
        return Err(LedgerError::Expired { deadline, now });
    }

    let owner_addr = deps.api.addr_validate(&owner)?;
    let spender_addr = validate_recipient(deps.as_ref(), &spender)?;

    let nonce = PERMIT_NONCES
        .may_load(deps.storage, &owner_addr)?
        .unwrap_or_default();
    let domain = PERMIT_DOMAIN.load(deps.storage)?;

    let struct_hash = permit_struct_hash(
        &addr_to_evm(deps.api, &owner_addr)?,
        &addr_to_evm(deps.api, &spender_addr)?,
        &Uint256::from(amount),
        &Uint256::from(nonce),
        &Uint256::from(deadline),
    );
    let digest = typed_data_hash(&domain.separator, &struct_hash);

    let r = to_word(&r).map_err(|_| LedgerError::InvalidSignature)?;
    let s = to_word(&s).map_err(|_| LedgerError::InvalidSignature)?;
    let signer =
        recover_vrs(deps.api, &digest, v, &r, &s).map_err(|_| LedgerError::InvalidSignature)?;
    if !is_signer_account(deps.api, &owner_addr, &signer)? {
        return Err(LedgerError::InvalidSignature);
    }

    PERMIT_NONCES.save(deps.storage, &owner_addr, &(nonce + 1))?;
    set_allowance(deps.storage, &owner_addr, &spender_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "permit")
        .add_attribute("owner", owner_addr)
        .add_attribute("spender", spender_addr)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string()))
}

// ============================================================================
// Queries
// ============================================================================

pub fn query_permit_nonce(deps: Deps, owner: String) -> StdResult<PermitNonceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let nonce = PERMIT_NONCES.may_load(deps.storage, &owner)?.unwrap_or_default();
    Ok(PermitNonceResponse { nonce })
}

pub fn query_domain_separator(deps: Deps) -> StdResult<DomainSeparatorResponse> {
    let domain = PERMIT_DOMAIN.load(deps.storage)?;
    Ok(DomainSeparatorResponse {
        domain_separator: Binary::from(domain.separator.to_vec()),
        chain_id: domain.chain_id,
    })
}

// ============================================================================
// Cross-contract helpers
// ============================================================================

/// Balance of `account` as reported by the cw20 contract `token`
pub fn query_cw20_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> StdResult<Uint128> {
    let res: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(res.balance)
}

fn cw20_msg(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
    )
}

pub fn increase_allowance_msg(
    token: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    cw20_msg(
        token,
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount,
            expires: None,
        },
    )
}

/// Reject a malformed 32-byte word in a message
pub fn binary_word(value: &Binary) -> StdResult<[u8; 32]> {
    to_word(value.as_slice()).map_err(|e| StdError::generic_err(e.to_string()))
}
