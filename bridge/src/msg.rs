use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use common::ledger::DomainSeparatorResponse;

#[cw_serde]
pub struct InstantiateMsg {
    /// Holds DEFAULT_ADMIN_ROLE
    pub admin: String,
    /// Each holds GOVERNANCE_ROLE
    pub governors: Vec<String>,
    /// Chain id bound into the redemption domain
    pub chain_id: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Roles (role admin only, roles are 32-byte ids)
    // ========================================================================
    GrantRole {
        role: Binary,
        account: String,
    },
    RevokeRole {
        role: Binary,
        account: String,
    },
    /// `account` must be the caller
    RenounceRole {
        role: Binary,
        account: String,
    },

    // ========================================================================
    // Allow-list (governance only)
    // ========================================================================
    AddWToken {
        token: String,
        w_token: String,
    },
    RemoveWToken {
        token: String,
    },
    ChangeWToken {
        token: String,
        new_w_token: String,
    },

    // ========================================================================
    // Bridging
    // ========================================================================
    /// Wrap `amount` of a listed token for `to` on `destination_chain_id`.
    /// The caller must have approved the bridge on `token`.
    DepositToken {
        to: String,
        destination_chain_id: u64,
        token: String,
        amount: Uint128,
    },
    /// Pay out against a guardian's EIP-2098 compact signature over the
    /// recipient's current nonce
    RedeemToken {
        to: String,
        chain_id: u64,
        token: String,
        amount: Uint128,
        guardian: String,
        r: Binary,
        vs: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    /// Wrapped token a source token is listed under
    #[returns(WTokenResponse)]
    WToken { token: String },
    /// Redemptions consumed by `account`
    #[returns(NonceResponse)]
    Nonce { account: String },
    #[returns(HasRoleResponse)]
    HasRole { role: Binary, account: String },
    #[returns(DomainSeparatorResponse)]
    DomainSeparator {},
    /// Digest a guardian signs to authorize a redemption
    #[returns(RedeemHashResponse)]
    RedeemHash {
        to: String,
        chain_id: u64,
        token: String,
        amount: Uint128,
        nonce: u64,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u64,
    pub domain_separator: Binary,
}

#[cw_serde]
pub struct WTokenResponse {
    pub w_token: Option<Addr>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}

#[cw_serde]
pub struct RedeemHashResponse {
    pub hash: Binary,
}
