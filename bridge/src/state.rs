use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::keccak256;

pub const CONTRACT_NAME: &str = "crates.io:file-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// EIP-712 domain of redemption signatures
pub const DOMAIN_NAME: &str = "FileBridge";
pub const DOMAIN_VERSION: &str = "1";

/// Administers every role, including itself
pub const DEFAULT_ADMIN_ROLE: [u8; 32] = [0u8; 32];

/// `keccak256("GOVERNANCE_ROLE")`
pub fn governance_role() -> [u8; 32] {
    keccak256(b"GOVERNANCE_ROLE")
}

#[cw_serde]
pub struct Config {
    pub chain_id: u64,
    pub domain_separator: [u8; 32],
}

pub const CONFIG: Item<Config> = Item::new("config");

/// (role, account) -> member
pub const ROLES: Map<(&[u8], &Addr), bool> = Map::new("roles");

/// Listed source token -> wrapped token
pub const TOKEN_TO_WTOKEN: Map<&Addr, Addr> = Map::new("token_to_wtoken");

/// Redemptions consumed per recipient
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");
