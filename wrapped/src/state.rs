use cosmwasm_std::Addr;
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:wrapped-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The cw20 backing this token
pub const UNDERLYING: Item<Addr> = Item::new("underlying");
