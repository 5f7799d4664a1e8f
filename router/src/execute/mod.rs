//! Execute handlers for the Fileswap router.
//!
//! - `liquidity` - AddLiquidity, RemoveLiquidity (plain and with permit)
//! - `swap` - exact-input and exact-output multi-hop swaps

mod liquidity;
mod swap;

pub use liquidity::*;
pub use swap::*;

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Env, WasmMsg};
use serde::Serialize;

use crate::error::ContractError;

/// Reject calls mined after `deadline`
pub fn ensure_deadline(env: &Env, deadline: u64) -> Result<(), ContractError> {
    let now = env.block.time.seconds();
    if deadline < now {
        return Err(ContractError::Expired { deadline, now });
    }
    Ok(())
}

pub(crate) fn wasm_execute_msg<T: Serialize>(
    contract: &Addr,
    msg: &T,
) -> Result<CosmosMsg, ContractError> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: contract.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}
