//! Address views shared by the contracts
//!
//! Signatures commit to 20-byte EVM addresses while the host chain uses
//! bech32 accounts backed by canonical bytes of any length. An account is
//! viewed as an EVM address through the trailing 20 bytes of its canonical
//! form, and a recovered signer controls exactly the account whose canonical
//! form is those 20 bytes.

use cosmwasm_std::{instantiate2_address, Addr, Api, CanonicalAddr, StdError, StdResult};

use crate::hash::pair_salt;

/// 20-byte EVM address
pub type EvmAddress = [u8; 20];

/// EVM view of canonical address bytes: the trailing 20 bytes, left-padded
/// with zeros when shorter.
pub fn evm_address(canonical: &[u8]) -> EvmAddress {
    let mut out = [0u8; 20];
    if canonical.len() >= 20 {
        out.copy_from_slice(&canonical[canonical.len() - 20..]);
    } else {
        out[20 - canonical.len()..].copy_from_slice(canonical);
    }
    out
}

/// EVM view of a bech32 account
pub fn addr_to_evm(api: &dyn Api, addr: &Addr) -> StdResult<EvmAddress> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    Ok(evm_address(canonical.as_slice()))
}

/// Whether `addr` is the account controlled by the EVM key `signer`
pub fn is_signer_account(api: &dyn Api, addr: &Addr, signer: &EvmAddress) -> StdResult<bool> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    Ok(canonical.as_slice() == signer.as_slice())
}

/// The account that owns nothing: 20 zero bytes. Permanently locked LP
/// shares are credited here.
pub fn zero_address(api: &dyn Api) -> StdResult<Addr> {
    api.addr_humanize(&CanonicalAddr::from(vec![0u8; 20]))
}

pub fn is_zero_address(api: &dyn Api, addr: &Addr) -> StdResult<bool> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    Ok(canonical.as_slice().iter().all(|b| *b == 0))
}

/// Predict the address of the pair for sorted `token0`/`token1` deployed by
/// `factory` from the pair code with `checksum`.
pub fn pair_address(
    api: &dyn Api,
    factory: &Addr,
    checksum: &[u8],
    token0: &Addr,
    token1: &Addr,
) -> StdResult<Addr> {
    let creator = api.addr_canonicalize(factory.as_str())?;
    let t0 = api.addr_canonicalize(token0.as_str())?;
    let t1 = api.addr_canonicalize(token1.as_str())?;
    let salt = pair_salt(t0.as_slice(), t1.as_slice());
    let canonical = instantiate2_address(checksum, &creator, &salt)
        .map_err(|e| StdError::generic_err(format!("instantiate2 address: {}", e)))?;
    api.addr_humanize(&canonical)
}
