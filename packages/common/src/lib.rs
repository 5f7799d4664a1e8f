//! Common - Shared Types and Utilities for FileBridge Contracts
//!
//! This package provides what the contracts and the off-chain signers must
//! agree on byte-for-byte, plus the message types contracts use to call each
//! other:
//!
//! - **Hash** - keccak256, EIP-712 domain/struct hashes, pair salts
//! - **Signature** - `(v, r, s)` and compact `(r, vs)` signer recovery
//! - **Address** - EVM views of accounts, zero address, pair address prediction
//! - **Math** - integer square root and UQ112x112 fixed point
//! - **Ledger** - cw20 extensions (permit, absolute approve, unlimited allowance)
//! - **Messages** - pair, factory and wrapped token interfaces

pub mod address;
pub mod factory;
pub mod hash;
pub mod ledger;
pub mod math;
pub mod pair;
pub mod signature;
pub mod wrapped;

pub use address::{
    addr_to_evm, evm_address, is_signer_account, is_zero_address, pair_address, zero_address,
    EvmAddress,
};
pub use hash::{
    bytes32_to_hex, domain_separator, keccak256, pair_salt, permit_struct_hash,
    redeem_struct_hash, type_hash, typed_data_hash, EIP712_DOMAIN_TYPE, PERMIT_TYPE, REDEEM_TYPE,
};
pub use ledger::LedgerError;
pub use signature::{recover_compact, recover_vrs, CompactSignature, SignatureError};
