//! Hash computation shared by every FileBridge contract
//!
//! Everything here produces byte-identical output to the Solidity contracts and
//! to the off-chain signers (ethers `_TypedDataEncoder`, alloy `SolStruct`), so
//! a signature produced off-chain verifies against the digest computed here.
//!
//! # EIP-712 Domain (160 bytes before hashing)
//! - Bytes 0-31:    EIP712_DOMAIN_TYPEHASH
//! - Bytes 32-63:   keccak256(name)
//! - Bytes 64-95:   keccak256(version)
//! - Bytes 96-127:  chainId (uint256, big-endian, left-padded)
//! - Bytes 128-159: verifyingContract (address, left-padded)
//!
//! # Typed data digest (66 bytes before hashing)
//! - Bytes 0-1:     0x19 0x01
//! - Bytes 2-33:    domainSeparator
//! - Bytes 34-65:   structHash

use cosmwasm_std::Uint256;
use tiny_keccak::{Hasher, Keccak};

use crate::address::EvmAddress;

/// `EIP712Domain` type string used by both the token permits and the bridge
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// EIP-2612 permit type string
pub const PERMIT_TYPE: &str =
    "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)";

/// Guardian-signed redemption type string
pub const REDEEM_TYPE: &str =
    "Redeem(address to,uint256 chainId,address token,uint256 amount,uint256 nonce)";

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// keccak256 of a type string, the Solidity `keccak256("...")` constant
pub fn type_hash(type_string: &str) -> [u8; 32] {
    keccak256(type_string.as_bytes())
}

/// Left-pad an address to a 32-byte ABI word
pub fn address_word(addr: &EvmAddress) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(addr);
    word
}

/// Encode a uint256 as a 32-byte big-endian ABI word
pub fn u256_word(value: &Uint256) -> [u8; 32] {
    value.to_be_bytes()
}

/// Encode a u64 as a 32-byte ABI word (left-padded)
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..32].copy_from_slice(&value.to_be_bytes());
    word
}

/// Hash a sequence of 32-byte words, i.e. `keccak256(abi.encode(...))` over
/// static types only.
fn hash_words(words: &[[u8; 32]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    for word in words {
        hasher.update(word);
    }
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the EIP-712 domain separator
///
/// ```solidity
/// keccak256(abi.encode(TYPE_HASH, keccak256(bytes(name)), keccak256(bytes(version)), block.chainid, address(this)))
/// ```
pub fn domain_separator(
    name: &str,
    version: &str,
    chain_id: u64,
    verifying_contract: &EvmAddress,
) -> [u8; 32] {
    hash_words(&[
        type_hash(EIP712_DOMAIN_TYPE),
        keccak256(name.as_bytes()),
        keccak256(version.as_bytes()),
        u64_word(chain_id),
        address_word(verifying_contract),
    ])
}

/// Compute the permit struct hash
///
/// Byte layout (192 bytes): PERMIT_TYPEHASH, owner, spender, value, nonce, deadline
pub fn permit_struct_hash(
    owner: &EvmAddress,
    spender: &EvmAddress,
    value: &Uint256,
    nonce: &Uint256,
    deadline: &Uint256,
) -> [u8; 32] {
    hash_words(&[
        type_hash(PERMIT_TYPE),
        address_word(owner),
        address_word(spender),
        u256_word(value),
        u256_word(nonce),
        u256_word(deadline),
    ])
}

/// Compute the redemption struct hash
///
/// Byte layout (192 bytes): REDEEM_TYPEHASH, to, chainId, token, amount, nonce
pub fn redeem_struct_hash(
    to: &EvmAddress,
    chain_id: u64,
    token: &EvmAddress,
    amount: &Uint256,
    nonce: &Uint256,
) -> [u8; 32] {
    hash_words(&[
        type_hash(REDEEM_TYPE),
        address_word(to),
        u64_word(chain_id),
        address_word(token),
        u256_word(amount),
        u256_word(nonce),
    ])
}

/// Combine a domain separator and struct hash into the digest that is signed
///
/// Matches OpenZeppelin `ECDSA.toTypedDataHash`.
pub fn typed_data_hash(domain_separator: &[u8; 32], struct_hash: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(domain_separator);
    data[34..66].copy_from_slice(struct_hash);
    keccak256(&data)
}

/// instantiate2 salt for a pair: `keccak256(token0 ‖ token1)` over the
/// canonical address bytes
///
/// Tokens must already be sorted.
pub fn pair_salt(token0: &[u8], token1: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(token0);
    hasher.update(token1);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert 32-byte hash to hex string (for logging and event attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
