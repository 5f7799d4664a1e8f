//! secp256k1 signature parsing and signer recovery
//!
//! Two encodings are accepted:
//! - `(v, r, s)` as used by EIP-2612 `permit`, with `v ∈ {27, 28}`
//! - compact `(r, vs)` (EIP-2098), where the top bit of `vs` carries the
//!   recovery parity and the remaining 255 bits are `s`
//!
//! Malleable signatures (upper-half `s`) are rejected, matching OpenZeppelin
//! `ECDSA.tryRecover`. Public key recovery goes through the host `Api`.

use cosmwasm_std::Api;
use thiserror::Error;

use crate::address::EvmAddress;
use crate::hash::keccak256;

/// secp256k1 curve order divided by two, big-endian
pub const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("Invalid signature 'v' value: {0}")]
    InvalidV(u8),

    #[error("Invalid signature 's' value")]
    InvalidS,

    #[error("Invalid signature length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Signature recovery failed: {0}")]
    Recovery(String),
}

/// Compact EIP-2098 signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompactSignature {
    pub r: [u8; 32],
    pub vs: [u8; 32],
}

impl CompactSignature {
    pub fn new(r: [u8; 32], vs: [u8; 32]) -> Self {
        Self { r, vs }
    }

    /// Build from the wire form, where both halves arrive as raw bytes
    pub fn from_slices(r: &[u8], vs: &[u8]) -> Result<Self, SignatureError> {
        Ok(Self {
            r: to_word(r)?,
            vs: to_word(vs)?,
        })
    }

    /// Pack `(r, s, parity)` into the compact form
    pub fn from_parts(r: [u8; 32], s: [u8; 32], y_parity: bool) -> Self {
        let mut vs = s;
        if y_parity {
            vs[0] |= 0x80;
        }
        Self { r, vs }
    }

    /// Recovery parity stored in the top bit of `vs`
    pub fn y_parity(&self) -> bool {
        self.vs[0] & 0x80 != 0
    }

    /// `s` with the parity bit cleared
    pub fn s(&self) -> [u8; 32] {
        let mut s = self.vs;
        s[0] &= 0x7f;
        s
    }
}

/// Interpret a byte slice as a 32-byte signature word
pub fn to_word(bytes: &[u8]) -> Result<[u8; 32], SignatureError> {
    bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidLength(bytes.len()))
}

/// Recover the signer of `digest` from raw components.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    r: &[u8; 32],
    s: &[u8; 32],
    y_parity: bool,
) -> Result<EvmAddress, SignatureError> {
    // Big-endian byte order compares like the integers
    if s > &SECP256K1_HALF_ORDER {
        return Err(SignatureError::InvalidS);
    }

    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(r);
    signature[32..].copy_from_slice(s);

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature, u8::from(y_parity))
        .map_err(|e| SignatureError::Recovery(e.to_string()))?;

    // Uncompressed SEC1 key: 0x04 ‖ X ‖ Y
    if pubkey.len() != 65 {
        return Err(SignatureError::Recovery(format!(
            "unexpected public key length {}",
            pubkey.len()
        )));
    }
    let hash = keccak256(&pubkey[1..]);
    let mut signer = [0u8; 20];
    signer.copy_from_slice(&hash[12..]);
    Ok(signer)
}

/// Recover from a `(v, r, s)` triple, `v` being 27 or 28.
pub fn recover_vrs(
    api: &dyn Api,
    digest: &[u8; 32],
    v: u8,
    r: &[u8; 32],
    s: &[u8; 32],
) -> Result<EvmAddress, SignatureError> {
    let y_parity = match v {
        27 => false,
        28 => true,
        other => return Err(SignatureError::InvalidV(other)),
    };
    recover_signer(api, digest, r, s, y_parity)
}

/// Recover from a compact `(r, vs)` signature.
pub fn recover_compact(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &CompactSignature,
) -> Result<EvmAddress, SignatureError> {
    recover_signer(api, digest, &signature.r, &signature.s(), signature.y_parity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;
    use alloy::signers::{local::PrivateKeySigner, SignerSync};
    use cw_multi_test::MockApiBech32;

    fn test_signer() -> PrivateKeySigner {
        "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d"
            .parse()
            .unwrap()
    }

    fn sign(signer: &PrivateKeySigner, digest: &[u8; 32]) -> ([u8; 32], [u8; 32], bool) {
        let sig = signer.sign_hash_sync(&B256::from(*digest)).unwrap();
        (
            sig.r().to_be_bytes::<32>(),
            sig.s().to_be_bytes::<32>(),
            sig.v(),
        )
    }

    fn signer_bytes(signer: &PrivateKeySigner) -> EvmAddress {
        signer.address().into_array()
    }

    #[test]
    fn test_compact_roundtrip_recovers_signer() {
        let api = MockApiBech32::new("file");
        let signer = test_signer();
        let digest = keccak256(b"redeem");
        let (r, s, parity) = sign(&signer, &digest);

        let compact = CompactSignature::from_parts(r, s, parity);
        assert_eq!(compact.y_parity(), parity);
        assert_eq!(compact.s(), s);
        assert_eq!(
            recover_compact(&api, &digest, &compact).unwrap(),
            signer_bytes(&signer)
        );
    }

    #[test]
    fn test_vrs_recovers_signer() {
        let api = MockApiBech32::new("file");
        let signer = test_signer();
        let digest = keccak256(b"permit");
        let (r, s, parity) = sign(&signer, &digest);

        let v = if parity { 28 } else { 27 };
        assert_eq!(
            recover_vrs(&api, &digest, v, &r, &s).unwrap(),
            signer_bytes(&signer)
        );
    }

    #[test]
    fn test_rejects_bad_v() {
        let api = MockApiBech32::new("file");
        let digest = keccak256(b"permit");
        let err = recover_vrs(&api, &digest, 29, &[0u8; 32], &[0u8; 32]).unwrap_err();
        assert_eq!(err, SignatureError::InvalidV(29));
    }

    #[test]
    fn test_rejects_high_s() {
        let api = MockApiBech32::new("file");
        let digest = keccak256(b"permit");
        let mut high_s = SECP256K1_HALF_ORDER;
        high_s[31] += 1;
        let err = recover_signer(&api, &digest, &[1u8; 32], &high_s, false).unwrap_err();
        assert_eq!(err, SignatureError::InvalidS);
    }

    #[test]
    fn test_wrong_digest_recovers_other_address() {
        let api = MockApiBech32::new("file");
        let signer = test_signer();
        let (r, s, parity) = sign(&signer, &keccak256(b"one"));
        let compact = CompactSignature::from_parts(r, s, parity);

        let recovered = recover_compact(&api, &keccak256(b"two"), &compact);
        assert_ne!(recovered, Ok(signer_bytes(&signer)));
    }

    #[test]
    fn test_from_slices_checks_length() {
        let err = CompactSignature::from_slices(&[0u8; 31], &[0u8; 32]).unwrap_err();
        assert_eq!(err, SignatureError::InvalidLength(31));
    }
}
