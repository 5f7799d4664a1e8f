//! Integer helpers for the constant-product pair
//!
//! Prices are stored as UQ112x112 fixed-point numbers: a 224-bit value whose
//! low 112 bits are the fractional part.

use cosmwasm_std::Uint256;

/// 2^112, the UQ112x112 scaling factor
pub const Q112: Uint256 = Uint256::from_u128(1u128 << 112);

/// Largest value representable in 112 bits
pub const U112_MAX: Uint256 = Uint256::from_u128((1u128 << 112) - 1);

/// Babylonian integer square root, rounding down
pub fn sqrt(y: Uint256) -> Uint256 {
    let two = Uint256::from(2u8);
    if y > Uint256::from(3u8) {
        let mut z = y;
        let mut x = y / two + Uint256::one();
        while x < z {
            z = x;
            x = (y / x + x) / two;
        }
        z
    } else if !y.is_zero() {
        Uint256::one()
    } else {
        Uint256::zero()
    }
}

/// Encode a 112-bit integer as UQ112x112
pub fn uq112x112_encode(y: Uint256) -> Uint256 {
    y << 112
}

/// Divide a UQ112x112 by an integer, returning UQ112x112
///
/// Caller guarantees `y != 0`.
pub fn uq112x112_div(x: Uint256, y: Uint256) -> Uint256 {
    x / y
}
