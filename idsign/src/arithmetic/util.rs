//! Helper functions.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Computes the multiplicative inverse of `a` modulo `n` with the extended
/// Euclidean algorithm.
///
/// `a` is reduced modulo `n` first. The inverse of zero (including any
/// multiple of `n`) is defined as zero, which is what lowers the point at
/// infinity (`Z = 0`) to the affine pair `(0, 0)`.
///
/// Not constant time.
pub fn inv(a: &BigUint, n: &BigUint) -> BigUint {
    let a = a % n;
    if a.is_zero() {
        return BigUint::zero();
    }

    let n_signed = BigInt::from(n.clone());
    let (mut lm, mut hm) = (BigInt::one(), BigInt::zero());
    let (mut low, mut high) = (BigInt::from(a), n_signed.clone());

    while low > BigInt::one() {
        let r = &high / &low;
        let nm = &hm - &lm * &r;
        let new = &high - &low * &r;
        hm = core::mem::replace(&mut lm, nm);
        high = core::mem::replace(&mut low, new);
    }

    // Bezout coefficients go negative; fold back into `[0, n)`
    let reduced = ((lm % &n_signed) + &n_signed) % &n_signed;
    reduced.to_biguint().unwrap_or_else(BigUint::zero)
}

/// Converts a big-endian byte slice to a [`BigUint`].
pub fn bytes_to_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts a [`BigUint`] to a fixed-width 32-byte big-endian array.
///
/// Shorter values are left-padded with zeros; longer values keep only their
/// low 32 bytes.
pub fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let be = x.to_bytes_be();
    let mut bytes = [0u8; 32];
    if be.len() >= 32 {
        bytes.copy_from_slice(&be[be.len() - 32..]);
    } else {
        bytes[32 - be.len()..].copy_from_slice(&be);
    }
    bytes
}
