//! ECDSA signing

use super::{
    nonce,
    recoverable::{RecoveryId, Signature},
};
use crate::arithmetic::{AffinePoint, Scalar, fast_multiply};
use num_bigint::BigUint;

/// Computes a recoverable signature over a 32-byte message digest.
///
/// `secret` must already be validated as an integer below the group order;
/// this function does not reject anything. The nonce comes from
/// [`nonce::generate_k`], so equal inputs always produce equal signatures.
#[allow(non_snake_case, clippy::many_single_char_names)]
pub fn raw_sign(digest: &[u8; 32], secret: &[u8; 32]) -> Signature {
    let z = BigUint::from_bytes_be(digest);
    let k = nonce::generate_k(digest, secret);

    // Compute 𝐑 = 𝑘×𝑮
    let R = fast_multiply(&AffinePoint::generator(), &k);

    // Lift x-coordinate of 𝐑 (element of base field) into the scalar field
    let r = Scalar::from_uint_reduced(R.x().as_uint().clone());

    // Compute `s` as a signature over `r` and `z`
    let d = Scalar::from_bytes_reduced(secret);
    let z = Scalar::from_uint_reduced(z);
    let k_inverse = Scalar::from_uint_reduced(k).invert();
    let s = &k_inverse * &(&z + &(&r * &d));

    let (s, is_s_high) = normalize_s(s);
    let recovery_id = RecoveryId::new(R.y().is_odd(), is_s_high);
    Signature::new(&r, &s, recovery_id)
}

/// Normalize `s` into "low S" form as described in
/// [BIP 0062: Dealing with Malleability][1].
///
/// Returns the normalized scalar and whether it had to be negated.
///
/// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
pub fn normalize_s(s: Scalar) -> (Scalar, bool) {
    if s.is_high() { (-&s, true) } else { (s, false) }
}
