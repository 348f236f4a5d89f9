//! Deterministic ephemeral scalar derivation.
//!
//! An HMAC-SHA-256 construction in the shape of RFC6979 section 3.2, cut down
//! to one fixed pass: the `K`/`V` state is updated twice and the third HMAC
//! output is taken as the nonce directly. There is no rejection sampling and
//! no check that the result lies in `[1, n)`; signatures produced elsewhere
//! from this exact sequence must keep verifying bit for bit.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Derives the nonce `k` for signing `digest` with the private key `secret`.
///
/// Both inputs are 32-byte big-endian strings. The output is the raw
/// 256-bit HMAC output read as a big-endian integer.
pub fn generate_k(digest: &[u8; 32], secret: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(&generate_k_bytes(digest, secret))
}

/// Byte form of [`generate_k`].
pub fn generate_k_bytes(digest: &[u8; 32], secret: &[u8; 32]) -> [u8; 32] {
    let v = [0x01u8; 32];
    let k = [0x00u8; 32];

    let k = hmac(&k, &[&v[..], &[0x00u8][..], &secret[..], &digest[..]]);
    let v = hmac(&k, &[&v[..]]);
    let k = hmac(&k, &[&v[..], &[0x01u8][..], &secret[..], &digest[..]]);
    let v = hmac(&k, &[&v[..]]);

    hmac(&k, &[&v[..]])
}

/// HMAC-SHA-256 over the concatenation of `parts`.
fn hmac(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    for part in parts {
        mac.update(part);
    }

    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}
