#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! secp256k1 key identities and deterministic recoverable signatures.
//!
//! Everything is computed from first principles over big integers: field and
//! scalar arithmetic, Jacobian point arithmetic, an HMAC-SHA-256 derived
//! nonce, and low-`s` ECDSA with a one-byte recovery id. Messages and public
//! keys are hashed with SHA3-256.
//!
//! The top-level functions form a string-oriented facade over the typed API
//! in [`keys`] and [`ecdsa`]:
//!
//! | function | output |
//! |---|---|
//! | [`generate_private_key`] | 64 hex characters |
//! | [`id`] | 64 hex characters |
//! | [`sign`] | 130 hex characters, `r ‖ s ‖ v` |
//!
//! ```
//! let signature = idsign::sign(
//!     "hello",
//!     "d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6",
//! )?;
//! assert_eq!(
//!     signature,
//!     "e713a1bb015fecabb5a084b0fe6d6e7271fca6f79525a634183cfdb175fe6924\
//!      1f4da161779d8e6b761200e1cf93766010a19072fa778f9643363e2cfadd640900",
//! );
//! # Ok::<(), idsign::Error>(())
//! ```
//!
//! # ⚠️ Security Warning
//!
//! None of the arithmetic in this crate is constant time. Scalar
//! multiplication and modular inversion leak timing information about the
//! private key and nonce. Do not use it where an attacker can measure it.

pub mod arithmetic;
pub mod ecdsa;
pub mod keys;

mod error;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    error::{Error, Result},
    keys::{Identity, PublicKey, SecretKey},
};

use rand_core::CryptoRng;
use tracing::trace;

/// Generate a hex-encoded private key from the operating system's secure
/// randomness source.
///
/// 32 random bytes are hashed with SHA3-256 and the digest is used as the
/// key as-is, without reduction modulo `n`.
#[cfg(feature = "os_rng")]
#[cfg_attr(docsrs, doc(cfg(feature = "os_rng")))]
pub fn generate_private_key() -> Result<String> {
    use rand_core::{OsRng, TryRngCore};
    use zeroize::Zeroize;

    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed).map_err(|err| {
        tracing::debug!(%err, "operating system randomness unavailable");
        Error::Rng
    })?;

    let key = hex::encode(keys::derive_from_seed(&seed));
    seed.zeroize();
    trace!("generated private key");
    Ok(key)
}

/// Generate a hex-encoded private key from `rng`.
///
/// Same derivation as [`generate_private_key`].
pub fn generate_private_key_with_rng<R: CryptoRng + ?Sized>(rng: &mut R) -> String {
    hex::encode(SecretKey::random_bytes(rng))
}

/// Derive the 64-character hex identity of a hex-encoded private key.
///
/// Fails with [`Error::InvalidKey`] if the key is not below the group order,
/// or [`Error::Encoding`] if it is not 32 bytes of hex.
pub fn id(private_key_hex: &str) -> Result<String> {
    let identity = SecretKey::from_hex(private_key_hex)?.identity();
    trace!(%identity, "derived identity");
    Ok(identity.to_hex())
}

/// Derive the 128-character hex public key (`x ‖ y`, no prefix) of a
/// hex-encoded private key.
pub fn public_key(private_key_hex: &str) -> Result<String> {
    Ok(SecretKey::from_hex(private_key_hex)?.public_key().to_hex())
}

/// Sign the UTF-8 bytes of `message` and return the 130-character hex
/// signature `r ‖ s ‖ v`.
///
/// The caller typically passes a base64-encoded request body and ships the
/// result next to it.
pub fn sign(message: &str, private_key_hex: &str) -> Result<String> {
    let secret_key = SecretKey::from_hex(private_key_hex)?;
    let signature = secret_key.sign(message.as_bytes());
    trace!(message_len = message.len(), "signed message");
    Ok(signature.to_hex())
}
