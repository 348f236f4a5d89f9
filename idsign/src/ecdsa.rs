//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing only: messages are digested with SHA3-256, the ephemeral scalar is
//! derived deterministically with HMAC-SHA-256 (see [`nonce`]), and the
//! output is a low-`s` [`recoverable::Signature`].
//!
//! ```
//! use idsign::{SecretKey, ecdsa::Signature};
//!
//! let secret_key = SecretKey::from_hex(
//!     "d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6",
//! )?;
//! let signature: Signature = secret_key.sign(b"hello");
//! assert_eq!(signature.to_bytes().len(), 65);
//! # Ok::<(), idsign::Error>(())
//! ```

pub mod nonce;
pub mod recoverable;
pub mod sign;

pub use self::{
    recoverable::{RecoveryId, Signature},
    sign::{normalize_s, raw_sign},
};

use sha3::{Digest, Sha3_256};

/// Size of a message digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// SHA3-256 digest of `msg`, the prehash every signature is computed over.
pub fn hash_message(msg: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut digest = [0u8; DIGEST_SIZE];
    digest.copy_from_slice(&Sha3_256::digest(msg));
    digest
}
