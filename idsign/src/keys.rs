//! Private keys, public keys and the identities derived from them.

use crate::{
    Error, Result,
    arithmetic::{AffinePoint, ORDER, Scalar, bytes_to_biguint, fast_multiply},
    ecdsa::{self, Signature},
};
use core::fmt::{self, Debug, Display};
use rand_core::CryptoRng;
use sha3::{Digest, Sha3_256};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a serialized private key in bytes
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of an unprefixed `x ‖ y` public key in bytes
pub const PUBLIC_KEY_SIZE: usize = 64;

/// Size of an identity in bytes
pub const IDENTITY_SIZE: usize = 32;

/// secp256k1 private key.
///
/// A 32-byte big-endian integer strictly below the group order `n`. Zero is
/// accepted. The bytes are wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_SIZE],
}

impl SecretKey {
    /// Parse a 32-byte big-endian private key.
    ///
    /// Fails with [`Error::Encoding`] on any other length and with
    /// [`Error::InvalidKey`] if the integer is not below `n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; SECRET_KEY_SIZE] = bytes.try_into().map_err(|_| {
            debug!(len = bytes.len(), "private key has wrong length");
            Error::Encoding
        })?;

        if bytes_to_biguint(&bytes) >= *ORDER {
            debug!("private key is not below the group order");
            return Err(Error::InvalidKey);
        }

        Ok(Self { bytes })
    }

    /// Parse a 64-character hex private key.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = hex::decode(s).map_err(|err| {
            debug!(%err, "private key is not valid hex");
            Error::Encoding
        })?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Hash 32 bytes drawn from `rng` with SHA3-256 and use the digest as
    /// the private key.
    ///
    /// The digest is not reduced modulo `n`, so the result is returned as raw
    /// bytes; in the rare case it is `n` or above, parsing it with
    /// [`SecretKey::from_bytes`] fails with [`Error::InvalidKey`].
    pub fn random_bytes<R: CryptoRng + ?Sized>(rng: &mut R) -> [u8; SECRET_KEY_SIZE] {
        let mut seed = [0u8; 32];
        rng.fill_bytes(&mut seed);
        let bytes = derive_from_seed(&seed);
        seed.zeroize();
        bytes
    }

    /// Generate a random private key, drawing again if the derived digest
    /// happens to fall outside `[0, n)`.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut bytes = Self::random_bytes(rng);
            let key = Self::from_bytes(&bytes);
            bytes.zeroize();
            if let Ok(key) = key {
                return key;
            }
        }
    }

    /// Serialize as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_SIZE] {
        self.bytes
    }

    /// Serialize as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// The private key as a scalar.
    pub fn to_scalar(&self) -> Scalar {
        Scalar::from_bytes_reduced(&self.bytes)
    }

    /// Compute `d × G`.
    pub fn public_key(&self) -> PublicKey {
        let d = bytes_to_biguint(&self.bytes);
        PublicKey {
            point: fast_multiply(&AffinePoint::generator(), &d),
        }
    }

    /// Identity of the public key belonging to this private key.
    pub fn identity(&self) -> Identity {
        Identity::from_public_key(&self.public_key())
    }

    /// Sign the SHA3-256 digest of `msg`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        self.sign_prehash(&ecdsa::hash_message(msg))
    }

    /// Sign a precomputed 32-byte digest.
    pub fn sign_prehash(&self, digest: &[u8; ecdsa::DIGEST_SIZE]) -> Signature {
        ecdsa::raw_sign(digest, &self.bytes)
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Eq for SecretKey {}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// SHA3-256 of a 32-byte random seed.
pub(crate) fn derive_from_seed(seed: &[u8; 32]) -> [u8; SECRET_KEY_SIZE] {
    let mut bytes = [0u8; SECRET_KEY_SIZE];
    bytes.copy_from_slice(&Sha3_256::digest(seed));
    bytes
}

/// secp256k1 public key: the affine point `d × G`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Borrow the underlying curve point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Serialize as the unprefixed `x ‖ y` layout, 32 bytes per coordinate.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.point.to_bytes()
    }

    /// Serialize as 128 lowercase hex characters, `x ‖ y`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Serialize as `"04"` followed by [`PublicKey::to_hex`], the SEC1
    /// uncompressed form as text.
    pub fn to_prefixed_hex(&self) -> String {
        let mut s = String::with_capacity(2 + 2 * PUBLIC_KEY_SIZE);
        s.push_str("04");
        s.push_str(&self.to_hex());
        s
    }

    /// Identity derived from this public key.
    pub fn identity(&self) -> Identity {
        Identity::from_public_key(self)
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret_key: &SecretKey) -> PublicKey {
        secret_key.public_key()
    }
}

/// Stable public handle for a key pair.
///
/// The SHA3-256 digest of the UTF-8 text `"04" + hex(x ‖ y)`; note that the
/// hash covers the hex string, not the raw point bytes.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identity([u8; IDENTITY_SIZE]);

impl Identity {
    /// Derive the identity of `public_key`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let mut bytes = [0u8; IDENTITY_SIZE];
        let text = public_key.to_prefixed_hex();
        bytes.copy_from_slice(&Sha3_256::digest(text.as_bytes()));
        Self(bytes)
    }

    /// Borrow the raw digest.
    pub fn as_bytes(&self) -> &[u8; IDENTITY_SIZE] {
        &self.0
    }

    /// Serialize as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&PublicKey> for Identity {
    fn from(public_key: &PublicKey) -> Identity {
        Identity::from_public_key(public_key)
    }
}
