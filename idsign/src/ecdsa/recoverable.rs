//! Ethereum-style "recoverable signatures".
//!
//! These signatures carry an additional [`RecoveryId`] byte after the usual
//! `r` and `s` scalars:
//!
//! - `r`: 32-byte integer, big endian
//! - `s`: 32-byte integer, big endian, always in the lower half of `[1, n)`
//! - `v`: 1-byte recovery id, `0` or `1`

use crate::{Error, Result, arithmetic::Scalar};
use core::fmt::{self, Debug, Display};

/// Size of a recoverable signature in bytes
pub const SIZE: usize = 65;

/// Recoverable ECDSA/secp256k1 signature, `r ‖ s ‖ v`.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature {
    r: [u8; 32],
    s: [u8; 32],
    recovery_id: RecoveryId,
}

impl Signature {
    /// Assemble a signature from its scalars and recovery id.
    pub fn new(r: &Scalar, s: &Scalar, recovery_id: RecoveryId) -> Self {
        Self {
            r: r.to_bytes(),
            s: s.to_bytes(),
            recovery_id,
        }
    }

    /// Parse a 65-byte `r ‖ s ‖ v` signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::try_from(bytes)
    }

    /// Parse a 130-character hex `r ‖ s ‖ v` signature.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::try_from(hex::decode(s)?.as_slice())
    }

    /// Get the recovery [`RecoveryId`] for this signature
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Big-endian `r` component
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// Big-endian `s` component
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Serialize as `r ‖ s ‖ v`
    pub fn to_bytes(&self) -> [u8; SIZE] {
        let mut bytes = [0u8; SIZE];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.recovery_id.0;
        bytes
    }

    /// Serialize as 130 lowercase hex characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl From<Signature> for [u8; SIZE] {
    fn from(signature: Signature) -> [u8; SIZE] {
        signature.to_bytes()
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoverableSignature {{ bytes: {} }}", self.to_hex())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIZE {
            return Err(Error::Encoding);
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        let recovery_id = RecoveryId::try_from(bytes[64])?;

        Ok(Self { r, s, recovery_id })
    }
}

/// Identifier used to recover the signer's public key from a [`Signature`].
///
/// Always `0` or `1`: the parity of the ephemeral point's `y`-coordinate,
/// flipped when `s` was negated into the lower half of the order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecoveryId(pub(super) u8);

impl RecoveryId {
    /// Combine the parity of `y` with whether `s` was normalized.
    pub fn new(is_y_odd: bool, is_s_high: bool) -> Self {
        Self((is_y_odd ^ is_s_high) as u8)
    }

    /// Create a new [`RecoveryId`] from the given byte value
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 | 1 => Some(Self(byte)),
            _ => None,
        }
    }

    /// Byte value of this id
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte).ok_or(Error::Encoding)
    }
}

impl From<RecoveryId> for u8 {
    fn from(recovery_id: RecoveryId) -> u8 {
        recovery_id.0
    }
}
