//! Error type

use core::fmt::{self, Display};

/// Result type with the `idsign` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Key derivation and signing errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Private key integer is not below the group order `n`.
    InvalidKey,

    /// Input is not valid hex or has the wrong length.
    Encoding,

    /// The operating system randomness source failed.
    Rng,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey => f.write_str("invalid private key"),
            Error::Encoding => f.write_str("malformed encoding"),
            Error::Rng => f.write_str("randomness source failure"),
        }
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Error {
        Error::Encoding
    }
}
