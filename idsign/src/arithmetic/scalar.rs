//! Scalar field arithmetic modulo n = 115792089237316195423570985008687907852837564279074904382605163141518161494337

use super::{
    ORDER,
    util::{biguint_to_bytes, bytes_to_biguint, inv},
};
use core::ops::{Add, Mul, Neg};
use num_bigint::BigUint;
use num_traits::Zero;

/// Scalars are elements in the finite field modulo n.
///
/// Always fully reduced into `[0, n)`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Returns the zero scalar.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::from(1u8))
    }

    /// Reduces an arbitrary integer modulo `n`.
    pub fn from_uint_reduced(x: BigUint) -> Self {
        if x < *ORDER {
            Self(x)
        } else {
            Self(x % &*ORDER)
        }
    }

    /// Parses a big-endian integer in the range `[0, n)`.
    ///
    /// Returns `None` if the value is `n` or above.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let x = bytes_to_biguint(bytes);
        (x < *ORDER).then_some(Self(x))
    }

    /// Parses a big-endian integer of any width and reduces it modulo `n`.
    pub fn from_bytes_reduced(bytes: &[u8]) -> Self {
        Self::from_uint_reduced(bytes_to_biguint(bytes))
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        biguint_to_bytes(&self.0)
    }

    /// Borrows the underlying integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Returns true if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar greater than or equal to n / 2?
    pub fn is_high(&self) -> bool {
        (&self.0 << 1u32) >= *ORDER
    }

    /// Returns the multiplicative inverse of `self`, or zero if `self` is zero.
    pub fn invert(&self) -> Self {
        Self(inv(&self.0, &ORDER))
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar::from_uint_reduced(&self.0 + &other.0)
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar::from_uint_reduced(&self.0 * &other.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.is_zero() {
            Scalar::zero()
        } else {
            Scalar(&*ORDER - &self.0)
        }
    }
}
