//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use super::{
    FIELD_MODULUS,
    util::{biguint_to_bytes, bytes_to_biguint, inv},
};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use num_traits::Zero;

/// An element in the finite field used for curve coordinates.
///
/// Always fully reduced into `[0, p)`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Returns the zero element.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the multiplicative identity.
    pub fn one() -> Self {
        Self(BigUint::from(1u8))
    }

    /// Reduces an arbitrary integer modulo `p`.
    pub fn from_uint_reduced(x: BigUint) -> Self {
        if x < *FIELD_MODULUS {
            Self(x)
        } else {
            Self(x % &*FIELD_MODULUS)
        }
    }

    /// Parses a big-endian integer in the range `[0, p)`.
    ///
    /// Returns `None` if the value is `p` or above.
    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let x = bytes_to_biguint(bytes);
        (x < *FIELD_MODULUS).then_some(Self(x))
    }

    /// Returns the big-endian encoding of this field element.
    pub fn to_bytes(&self) -> [u8; 32] {
        biguint_to_bytes(&self.0)
    }

    /// Borrows the underlying integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Determine if this field element is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Determine if this field element is odd in the SEC1 sense: `self mod 2 == 1`.
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Returns `2 * self`.
    pub fn double(&self) -> Self {
        Self::from_uint_reduced(&self.0 << 1u32)
    }

    /// Returns `self * self`.
    pub fn square(&self) -> Self {
        self * self
    }

    /// Multiplies by a small integer.
    pub fn mul_single(&self, rhs: u32) -> Self {
        Self::from_uint_reduced(&self.0 * rhs)
    }

    /// Returns the multiplicative inverse of `self`, or zero if `self` is zero.
    pub fn invert(&self) -> Self {
        Self(inv(&self.0, &FIELD_MODULUS))
    }
}

impl From<u32> for FieldElement {
    fn from(n: u32) -> FieldElement {
        Self::from_uint_reduced(BigUint::from(n))
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement::from_uint_reduced(&self.0 + &other.0)
    }
}

impl Add<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn add(self, other: FieldElement) -> FieldElement {
        &self + &other
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        // Both operands are below `p`, so adding `p` first keeps this unsigned
        FieldElement::from_uint_reduced(&self.0 + &*FIELD_MODULUS - &other.0)
    }
}

impl Sub<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn sub(self, other: FieldElement) -> FieldElement {
        &self - &other
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement::from_uint_reduced(&self.0 * &other.0)
    }
}

impl Mul<&FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        &self * other
    }
}

impl Mul<FieldElement> for FieldElement {
    type Output = FieldElement;

    fn mul(self, other: FieldElement) -> FieldElement {
        &self * &other
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        &FieldElement::zero() - self
    }
}
