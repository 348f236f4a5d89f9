//! Scalar multiplication by double-and-add.
//!
//! Variable time: the sequence of doublings and additions depends on the bits
//! of the scalar.

use super::{AffinePoint, JacobianPoint, ORDER, Scalar};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes `k × P` in Jacobian coordinates.
///
/// Scalars at or above the group order are reduced modulo `n` first, so a
/// scalar congruent to zero yields the point at infinity. The bits of `k` are
/// walked from the most significant one down, doubling the accumulator at
/// every step and adding `P` for every set bit.
pub fn scalar_multiply(p: &JacobianPoint, k: &BigUint) -> JacobianPoint {
    if p.is_identity() || k.is_zero() {
        return JacobianPoint::identity();
    }

    let reduced;
    let k = if *k >= *ORDER {
        reduced = k % &*ORDER;
        &reduced
    } else {
        k
    };

    if k.is_zero() {
        return JacobianPoint::identity();
    }
    if k.is_one() {
        return p.clone();
    }

    // The top bit seeds the accumulator with `P` itself
    let mut acc = p.clone();
    for i in (0..k.bits() - 1).rev() {
        acc = acc.double();
        if k.bit(i) {
            acc = acc.add(p);
        }
    }
    acc
}

/// Computes `k × P` for an affine point, returning an affine point.
pub fn fast_multiply(p: &AffinePoint, k: &BigUint) -> AffinePoint {
    scalar_multiply(&JacobianPoint::from(p), k).to_affine()
}

impl core::ops::Mul<&Scalar> for &JacobianPoint {
    type Output = JacobianPoint;

    fn mul(self, k: &Scalar) -> JacobianPoint {
        scalar_multiply(self, k.as_uint())
    }
}

impl core::ops::Mul<&Scalar> for &AffinePoint {
    type Output = AffinePoint;

    fn mul(self, k: &Scalar) -> AffinePoint {
        fast_multiply(self, k.as_uint())
    }
}
