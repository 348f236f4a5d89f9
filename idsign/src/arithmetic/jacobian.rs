//! Jacobian points

use super::{AffinePoint, FieldElement};

/// A point on the secp256k1 curve in Jacobian coordinates.
///
/// `(X, Y, Z)` represents the affine point `(X / Z², Y / Z³)`. Any triple with
/// `Y = 0` is the point at infinity.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JacobianPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl JacobianPoint {
    /// Builds a point from raw Jacobian coordinates.
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity, `(0, 0, 1)`.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            z: FieldElement::one(),
        }
    }

    /// Base point `G` lifted with `Z = 1`.
    pub fn generator() -> Self {
        Self::from(AffinePoint::generator())
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.y.is_zero()
    }

    /// Raw `(X, Y, Z)` coordinates.
    pub fn coordinates(&self) -> (&FieldElement, &FieldElement, &FieldElement) {
        (&self.x, &self.y, &self.z)
    }

    /// Lowers this point to affine coordinates with a single field inversion.
    pub fn to_affine(&self) -> AffinePoint {
        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = &z_inv2 * &z_inv;
        AffinePoint::new(&self.x * &z_inv2, &self.y * &z_inv3)
    }

    /// Doubles this point.
    ///
    /// Specialized for curve coefficient `a = 0`.
    pub fn double(&self) -> JacobianPoint {
        if self.is_identity() {
            return self.clone();
        }

        let ysq = self.y.square();
        let s = (&self.x * &ysq).mul_single(4);
        let m = self.x.square().mul_single(3);

        let x = &m.square() - &s.double();
        let y = &(&m * &(&s - &x)) - &ysq.square().mul_single(8);
        let z = (&self.y * &self.z).double();

        JacobianPoint { x, y, z }
    }

    /// Returns `self + other`.
    ///
    /// Falls through to [`JacobianPoint::double`] when both operands are the
    /// same point, and yields the point at infinity when they are inverses.
    pub fn add(&self, other: &JacobianPoint) -> JacobianPoint {
        if self.is_identity() {
            return other.clone();
        }
        if other.is_identity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        // Project both points onto the common denominator
        let u1 = &self.x * &z2z2;
        let u2 = &other.x * &z1z1;
        let s1 = &self.y * &(&z2z2 * &other.z);
        let s2 = &other.y * &(&z1z1 * &self.z);

        if u1 == u2 {
            if s1 != s2 {
                return JacobianPoint::identity();
            }
            return self.double();
        }

        let h = &u2 - &u1;
        let r = &s2 - &s1;
        let h2 = h.square();
        let h3 = &h * &h2;
        let u1h2 = &u1 * &h2;

        let x = &(&r.square() - &h3) - &u1h2.double();
        let y = &(&r * &(&u1h2 - &x)) - &(&s1 * &h3);
        let z = &(&h * &self.z) * &other.z;

        JacobianPoint { x, y, z }
    }
}

impl From<AffinePoint> for JacobianPoint {
    fn from(p: AffinePoint) -> Self {
        JacobianPoint {
            x: p.x,
            y: p.y,
            z: FieldElement::one(),
        }
    }
}

impl From<&AffinePoint> for JacobianPoint {
    fn from(p: &AffinePoint) -> Self {
        Self::from(p.clone())
    }
}

impl From<&JacobianPoint> for AffinePoint {
    fn from(p: &JacobianPoint) -> AffinePoint {
        p.to_affine()
    }
}
