//! Affine points

use super::{FieldElement, GENERATOR_X, GENERATOR_Y, util::bytes_to_biguint};

/// A point on the secp256k1 curve in affine coordinates.
///
/// The point at infinity has no affine form; lowering it yields `(0, 0)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// Creates a point from its coordinates without checking the curve equation.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// Returns the base point `G` of secp256k1.
    pub fn generator() -> Self {
        Self {
            x: FieldElement::from_uint_reduced(bytes_to_biguint(&GENERATOR_X)),
            y: FieldElement::from_uint_reduced(bytes_to_biguint(&GENERATOR_Y)),
        }
    }

    /// Affine `x`-coordinate.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// Affine `y`-coordinate.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Serializes as `x ‖ y`, each coordinate a 32-byte big-endian field.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.x.to_bytes());
        bytes[32..].copy_from_slice(&self.y.to_bytes());
        bytes
    }
}
