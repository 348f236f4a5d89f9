//! Big-integer group operations on secp256k1.
//!
//! Points are kept in Jacobian coordinates while they are being doubled and
//! added, so that a whole scalar multiplication costs a single field
//! inversion. None of the routines here are constant time.

pub(crate) mod affine;
pub(crate) mod field;
pub(crate) mod jacobian;
pub(crate) mod mul;
pub(crate) mod scalar;

mod util;

pub use self::{
    affine::AffinePoint,
    field::FieldElement,
    jacobian::JacobianPoint,
    mul::{fast_multiply, scalar_multiply},
    scalar::Scalar,
    util::{biguint_to_bytes, bytes_to_biguint, inv},
};

use hex_literal::hex;
use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// Prime `p` of the base field, big endian.
pub const FIELD_MODULUS_BYTES: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

/// Order `n` of the group generated by [`AffinePoint::generator`], big endian.
pub const ORDER_BYTES: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// Affine `x`-coordinate of the base point `G`.
pub const GENERATOR_X: [u8; 32] =
    hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

/// Affine `y`-coordinate of the base point `G`.
pub const GENERATOR_Y: [u8; 32] =
    hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

/// Curve coefficient `a` in `y² = x³ + ax + b`.
pub const CURVE_EQUATION_A: u32 = 0;

/// Curve coefficient `b` in `y² = x³ + ax + b`.
pub const CURVE_EQUATION_B: u32 = 7;

/// [`FIELD_MODULUS_BYTES`] as an integer.
pub static FIELD_MODULUS: Lazy<BigUint> = Lazy::new(|| bytes_to_biguint(&FIELD_MODULUS_BYTES));

/// [`ORDER_BYTES`] as an integer.
pub static ORDER: Lazy<BigUint> = Lazy::new(|| bytes_to_biguint(&ORDER_BYTES));
