#![no_main]
use idsign::arithmetic::{FieldElement, Scalar};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fn test_field(fe1: &FieldElement, fe2: &FieldElement, fe3: &FieldElement) {
    // Associativity
    assert_eq!(fe1 + &(fe2 + fe3), &(fe1 + fe2) + fe3);
    assert_eq!(fe1 * &(fe2 * fe3), &(fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + &FieldElement::zero(), fe1.clone());
    assert_eq!(fe1 * &FieldElement::one(), fe1.clone());
    assert!((fe1 - fe1).is_zero());

    // Distributivity
    assert_eq!(fe1 * &(fe2 + fe3), &(fe1 * fe2) + &(fe1 * fe3));

    // Inverse, square, double
    assert!((fe1 + &(-fe1)).is_zero());
    assert_eq!(fe1.square(), fe1 * fe1);
    assert_eq!(fe1.double(), fe1 + fe1);
    if !fe1.is_zero() {
        assert_eq!(fe1 * &fe1.invert(), FieldElement::one());
    }
}

fn test_scalar(s1: &Scalar, s2: &Scalar, s3: &Scalar) {
    assert_eq!(s1 * &(s2 + s3), &(s1 * s2) + &(s1 * s3));
    assert!((s1 + &(-s1)).is_zero());
    if !s1.is_zero() {
        assert_eq!(s1 * &s1.invert(), Scalar::one());
    }
    if !s1.is_zero() {
        assert_ne!(s1.is_high(), (-s1).is_high());
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let limbs = [&data[0..32], &data[32..64], &data[64..96]]
        .map(BigUint::from_bytes_be);

    let [fe1, fe2, fe3] = limbs.clone().map(FieldElement::from_uint_reduced);
    test_field(&fe1, &fe2, &fe3);

    let [s1, s2, s3] = limbs.map(Scalar::from_uint_reduced);
    test_scalar(&s1, &s2, &s3);
});
