#![no_main]
use idsign::{
    Error, SecretKey,
    arithmetic::{JacobianPoint, Scalar, scalar_multiply},
    ecdsa::Signature,
};
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

fn test_group(k1: &BigUint, k2: &BigUint) {
    let g = JacobianPoint::generator();
    let lhs = scalar_multiply(&g, &(k1 + k2));
    let rhs = scalar_multiply(&g, k1).add(&scalar_multiply(&g, k2));
    assert_eq!(lhs.to_affine(), rhs.to_affine());
    assert_eq!(
        scalar_multiply(&g, k1).double().to_affine(),
        scalar_multiply(&g, &(k1 * 2u32)).to_affine()
    );
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let (key, message) = data.split_at(32);

    match SecretKey::from_bytes(key) {
        Ok(secret_key) => {
            let signature = secret_key.sign(message);
            assert_eq!(signature, secret_key.sign(message));
            assert!(signature.recovery_id().to_byte() <= 1);
            let s = Scalar::from_bytes(signature.s());
            assert!(!s.is_some_and(|s| s.is_high()));
            assert_eq!(Signature::from_bytes(&signature.to_bytes()), Ok(signature));

            let hex_key = secret_key.to_hex();
            assert_eq!(idsign::id(&hex_key).map(|id| id.len()), Ok(64));
            if let Ok(text) = core::str::from_utf8(message) {
                assert_eq!(idsign::sign(text, &hex_key), Ok(signature.to_hex()));
            }

            let public_key = secret_key.public_key();
            let expected = &JacobianPoint::generator() * &secret_key.to_scalar();
            assert_eq!(expected.to_affine(), *public_key.as_affine());
        }
        Err(err) => assert_eq!(err, Error::InvalidKey),
    }

    test_group(
        &BigUint::from_bytes_be(&data[..32]),
        &BigUint::from_bytes_be(&data[32..64]),
    );
});
