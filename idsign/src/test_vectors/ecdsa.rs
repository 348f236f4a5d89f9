//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// Signing test vector
pub struct SignVector {
    /// Private key
    pub d: [u8; 32],
    /// Message, signed as its SHA3-256 digest
    pub m: &'static [u8],
    /// Deterministic nonce
    pub k: Option<[u8; 32]>,
    /// `r ‖ s ‖ v`
    pub sig: [u8; 65],
}

/// Identity derivation test vector
pub struct IdentityVector {
    pub d: [u8; 32],
    /// Unprefixed `x ‖ y`
    pub q: Option<[u8; 64]>,
    pub id: [u8; 32],
}

pub const ECDSA_TEST_VECTORS: &[SignVector] = &[
    SignVector {
        d: hex!("d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6"),
        m: b"hello",
        k: Some(hex!(
            "f82327205594fbd231e355f94b02ee94c54c0df9f6770b307c16c7109a3b7d41"
        )),
        sig: hex!(
            "e713a1bb015fecabb5a084b0fe6d6e7271fca6f79525a634183cfdb175fe6924"
            "1f4da161779d8e6b761200e1cf93766010a19072fa778f9643363e2cfadd6409"
            "00"
        ),
    },
    SignVector {
        d: hex!("d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6"),
        m: b"c",
        k: None,
        sig: hex!(
            "f71e4e5c2340bab126c733181ea43218602445d2424a071688f5ae8da56f8009"
            "3587bd7273d2bf146a61c15a97d1092582f6423e60666bed33497ab2dbd062a0"
            "01"
        ),
    },
    SignVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        m: b"",
        k: None,
        sig: hex!(
            "ab1a548e7964281d13c2e4c3d260fdf29acd9d6e8d21edc63522c972ab3d2aba"
            "0e94f1d6c7a3282498a7f15eaabda6ed2c60adf28208d7f3ffcaef36a23d1eb2"
            "00"
        ),
    },
    SignVector {
        d: hex!("6d2fb6f546bacfd98c68769e61e0b44a697a30596c018a50e28200aa59b01c0a"),
        // base64 of `{"kind":"ping"}`
        m: b"eyJraW5kIjoicGluZyJ9",
        k: None,
        sig: hex!(
            "cbf0fc66627de4835384cfced154830695e77dff8abe5c8e309b04bda30b9889"
            "7991b2c5d48f5c0970b371fb7bcc50b53db61562aafe9f6ed1289b85cfc43d1c"
            "01"
        ),
    },
];

pub const IDENTITY_TEST_VECTORS: &[IdentityVector] = &[
    IdentityVector {
        d: hex!("6d2fb6f546bacfd98c68769e61e0b44a697a30596c018a50e28200aa59b01c0a"),
        q: Some(hex!(
            "08e903276ee7973666dceeefa5335e5c4b6b5989821906db98f8de8acf8f8538"
            "24ca3234a8602200baa2d75f30cb2050cda18602824c3eb2da654a93a01a7ad4"
        )),
        id: hex!("4fef2b5a82d134d058c1883c72d6d9caf77cd59ca82d73105017590dea3dcb87"),
    },
    IdentityVector {
        d: hex!("d6eb959e9aec2e6fdc44b5862b269e987b8a4d6f2baca542d8acaa97ee5e74f6"),
        q: Some(hex!(
            "58d9f552e9794ad73bd4ab77dfe1c7509542ab3121991e20233955f8fc79c266"
            "fd55390ddf3b3309417c78c9ebe2b572dfdf0b2f8eb4b468a6e19176a5f2b1c7"
        )),
        id: hex!("5d6568f883451ae2e407d1a0a7992e414f2a67b69d0e6e9176d353b98f06f696"),
    },
    IdentityVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        q: None,
        id: hex!("2036f5bc759cfb3589fb4e2342bc9b3c843c5ef27dc8ded538de328a7567089b"),
    },
    IdentityVector {
        d: hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        q: None,
        id: hex!("8a1239501ae5ad811ed1de202778d48556f8977f597b971baa2d4e20deb49dd9"),
    },
];
