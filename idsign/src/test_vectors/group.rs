//! Jacobian group operation test vectors

use hex_literal::hex;

/// Raw `(X, Y, Z)` Jacobian coordinates, big endian
pub type JacobianVector = ([u8; 32], [u8; 32], [u8; 32]);

/// Point doubling vector
pub struct DoubleVector {
    pub input: JacobianVector,
    pub output: JacobianVector,
    pub affine: ([u8; 32], [u8; 32]),
}

/// Point addition vector
pub struct AddVector {
    pub lhs: JacobianVector,
    pub rhs: JacobianVector,
    pub output: JacobianVector,
    pub affine: ([u8; 32], [u8; 32]),
}

/// `k × G` in affine coordinates
pub struct MulVector {
    pub k: [u8; 32],
    pub x: [u8; 32],
    pub y: [u8; 32],
}

/// `k × G` before lowering to affine coordinates
pub struct JacobianMulVector {
    pub k: [u8; 32],
    pub output: JacobianVector,
}

const ONE: [u8; 32] = hex!("0000000000000000000000000000000000000000000000000000000000000001");

const G: JacobianVector = (
    hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
    hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    ONE,
);

const G2: JacobianVector = (
    hex!("7d152c041ea8e1dc2191843d1fa9db55b68f88fef695e2c791d40444b365afc2"),
    hex!("56915849f52cc8f76f5fd7e4bf60db4a43bf633e1b1383f85fe89164bfadcbdb"),
    hex!("9075b4ee4d4788cabb49f7f81c221151fa2f68914d0aa833388fa11ff621a970"),
);

const G3: JacobianVector = (
    hex!("0ca90ef9b06d7eb51d650e9145e3083cbd8df8759168862036f97a358f089848"),
    hex!("bca50189fe8472aa2fb007567229f4d458149078094d7e7d35bb6c27e9a22b08"),
    hex!("6dbd0563f460dc5c401595f1492430343b7ac0165da116b7efa23994d564a085"),
);

const G4: JacobianVector = (
    hex!("9bae2d5bac61e6ea5de635bca754b2564b7d78c45277cad67e45c4cbbea6e706"),
    hex!("34fb8147eed1c0fbe29ead4d6c472eb4ef7b2191fde09e494b2a9845fe3f605e"),
    hex!("c327b5d2636b32f27b051e4742b1bbd5324432c1000bfedca4368a29f6654152"),
);

const G7: JacobianVector = (
    hex!("6317d4c999d0bc8a8a1e3bb4f60df92bd5db2d41216aa915d707ab58a37fb8c5"),
    hex!("59b2c83501729ce1405fc73a38f7a278f42493e114b0990b53bbe3ad40452aaf"),
    hex!("7a0214b67274371ef79ed07afdefb7e7125b86583acfe82d2739d73a3fdddadf"),
);

pub const DBL_TEST_VECTORS: &[DoubleVector] = &[
    DoubleVector {
        input: G,
        output: G2,
        affine: (
            hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
            hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
        ),
    },
    DoubleVector {
        input: G2,
        output: G4,
        affine: (
            hex!("e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13"),
            hex!("51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922"),
        ),
    },
];

pub const ADD_TEST_VECTORS: &[AddVector] = &[
    AddVector {
        lhs: G2,
        rhs: G,
        output: G3,
        affine: (
            hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
            hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
        ),
    },
    AddVector {
        lhs: G4,
        rhs: G3,
        output: G7,
        affine: (
            hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
            hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
        ),
    },
];

pub const MUL_TEST_VECTORS: &[MulVector] = &[
    MulVector {
        k: ONE,
        x: G.0,
        y: G.1,
    },
    MulVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000003"),
        x: hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        y: hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    },
    MulVector {
        k: hex!("aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522"),
        x: hex!("34f9460f0e4f08393d192b3c5133a6ba099aa0ad9fd54ebccfacdfa239ff49c6"),
        y: hex!("0b71ea9bd730fd8923f6d25a7a91e7dd7728a960686cb5a901bb419e0f2ca232"),
    },
    MulVector {
        // n - 1, i.e. -G
        k: hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        x: G.0,
        y: hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    },
    MulVector {
        k: hex!("8000000000000000000000000000000000000000000000000000000000003039"),
        x: hex!("cdd1c738e14ebf6ca7b7aa795f5852110cf730f6553d425bfe53f14132052f1e"),
        y: hex!("c6803f23a50c13736a3c2ee340813e02590d8614930fa18e6985b70994469c63"),
    },
];

pub const JACOBIAN_MUL_TEST_VECTORS: &[JacobianMulVector] = &[
    JacobianMulVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        output: (
            hex!("a730951385f1b50a67dbc4b609b25a3dd7e567279ded01675f17afad98237b7a"),
            hex!("d947909cc917f7602f701f85434da99cdc012146cb812041a8d78ec0d12809e4"),
            hex!("fb2e498e6fe1a16b7510b125c9a527554cdab84a9cb696e729cd32f46631edf9"),
        ),
    },
    JacobianMulVector {
        k: hex!("8000000000000000000000000000000000000000000000000000000000003039"),
        output: (
            hex!("68b3fc896eaeb0b10ee021b9341b5779a9a0a3dcbc196727a445c4878edfa240"),
            hex!("db4fd690ca1fab654b4701ccf71a0def51460aa5c7dac94aa24448891c21de0d"),
            hex!("19dc9e72aa8dab560e5b21c3976d07c172410c3afb94b81ea26fe2aaeaaad1a9"),
        ),
    },
];
