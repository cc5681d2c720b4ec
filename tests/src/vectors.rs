//! Known key derivations for small and sample prime pairs

use trsa_params::traditional::rsa::{LARGE_P, LARGE_Q, SAMPLE_P, SAMPLE_Q};

/// `(p, q, n, phi, e, d)` for small prime pairs
pub const SMALL_KEYS: &[(u64, u64, u64, u64, u64, u64)] = &[
    (2, 5, 10, 4, 3, 3),
    (3, 5, 15, 8, 3, 3),
    (3, 7, 21, 12, 5, 5),
    (5, 7, 35, 24, 5, 5),
    (11, 13, 143, 120, 7, 103),
    (61, 53, 3233, 3120, 7, 1783),
];

/// A decimal prime pair with the expected public exponent and modulus length
#[derive(Debug, Clone, Copy)]
pub struct PrimeVector {
    pub name: &'static str,
    pub p: &'static str,
    pub q: &'static str,
    pub e: u64,
    pub modulus_digits: usize,
}

pub const PRIME_VECTORS: &[PrimeVector] = &[
    PrimeVector {
        name: "sample",
        p: SAMPLE_P,
        q: SAMPLE_Q,
        e: 3,
        modulus_digits: 202,
    },
    PrimeVector {
        name: "large",
        p: LARGE_P,
        q: LARGE_Q,
        e: 11,
        modulus_digits: 500,
    },
];
