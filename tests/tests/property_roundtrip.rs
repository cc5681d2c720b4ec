//! Property-based tests for the textbook RSA pipeline

use num_traits::{One, Zero};
use proptest::prelude::*;
use trsa_algorithms::{gcd, mod_exp};
use trsa_api::BigUint;
use trsa_pke::{decode_message, encode_message, generate_keys, KeyGenConfig, TextbookRsa};
use trsa_tests::vectors::SMALL_KEYS;

/// Printable ASCII text that fits under the 202-digit sample modulus
fn sample_text() -> impl Strategy<Value = String> {
    "[ -~]{0,80}"
}

/// Text without a trailing NUL, which the integer encoding drops
fn codec_text() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("no trailing NUL", |s| !s.ends_with('\0'))
}

proptest! {
    #[test]
    fn codec_roundtrip(text in codec_text()) {
        prop_assert_eq!(decode_message(&encode_message(&text)).unwrap(), text);
    }

    #[test]
    fn gcd_is_symmetric(a in any::<u64>(), b in any::<u64>()) {
        let (a, b) = (BigUint::from(a), BigUint::from(b));
        prop_assert_eq!(gcd(&a, &b), gcd(&b, &a));
        prop_assert_eq!(gcd(&a, &BigUint::zero()), a.clone());

        let g = gcd(&a, &b);
        if !g.is_zero() {
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
        }
    }

    #[test]
    fn mod_exp_matches_modpow(base in any::<u64>(), exponent in 1u32.., modulus in 2u64..) {
        let (base, exponent, modulus) = (BigUint::from(base), BigUint::from(exponent), BigUint::from(modulus));
        prop_assert_eq!(mod_exp(&base, &exponent, &modulus).unwrap(), base.modpow(&exponent, &modulus));
    }

    #[test]
    fn small_key_roundtrip(index in 0..SMALL_KEYS.len(), m in any::<u64>()) {
        let (p, q, ..) = SMALL_KEYS[index];
        let material = generate_keys(&BigUint::from(p), &BigUint::from(q)).unwrap();
        let m = BigUint::from(m) % material.n();

        let c = material.public_key().encrypt(&m).unwrap();
        prop_assert_eq!(material.private_key().decrypt(&c).unwrap(), m);
        prop_assert!(((material.e() * material.d()) % material.phi()).is_one());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sample_message_roundtrip(text in sample_text()) {
        let (public_key, private_key) = TextbookRsa::keypair(&KeyGenConfig::sample().unwrap()).unwrap();
        let c = TextbookRsa::encrypt_message(&public_key, &text, &trsa_pke::BoundPolicy::DigitCount).unwrap();
        prop_assert_eq!(TextbookRsa::decrypt_message(&private_key, &c).unwrap(), text);
    }
}
