use num_traits::{Num, One};
use trsa::session::{self, SessionConfig, SessionError};
use trsa_algorithms::{decimal_digits, gcd, mod_exp};
use trsa_api::{BigUint, Error, SearchLimit};
use trsa_params::traditional::rsa::{SAMPLE_MESSAGE, TEXTBOOK_MESSAGE, TEXTBOOK_P, TEXTBOOK_Q};
use trsa_pke::{
    decrypt, encode_message, encrypt, generate_keys, validate, BoundPolicy, KeyGenConfig,
    LinearKeyGenerator, TextbookRsa,
};
use trsa_tests::vectors::{PRIME_VECTORS, SMALL_KEYS};
use trsa_tests::{random_text, seeded_rng};

fn big(v: u64) -> BigUint {
    BigUint::from(v)
}

#[test]
fn test_textbook_end_to_end() {
    let material = generate_keys(&big(TEXTBOOK_P), &big(TEXTBOOK_Q)).unwrap();
    assert_eq!(material.n(), &big(3233));
    assert_eq!(material.phi(), &big(3120));
    assert_eq!(material.e(), &big(7));

    let c = encrypt(&big(TEXTBOOK_MESSAGE), material.e(), material.n()).unwrap();
    assert_eq!(c, big(1317));
    assert_eq!(decrypt(&c, material.d(), material.n()).unwrap(), big(TEXTBOOK_MESSAGE));

    // The usual e = 17 textbook example
    assert_eq!(mod_exp(&big(65), &big(17), &big(3233)).unwrap(), big(2790));
}

#[test]
fn test_small_key_vectors() {
    for &(p, q, n, phi, e, d) in SMALL_KEYS {
        let material = generate_keys(&big(p), &big(q)).unwrap();
        assert_eq!(material.n(), &big(n), "n for ({}, {})", p, q);
        assert_eq!(material.phi(), &big(phi), "phi for ({}, {})", p, q);
        assert_eq!(material.e(), &big(e), "e for ({}, {})", p, q);
        assert_eq!(material.d(), &big(d), "d for ({}, {})", p, q);
    }
}

#[test]
fn test_every_message_below_small_moduli() {
    for &(p, q, n, _, e, d) in SMALL_KEYS {
        for m in 0..n {
            let c = encrypt(&big(m), &big(e), &big(n)).unwrap();
            assert_eq!(decrypt(&c, &big(d), &big(n)).unwrap(), big(m), "m = {} for ({}, {})", m, p, q);
        }
    }
}

#[test]
fn test_prime_vectors() {
    for vector in PRIME_VECTORS {
        let config = KeyGenConfig::from_decimal(vector.p, vector.q).unwrap();
        let material = LinearKeyGenerator::generate(&config).unwrap();

        assert_eq!(material.e(), &big(vector.e), "{}", vector.name);
        assert_eq!(decimal_digits(material.n()), vector.modulus_digits, "{}", vector.name);
        assert!(gcd(material.e(), material.phi()).is_one());
        assert!(((material.e() * material.d()) % material.phi()).is_one());

        let (public_key, private_key) = (material.public_key(), material.private_key());
        let c = TextbookRsa::encrypt_message(&public_key, SAMPLE_MESSAGE, &BoundPolicy::default()).unwrap();
        assert_eq!(TextbookRsa::decrypt_message(&private_key, &c).unwrap(), SAMPLE_MESSAGE);
    }
}

#[test]
fn test_seeded_random_messages() {
    let mut rng = seeded_rng(0x7273_61);
    let (public_key, private_key) = TextbookRsa::keypair(&KeyGenConfig::sample().unwrap()).unwrap();

    for _ in 0..64 {
        let text = random_text(&mut rng, 80);
        let c = TextbookRsa::encrypt_message(&public_key, &text, &BoundPolicy::DigitCount).unwrap();
        assert_eq!(TextbookRsa::decrypt_message(&private_key, &c).unwrap(), text);
    }
}

#[test]
fn test_validator_boundary_against_sample_modulus() {
    let material = LinearKeyGenerator::generate(&KeyGenConfig::sample().unwrap()).unwrap();
    let modulus_digits = decimal_digits(material.n());

    // 10^(k-1) has k digits
    let digits = |k: usize| {
        let mut s = String::from("1");
        s.push_str(&"0".repeat(k - 1));
        BigUint::from_str_radix(&s, 10).unwrap()
    };
    let fits = digits(modulus_digits - 1);
    let too_long = digits(modulus_digits);

    assert!(validate(&fits, material.n()).is_ok());
    assert_eq!(
        validate(&too_long, material.n()).unwrap_err(),
        Error::MessageTooLarge {
            message_digits: modulus_digits,
            modulus_digits,
        }
    );
}

#[test]
fn test_long_message_needs_larger_primes() {
    let long = SAMPLE_MESSAGE.repeat(3);
    assert!(decimal_digits(&encode_message(&long)) > 202);

    let sample = SessionConfig::sample().unwrap();
    let err = session::run(&sample, &long).unwrap_err();
    assert!(matches!(err, SessionError::Rsa(Error::MessageTooLarge { .. })));

    let large = PRIME_VECTORS[1];
    let config = SessionConfig::from_decimal(large.p, large.q).unwrap();
    let report = session::run(&config, &long).unwrap();
    assert_eq!(report.recovered, long);
}

#[test]
fn test_search_limit_and_degenerate_pairs() {
    let capped = KeyGenConfig::textbook().with_limit(SearchLimit::Candidates(1));
    assert!(matches!(
        LinearKeyGenerator::generate(&capped).unwrap_err(),
        Error::KeyGeneration { .. }
    ));

    assert!(matches!(generate_keys(&big(2), &big(3)).unwrap_err(), Error::KeyGeneration { .. }));
    assert!(matches!(generate_keys(&big(1), &big(7)).unwrap_err(), Error::KeyGeneration { .. }));
}

#[test]
fn test_zero_modulus_is_an_arithmetic_error() {
    assert!(matches!(encrypt(&big(1), &big(3), &big(0)).unwrap_err(), Error::Arithmetic { .. }));
}

#[test]
fn test_facade_prelude() {
    use trsa::prelude::*;

    let (public_key, private_key) = TextbookRsa::keypair(&KeyGenConfig::textbook()).unwrap();
    let c = TextbookRsa::encrypt_message(&public_key, "A", &BoundPolicy::Exact).unwrap();
    assert_eq!(TextbookRsa::decrypt_message(&private_key, &c).unwrap(), "A");
}
