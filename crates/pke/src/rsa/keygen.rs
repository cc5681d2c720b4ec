//! Key derivation from a supplied prime pair
//!
//! `n = p * q` and `phi = (p - 1)(q - 1)` are plain arithmetic. The two
//! exponents come from linear searches:
//!
//! - `e` is the first `i` in `[2, phi)` with `gcd(phi, i) == 1`.
//! - `d` is `(phi * i + 1) / e` for the first `i` in `[1, phi)` that makes the
//!   division exact.
//!
//! Both searches sit behind [`PublicExponentSearch`] and
//! [`PrivateExponentSearch`], so [`KeyGenerator`] can be instantiated with a
//! different strategy without its callers changing.

use core::fmt;
use core::marker::PhantomData;

use num_bigint::BigUint;
use num_traits::{Num, One, Zero};
use trsa_algorithms::{add, div_rem, first_match, gcd, mul, sub};
use trsa_api::error::ResultExt;
use trsa_api::{PrivateExponentSearch, PublicExponentSearch, SearchLimit};
use trsa_params::traditional::rsa::{
    PRIVATE_MULTIPLIER_START, PUBLIC_EXPONENT_START, SAMPLE_P, SAMPLE_Q, SAMPLE_RADIX, TEXTBOOK_P,
    TEXTBOOK_Q,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keys::{RsaPrivateKey, RsaPublicKey};
use crate::error::{validate, Error, Result};

/// Input of key generation: the prime pair and the search limit
///
/// `p` and `q` are assumed, not verified, to be distinct primes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyGenConfig {
    p: BigUint,
    q: BigUint,
    #[zeroize(skip)]
    limit: SearchLimit,
}

impl KeyGenConfig {
    /// Create a configuration for the prime pair `(p, q)`
    pub fn new(p: BigUint, q: BigUint) -> Self {
        Self {
            p,
            q,
            limit: SearchLimit::default(),
        }
    }

    /// Parse the prime pair from decimal strings
    pub fn from_decimal(p: &str, q: &str) -> trsa_api::Result<Self> {
        let parse = |s: &str| {
            BigUint::from_str_radix(s.trim(), SAMPLE_RADIX).wrap_err(|| trsa_api::Error::InvalidParameter {
                context: "prime pair",
                #[cfg(feature = "std")]
                message: "primes must be decimal integers".into(),
            })
        };

        Ok(Self::new(parse(p)?, parse(q)?))
    }

    /// The 61 / 53 pair used in textbook examples
    pub fn textbook() -> Self {
        Self::new(BigUint::from(TEXTBOOK_P), BigUint::from(TEXTBOOK_Q))
    }

    /// The default 101-digit sample pair
    pub fn sample() -> trsa_api::Result<Self> {
        Self::from_decimal(SAMPLE_P, SAMPLE_Q)
    }

    /// Replace the search limit
    pub fn with_limit(mut self, limit: SearchLimit) -> Self {
        self.set_limit(limit);
        self
    }

    /// Replace the search limit in place
    pub fn set_limit(&mut self, limit: SearchLimit) {
        self.limit = limit;
    }

    /// First prime
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Second prime
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Search limit applied to both exponent searches
    pub fn limit(&self) -> SearchLimit {
        self.limit
    }
}

impl fmt::Debug for KeyGenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyGenConfig")
            .field("p", &"<redacted>")
            .field("q", &"<redacted>")
            .field("limit", &self.limit)
            .finish()
    }
}

/// Everything key generation derives: `(n, phi, e, d)`
///
/// `phi` stays here and is never part of either published key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    n: BigUint,
    phi: BigUint,
    e: BigUint,
    d: BigUint,
}

impl KeyMaterial {
    /// Modulus `n = p * q`
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Totient `phi = (p - 1)(q - 1)`
    pub fn phi(&self) -> &BigUint {
        &self.phi
    }

    /// Public exponent
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Private exponent
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Public key `(e, n)`
    pub fn public_key(&self) -> RsaPublicKey {
        RsaPublicKey::new(self.e.clone(), self.n.clone())
    }

    /// Private key `(d, n)`
    pub fn private_key(&self) -> RsaPrivateKey {
        RsaPrivateKey::new(self.d.clone(), self.n.clone())
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("n", &self.n)
            .field("phi", &"<redacted>")
            .field("e", &self.e)
            .field("d", &"<redacted>")
            .finish()
    }
}

/// Public exponent search: smallest `i >= 2` coprime to `phi`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearPublicExponent;

impl PublicExponentSearch for LinearPublicExponent {
    fn name() -> &'static str {
        "linear-coprime"
    }

    fn public_exponent(phi: &BigUint, limit: SearchLimit) -> trsa_api::Result<BigUint> {
        let start = BigUint::from(PUBLIC_EXPONENT_START);

        let hit = first_match(&start, phi, limit.max_candidates(), |i| {
            Ok(gcd(phi, i).is_one().then_some(()))
        })?;

        let (e, ()) = hit.ok_or(Error::KeyGeneration {
            stage: "public exponent",
            details: "no candidate below phi is coprime to phi",
        })?;

        Ok(e)
    }
}

/// Private exponent search: `(phi * i + 1) / e` for the smallest exact `i >= 1`
///
/// This is not the extended-Euclid inverse, although for `gcd(e, phi) == 1`
/// the first hit has `i < e` and gives the same `d`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearPrivateExponent;

impl PrivateExponentSearch for LinearPrivateExponent {
    fn name() -> &'static str {
        "linear-multiplier"
    }

    fn private_exponent(phi: &BigUint, e: &BigUint, limit: SearchLimit) -> trsa_api::Result<BigUint> {
        validate::nonzero(e, "private exponent")?;

        let one = BigUint::one();
        let start = BigUint::from(PRIVATE_MULTIPLIER_START);

        let hit = first_match(&start, phi, limit.max_candidates(), |i| {
            let t = add(&mul(phi, i), &one);
            let (d, r) = div_rem(&t, e)?;
            Ok(r.is_zero().then_some(d))
        })?;

        let (_, d) = hit.ok_or(Error::KeyGeneration {
            stage: "private exponent",
            details: "no multiplier below phi makes (phi * i + 1) divisible by e",
        })?;

        Ok(d)
    }
}

/// Derives [`KeyMaterial`] with pluggable exponent searches
pub struct KeyGenerator<E, D> {
    _marker: PhantomData<(E, D)>,
}

/// The key generator with the reference linear searches
pub type LinearKeyGenerator = KeyGenerator<LinearPublicExponent, LinearPrivateExponent>;

impl<E, D> KeyGenerator<E, D>
where
    E: PublicExponentSearch,
    D: PrivateExponentSearch,
{
    /// Returns the combined strategy names, public search first.
    pub fn strategy() -> (&'static str, &'static str) {
        (E::name(), D::name())
    }

    /// Derive `(n, phi, e, d)` from the configured prime pair.
    ///
    /// # Errors
    /// Returns [`trsa_api::Error::KeyGeneration`] if either prime is below 2
    /// or either search finds no candidate within its bound.
    pub fn generate(config: &KeyGenConfig) -> trsa_api::Result<KeyMaterial> {
        let (n, phi) = modulus_and_totient(&config.p, &config.q)?;

        let e = E::public_exponent(&phi, config.limit)?;
        let d = D::private_exponent(&phi, &e, config.limit)?;

        Ok(KeyMaterial { n, phi, e, d })
    }
}

/// `n = p * q` and `phi = (p - 1)(q - 1)` for a non-degenerate prime pair
pub(crate) fn modulus_and_totient(p: &BigUint, q: &BigUint) -> Result<(BigUint, BigUint)> {
    let two = BigUint::from(2u32);
    validate::key_generation(p >= &two && q >= &two, "prime pair", "p and q must both be at least 2")?;

    let one = BigUint::one();
    let n = mul(p, q);
    let phi = mul(&sub(p, &one)?, &sub(q, &one)?);

    Ok((n, phi))
}

/// Derive `(n, phi, e, d)` from `(p, q)` with the linear searches and no extra limit
pub fn generate_keys(p: &BigUint, q: &BigUint) -> trsa_api::Result<KeyMaterial> {
    LinearKeyGenerator::generate(&KeyGenConfig::new(p.clone(), q.clone()))
}
