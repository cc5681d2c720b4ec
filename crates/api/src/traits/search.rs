//! Trait definitions for the exponent searches of key generation
//!
//! Key generation needs two "smallest integer satisfying a predicate"
//! searches: one for the public exponent `e`, one for the private exponent
//! `d`. Keeping them behind traits lets a faster algorithm replace the
//! linear scans without touching callers of the key generator.

use crate::{BigUint, Result, SearchLimit};

/// Selects the public exponent `e` for a given totient.
pub trait PublicExponentSearch {
    /// Returns the strategy name.
    fn name() -> &'static str;

    /// Finds `e` such that `gcd(e, phi) == 1`.
    ///
    /// # Errors
    /// Returns [`crate::Error::KeyGeneration`] when no candidate satisfies the
    /// predicate within `limit`.
    fn public_exponent(phi: &BigUint, limit: SearchLimit) -> Result<BigUint>;
}

/// Selects the private exponent `d` for a given totient and public exponent.
pub trait PrivateExponentSearch {
    /// Returns the strategy name.
    fn name() -> &'static str;

    /// Finds `d` completing the private key for `(phi, e)`.
    ///
    /// # Errors
    /// Returns [`crate::Error::KeyGeneration`] when no candidate satisfies the
    /// predicate within `limit`, or [`crate::Error::Arithmetic`] for a zero `e`.
    fn private_exponent(phi: &BigUint, e: &BigUint, limit: SearchLimit) -> Result<BigUint>;
}
