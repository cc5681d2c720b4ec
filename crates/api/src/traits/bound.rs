//! Trait definition for the message size check run before encryption

use crate::{BigUint, Result};

/// Decides whether an encoded message may be encrypted under a modulus.
///
/// Implementations must reject with [`crate::Error::MessageTooLarge`] and
/// must not touch the cipher; callers only encrypt after `check` succeeds.
pub trait MessageBound {
    /// Returns the policy name.
    fn name(&self) -> &'static str;

    /// Checks `message` against `modulus`.
    fn check(&self, message: &BigUint, modulus: &BigUint) -> Result<()>;
}
