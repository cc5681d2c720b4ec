//! Message size checks run before encryption
//!
//! [`DigitCountBound`] is the default: the message must have strictly fewer
//! decimal digits than the modulus. It is a loose, conservative stand-in for
//! `M < n`. [`ExactBound`] checks `M < n` itself; choosing it changes which
//! messages are accepted, so it is opt-in through [`BoundPolicy::Exact`].

use num_bigint::BigUint;
use trsa_algorithms::decimal_digits;
use trsa_api::error::validation;
use trsa_api::MessageBound;

use crate::error::validate as rsa_validate;

/// Rejects messages whose decimal digit count is not below the modulus'
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCountBound;

impl MessageBound for DigitCountBound {
    fn name(&self) -> &'static str {
        "digit-count"
    }

    fn check(&self, message: &BigUint, modulus: &BigUint) -> trsa_api::Result<()> {
        validation::message_digits(decimal_digits(message), decimal_digits(modulus))
    }
}

/// Rejects messages that are not strictly smaller than the modulus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactBound;

impl MessageBound for ExactBound {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn check(&self, message: &BigUint, modulus: &BigUint) -> trsa_api::Result<()> {
        rsa_validate::message_size(
            message < modulus,
            decimal_digits(message),
            decimal_digits(modulus),
        )?;
        Ok(())
    }
}

/// Which size check to run before encryption
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundPolicy {
    /// Digit-count comparison
    #[default]
    DigitCount,
    /// Exact `message < modulus` comparison
    Exact,
}

impl MessageBound for BoundPolicy {
    fn name(&self) -> &'static str {
        match self {
            BoundPolicy::DigitCount => DigitCountBound.name(),
            BoundPolicy::Exact => ExactBound.name(),
        }
    }

    fn check(&self, message: &BigUint, modulus: &BigUint) -> trsa_api::Result<()> {
        match self {
            BoundPolicy::DigitCount => DigitCountBound.check(message, modulus),
            BoundPolicy::Exact => ExactBound.check(message, modulus),
        }
    }
}

/// Check that `message` may be encrypted under modulus `n`
///
/// # Errors
/// Returns [`trsa_api::Error::MessageTooLarge`] when the message has at least
/// as many decimal digits as `n`.
pub fn validate(message: &BigUint, n: &BigUint) -> trsa_api::Result<()> {
    DigitCountBound.check(message, n)
}
