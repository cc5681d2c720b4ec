//! Validation utilities for arithmetic primitives

use super::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Validate that a divisor or modulus is not zero
#[inline(always)]
pub fn nonzero(value: &BigUint, operation: &'static str) -> Result<()> {
    if value.is_zero() {
        return Err(Error::Arithmetic {
            operation,
            reason: "division by zero",
        });
    }
    Ok(())
}

/// Validate that `minuend - subtrahend` stays within the naturals
#[inline(always)]
pub fn no_underflow(minuend: &BigUint, subtrahend: &BigUint, operation: &'static str) -> Result<()> {
    if subtrahend > minuend {
        return Err(Error::Arithmetic {
            operation,
            reason: "subtraction underflows the naturals",
        });
    }
    Ok(())
}
