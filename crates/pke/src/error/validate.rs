//! Validation utilities for textbook RSA operations

use super::{Error, Result};

/// Validate key pair generation parameters
pub fn key_generation(condition: bool, stage: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::KeyGeneration { stage, details });
    }
    Ok(())
}

/// Validate that a message integer fits under the modulus
pub fn message_size(fits: bool, message_digits: usize, modulus_digits: usize) -> Result<()> {
    if !fits {
        return Err(Error::MessageTooLarge { message_digits, modulus_digits });
    }
    Ok(())
}

// Re-export primitive validations for convenience
pub use trsa_algorithms::validate::nonzero;
