//! Validation helpers that turn a failed condition into an [`Error`]

use super::types::{Error, Result};

/// Validate that a message's digit count stays strictly below the modulus'
#[inline(always)]
pub fn message_digits(message_digits: usize, modulus_digits: usize) -> Result<()> {
    if message_digits >= modulus_digits {
        return Err(Error::MessageTooLarge {
            message_digits,
            modulus_digits,
        });
    }
    Ok(())
}
