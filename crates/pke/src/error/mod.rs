//! Error handling for textbook RSA operations.

use core::fmt;
use trsa_algorithms::Error as PrimitiveError;
use trsa_api::error::Error as CoreError;

/// Error type for textbook RSA operations.
///
/// Public functions of this crate return [`trsa_api::Result`]; this type is
/// what they raise internally, and `?` converts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure in an arithmetic primitive
    Primitive(PrimitiveError),

    /// No exponent found within the search bound, or a degenerate prime pair
    KeyGeneration {
        stage: &'static str,
        details: &'static str,
    },

    /// The message integer does not fit under the modulus
    MessageTooLarge {
        message_digits: usize,
        modulus_digits: usize,
    },

    /// Bytes recovered from an integer are not valid text
    InvalidEncoding(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "RSA primitive error: {}", e),
            Error::KeyGeneration { stage, details } => {
                write!(f, "RSA key generation failed in {}: {}", stage, details)
            },
            Error::MessageTooLarge { message_digits, modulus_digits } => {
                write!(f, "RSA message too large: {} digits, modulus has {}", message_digits, modulus_digits)
            },
            Error::InvalidEncoding(reason) => write!(f, "RSA message encoding error: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

// Conversion from RSA Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGeneration { stage, details } => {
                #[cfg(not(feature = "std"))]
                let _ = details;

                CoreError::KeyGeneration {
                    context: stage,
                    #[cfg(feature = "std")]
                    message: details.to_string(),
                }
            },
            Error::MessageTooLarge { message_digits, modulus_digits } => CoreError::MessageTooLarge {
                message_digits,
                modulus_digits,
            },
            Error::InvalidEncoding(reason) => {
                #[cfg(not(feature = "std"))]
                let _ = reason;

                CoreError::InvalidEncoding {
                    context: "message codec",
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
        }
    }
}

/// Result type for textbook RSA operations.
pub type Result<T> = core::result::Result<T, Error>;

// Include validation submodule
pub mod validate;
