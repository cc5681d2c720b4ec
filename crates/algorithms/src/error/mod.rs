//! Error handling for arithmetic primitives

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use trsa_api::{Error as CoreError, Result as CoreResult};

/// The error type for arithmetic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operation was given an input it is undefined for
    Arithmetic {
        /// Operation that failed
        operation: &'static str,
        /// Why the input is undefined for it
        reason: &'static str,
    },
}

/// Result type for arithmetic primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic { operation, reason } => {
                write!(f, "Arithmetic error in {}: {}", operation, reason)
            },
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Arithmetic { operation, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;

                CoreError::Arithmetic {
                    context: operation,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| {
        #[cfg(feature = "std")]
        {
            let message = e.to_string();
            CoreError::from(e).with_context(ctx).with_message(message)
        }
        #[cfg(not(feature = "std"))]
        {
            CoreError::from(e).with_context(ctx)
        }
    })
}

// Include the validation submodule
pub mod validate;
