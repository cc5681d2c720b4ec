//! Error type definitions for RSA operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for RSA operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division or modulo by zero, or a natural subtraction that underflowed
    Arithmetic {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// No exponent was found within the search bound, or the prime pair is degenerate
    KeyGeneration {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// The encoded message does not fit under the modulus
    MessageTooLarge {
        message_digits: usize,
        modulus_digits: usize,
    },

    /// Decrypted bytes could not be interpreted as text
    InvalidEncoding {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for RSA operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Arithmetic { .. } => Self::Arithmetic {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::KeyGeneration { .. } => Self::KeyGeneration {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::MessageTooLarge { message_digits, modulus_digits } => Self::MessageTooLarge {
                message_digits,
                modulus_digits,
            },
            Self::InvalidEncoding { .. } => Self::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::KeyGeneration { context, .. } => Self::KeyGeneration { context, message },
            Self::MessageTooLarge { message_digits, modulus_digits } => Self::MessageTooLarge {
                message_digits,
                modulus_digits,
            },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Whether the caller can recover by choosing larger primes or a shorter message
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MessageTooLarge { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::Arithmetic { context, message } => {
                write!(f, "Arithmetic error in {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::Arithmetic { context } => {
                write!(f, "Arithmetic error in {}", context)
            },
            #[cfg(feature = "std")]
            Self::KeyGeneration { context, message } => {
                write!(f, "Key generation failed in {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::KeyGeneration { context } => {
                write!(f, "Key generation failed in {}", context)
            },
            Self::MessageTooLarge { message_digits, modulus_digits } => {
                write!(f, "Message too large: {} digits against a modulus of {} digits (use larger primes or a shorter message)",
                    message_digits, modulus_digits)
            },
            #[cfg(feature = "std")]
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding in {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding in {}", context)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
        }
    }
}
