//! Public API traits and types for the trsa library
//!
//! This crate provides the public API surface shared by the trsa crates:
//! the top-level error type, the search limit configuration and the
//! strategy traits that key generation and message validation are built on.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SearchLimit;

pub use traits::{MessageBound, PrivateExponentSearch, PublicExponentSearch};

/// Arbitrary-precision natural number used throughout the API
pub use num_bigint::BigUint;
