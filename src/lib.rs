//! # trsa
//!
//! A didactic textbook RSA library: key derivation from a supplied prime
//! pair, text to integer encoding, and encryption by modular
//! exponentiation. There is no padding and no prime generation; it is
//! not meant to protect real data.
//!
//! ## Usage
//!
//! ```rust
//! use trsa::prelude::*;
//!
//! let (public_key, private_key) = TextbookRsa::keypair(&KeyGenConfig::sample()?)?;
//! let ciphertext = TextbookRsa::encrypt_message(&public_key, "attack at dawn", &BoundPolicy::default())?;
//! assert_eq!(TextbookRsa::decrypt_message(&private_key, &ciphertext)?, "attack at dawn");
//! # Ok::<(), trsa::api::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`trsa-api`]: Error type, search limits and strategy traits
//! - [`trsa-algorithms`]: Big integer arithmetic, gcd and modular exponentiation
//! - [`trsa-params`]: Sample primes and messages
//! - [`trsa-pke`]: Key generation, message codec, validator and cipher
//!
//! The [`session`] module runs the whole pipeline once and is what the
//! `trsa` binary prints.

#![cfg_attr(not(feature = "std"), no_std)]

pub use trsa_algorithms as algorithms;
pub use trsa_api as api;
pub use trsa_params as params;
pub use trsa_pke as pke;

#[cfg(feature = "std")]
pub mod session;

/// Common imports for trsa users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Configuration and strategy traits
    pub use crate::api::{MessageBound, PrivateExponentSearch, PublicExponentSearch, SearchLimit};

    // Scheme, keys and key generation
    pub use crate::pke::{
        BoundPolicy, KeyGenConfig, KeyMaterial, LinearKeyGenerator, RsaPrivateKey, RsaPublicKey,
        TextbookRsa,
    };

    pub use crate::api::BigUint;
}
