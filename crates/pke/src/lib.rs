//! Public Key Encryption (PKE) schemes for the trsa library.
//!
//! Currently this is textbook RSA: keys derived from a supplied prime pair,
//! no padding, message integers obtained from little-endian text bytes.
#![cfg_attr(not(feature = "std"), no_std)]

// Vec and String come from alloc in every configuration; BigUint needs it anyway.
extern crate alloc;

pub mod error;
pub mod rsa;

// Re-export key items
pub use error::{Error, Result};
pub use rsa::{
    decode_bytes, decode_message, decrypt, encode_bytes, encode_message, encrypt, generate_keys,
    validate, BoundPolicy, DigitCountBound, ExactBound, KeyGenConfig, KeyGenerator, KeyMaterial,
    LinearKeyGenerator, LinearPrivateExponent, LinearPublicExponent, RsaPrivateKey,
    RsaPublicKey, TextbookRsa,
};
