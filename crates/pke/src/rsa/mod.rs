//! Textbook RSA
//!
//! The pipeline is: derive `(n, phi, e, d)` from a prime pair with the
//! [`keygen`] searches, encode text as an integer with [`codec`], check it
//! against the modulus with a [`bound`], then transform it with [`cipher`].
//! [`TextbookRsa`] runs the encode/check/encrypt and decrypt/decode halves
//! in order so an unchecked integer never reaches the cipher.

pub mod bound;
pub mod cipher;
pub mod codec;
pub mod keygen;
mod keys;
mod scheme;

pub use bound::{validate, BoundPolicy, DigitCountBound, ExactBound};
pub use cipher::{decrypt, encrypt};
pub use codec::{decode_bytes, decode_message, encode_bytes, encode_message};
pub use keygen::{
    generate_keys, KeyGenConfig, KeyGenerator, KeyMaterial, LinearKeyGenerator,
    LinearPrivateExponent, LinearPublicExponent,
};
pub use keys::{RsaPrivateKey, RsaPublicKey};
pub use scheme::TextbookRsa;
