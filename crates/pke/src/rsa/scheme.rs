//! Text-level textbook RSA

use alloc::string::String;

use num_bigint::BigUint;
use trsa_api::MessageBound;

use super::codec::{decode_message, encode_message};
use super::keygen::{KeyGenConfig, LinearKeyGenerator};
use super::keys::{RsaPrivateKey, RsaPublicKey};

/// Textbook RSA over text messages
///
/// No padding: equal messages encrypt to equal ciphertexts.
pub struct TextbookRsa;

impl TextbookRsa {
    /// Returns the scheme name.
    pub fn name() -> &'static str {
        "Textbook-RSA"
    }

    /// Generates the key pair for the configured primes.
    pub fn keypair(config: &KeyGenConfig) -> trsa_api::Result<(RsaPublicKey, RsaPrivateKey)> {
        let material = LinearKeyGenerator::generate(config)?;
        Ok((material.public_key(), material.private_key()))
    }

    /// Encodes `plaintext`, checks it with `bound`, then encrypts it.
    ///
    /// Nothing is encrypted if the check fails.
    pub fn encrypt_message<B>(
        public_key: &RsaPublicKey,
        plaintext: &str,
        bound: &B,
    ) -> trsa_api::Result<BigUint>
    where
        B: MessageBound + ?Sized,
    {
        let message = encode_message(plaintext);
        bound.check(&message, public_key.modulus())?;
        public_key.encrypt(&message)
    }

    /// Decrypts `ciphertext` and decodes the result as text.
    pub fn decrypt_message(
        private_key: &RsaPrivateKey,
        ciphertext: &BigUint,
    ) -> trsa_api::Result<String> {
        let message = private_key.decrypt(ciphertext)?;
        decode_message(&message)
    }
}
