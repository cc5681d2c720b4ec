//! One complete encrypt/decrypt session
//!
//! [`run`] derives the keys for the configured prime pair, encodes and
//! checks the message, encrypts it, decrypts the ciphertext and decodes
//! the result. The `trsa` binary only prints the [`SessionReport`].

use thiserror::Error;

use crate::api::{BigUint, MessageBound, SearchLimit};
use crate::params::traditional::rsa::SAMPLE_MESSAGE;
use crate::pke::{encode_message, BoundPolicy, KeyGenConfig, LinearKeyGenerator, RsaPrivateKey, RsaPublicKey, TextbookRsa};

/// Errors raised by a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// Key generation, size check or cipher failure
    #[error(transparent)]
    Rsa(#[from] crate::api::Error),

    /// Wrong number of command line arguments
    #[error("usage: trsa [MESSAGE] [P Q]: {0}")]
    Usage(&'static str),

    /// Decrypted text differs from the input
    #[error("round trip mismatch - encrypted: {expected:?}, recovered: {actual:?}")]
    Mismatch { expected: String, actual: String },
}

/// Result type for sessions
pub type Result<T> = std::result::Result<T, SessionError>;

/// Prime pair, search limit and message bound for a session
#[derive(Clone, Debug)]
pub struct SessionConfig {
    keygen: KeyGenConfig,
    bound: BoundPolicy,
}

impl SessionConfig {
    /// Session over `keygen` with the default digit-count bound
    pub fn new(keygen: KeyGenConfig) -> Self {
        Self {
            keygen,
            bound: BoundPolicy::default(),
        }
    }

    /// The 101-digit sample primes with the digit-count bound
    pub fn sample() -> Result<Self> {
        Ok(Self::new(KeyGenConfig::sample()?))
    }

    /// Session over a prime pair given as decimal strings
    pub fn from_decimal(p: &str, q: &str) -> Result<Self> {
        Ok(Self::new(KeyGenConfig::from_decimal(p, q)?))
    }

    /// Replace the search limit of both exponent searches
    pub fn with_limit(mut self, limit: SearchLimit) -> Self {
        self.keygen.set_limit(limit);
        self
    }

    /// Replace the message bound
    pub fn with_bound(mut self, bound: BoundPolicy) -> Self {
        self.bound = bound;
        self
    }

    /// Key generation input
    pub fn keygen(&self) -> &KeyGenConfig {
        &self.keygen
    }

    /// Message bound checked before encryption
    pub fn bound(&self) -> BoundPolicy {
        self.bound
    }
}

/// Everything a session produced
#[derive(Debug)]
pub struct SessionReport {
    /// Input text
    pub plaintext: String,
    /// Encoded message integer
    pub message: BigUint,
    /// Public key `(e, n)`
    pub public_key: RsaPublicKey,
    /// Private key `(d, n)`
    pub private_key: RsaPrivateKey,
    /// `message^e mod n`
    pub ciphertext: BigUint,
    /// Text decoded from the decrypted ciphertext
    pub recovered: String,
    /// Public and private exponent search names
    pub strategy: (&'static str, &'static str),
    /// Name of the message bound that was checked
    pub bound: &'static str,
}

/// Parse `[MESSAGE] [P Q]` into a configuration and a message.
///
/// Missing values fall back to the sample message and sample primes.
pub fn parse_args<I>(args: I) -> Result<(SessionConfig, String)>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    match args.as_slice() {
        [] => Ok((SessionConfig::sample()?, SAMPLE_MESSAGE.to_string())),
        [message] => Ok((SessionConfig::sample()?, message.clone())),
        [message, p, q] => Ok((SessionConfig::from_decimal(p, q)?, message.clone())),
        [_, _] => Err(SessionError::Usage("both primes are required")),
        _ => Err(SessionError::Usage("too many arguments")),
    }
}

/// Run key generation, encryption and decryption for `plaintext`.
///
/// # Errors
/// Fails if key generation fails, if the message does not fit the
/// configured bound, or if the recovered text differs from `plaintext`
/// (trailing NUL characters do not survive the integer encoding).
pub fn run(config: &SessionConfig, plaintext: &str) -> Result<SessionReport> {
    let (public_key, private_key) = TextbookRsa::keypair(&config.keygen)?;

    let message = encode_message(plaintext);
    let ciphertext = TextbookRsa::encrypt_message(&public_key, plaintext, &config.bound)?;
    let recovered = TextbookRsa::decrypt_message(&private_key, &ciphertext)?;

    if recovered != plaintext {
        return Err(SessionError::Mismatch {
            expected: plaintext.to_string(),
            actual: recovered,
        });
    }

    Ok(SessionReport {
        plaintext: plaintext.to_string(),
        message,
        public_key,
        private_key,
        ciphertext,
        recovered,
        strategy: LinearKeyGenerator::strategy(),
        bound: config.bound.name(),
    })
}
