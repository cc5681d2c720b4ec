//! RSA key types

use core::fmt;

use alloc::vec::Vec;
use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::cipher;

/// Public key `(e, n)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaPublicKey {
    e: BigUint,
    n: BigUint,
}

impl RsaPublicKey {
    /// Create a public key from its exponent and modulus
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    /// Public exponent `e`
    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    /// Modulus `n`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// Encrypt an already validated message integer
    pub fn encrypt(&self, message: &BigUint) -> trsa_api::Result<BigUint> {
        cipher::encrypt(message, &self.e, &self.n)
    }
}

/// Private key `(d, n)`, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaPrivateKey {
    d: BigUint,
    n: BigUint,
}

impl RsaPrivateKey {
    /// Create a private key from its exponent and modulus
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    /// Private exponent `d`
    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    /// Modulus `n`
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// Decrypt a ciphertext integer
    pub fn decrypt(&self, cipher: &BigUint) -> trsa_api::Result<BigUint> {
        cipher::decrypt(cipher, &self.d, &self.n)
    }
}

fn secret_bytes(value: &BigUint) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(value.to_bytes_le())
}

impl ConstantTimeEq for RsaPrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let d = secret_bytes(&self.d);
        let other_d = secret_bytes(&other.d);
        let n = self.n.to_bytes_le();
        let other_n = other.n.to_bytes_le();

        d.as_slice().ct_eq(other_d.as_slice()) & n.as_slice().ct_eq(other_n.as_slice())
    }
}

impl PartialEq for RsaPrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for RsaPrivateKey {}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("d", &"<redacted>")
            .field("n", &self.n)
            .finish()
    }
}
