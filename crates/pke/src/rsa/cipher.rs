//! The RSA transform itself

use num_bigint::BigUint;
use trsa_algorithms::{mod_exp, to_core_result};

/// Encrypt a message integer: `C = M^e mod n`
///
/// The result lies in `[0, n)`. Fails only for a zero modulus.
pub fn encrypt(message: &BigUint, e: &BigUint, n: &BigUint) -> trsa_api::Result<BigUint> {
    to_core_result(mod_exp(message, e, n), "encrypt")
}

/// Decrypt a ciphertext integer: `M = C^d mod n`
///
/// Recovers the original message only if the key pair was generated from a
/// real prime pair and the message passed the size check before encryption.
pub fn decrypt(cipher: &BigUint, d: &BigUint, n: &BigUint) -> trsa_api::Result<BigUint> {
    to_core_result(mod_exp(cipher, d, n), "decrypt")
}
