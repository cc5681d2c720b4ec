//! Number-theoretic operations: gcd and modular exponentiation

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{validate, Result};

/// Compute the greatest common divisor of two numbers
///
/// Euclid's algorithm: `gcd(a, 0) = a`, `gcd(a, b) = gcd(b, a mod b)`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Perform modular exponentiation (base^exponent mod modulus)
///
/// Implements the square-and-multiply algorithm, so the cost grows with the
/// bit length of the exponent rather than its value.
pub fn mod_exp(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    validate::nonzero(modulus, "mod_exp")?;

    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;

    // Least significant bit first
    for byte in exponent.to_bytes_le() {
        for bit in 0..8 {
            if (byte >> bit) & 1 == 1 {
                result = (&result * &base) % modulus;
            }

            base = (&base * &base) % modulus;
        }
    }

    Ok(result)
}
