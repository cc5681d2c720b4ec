//! Checked ring operations on naturals

use num_bigint::BigUint;
use num_integer::Integer;

use crate::error::{validate, Result};

/// Compute `a + b`
pub fn add(a: &BigUint, b: &BigUint) -> BigUint {
    a + b
}

/// Compute `a - b`, failing if `b > a`
pub fn sub(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    validate::no_underflow(a, b, "sub")?;
    Ok(a - b)
}

/// Compute `a * b`
pub fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    a * b
}

/// Truncating division `a / b`
pub fn div(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    validate::nonzero(b, "div")?;
    Ok(a / b)
}

/// Remainder `a mod b`
pub fn rem(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    validate::nonzero(b, "rem")?;
    Ok(a % b)
}

/// Quotient and remainder in one pass
pub fn div_rem(a: &BigUint, b: &BigUint) -> Result<(BigUint, BigUint)> {
    validate::nonzero(b, "div_rem")?;
    Ok(a.div_rem(b))
}
