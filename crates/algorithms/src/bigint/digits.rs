use num_bigint::BigUint;

/// Number of decimal digits of `value`
///
/// This is `floor(log10(value)) + 1` for positive values. Zero renders as
/// `"0"` and counts as one digit.
pub fn decimal_digits(value: &BigUint) -> usize {
    value.to_str_radix(10).len()
}
