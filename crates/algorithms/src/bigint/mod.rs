//! Exact arithmetic over arbitrary-precision natural numbers
//!
//! [`BigUint`] from `num-bigint` is the integer type. The functions here wrap
//! the operations RSA needs so that every undefined input surfaces as an
//! [`Error`](crate::Error) and so that modular exponentiation is the explicit
//! square-and-multiply loop rather than a library black box.

mod arith;
mod digits;
mod modular;

pub use num_bigint::BigUint;

pub use arith::{add, div, div_rem, mul, rem, sub};
pub use digits::decimal_digits;
pub use modular::{gcd, mod_exp};
