//! Arbitrary-precision arithmetic primitives for textbook RSA
//!
//! This crate provides the exact integer operations RSA key derivation and
//! encryption are built from: checked division and subtraction over the
//! naturals, Euclid's gcd, square-and-multiply modular exponentiation and a
//! decimal digit count. It also provides the bounded linear search both
//! exponent searches of key generation are expressed with.
//!
//! # Errors
//!
//! Every operation that has an undefined input (a zero divisor, a zero
//! modulus, a subtraction below zero) reports it as
//! [`Error::Arithmetic`] instead of panicking.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{to_core_result, validate, Error, Result};

// Arbitrary-precision integers
pub mod bigint;
pub use bigint::{
    add, decimal_digits, div, div_rem, gcd, mod_exp, mul, rem, sub, BigUint,
};

// Bounded "first candidate satisfying a predicate" scans
pub mod search;
pub use search::first_match;
