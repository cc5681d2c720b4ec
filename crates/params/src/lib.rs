//! Constant values for the trsa library
//!
//! Sample inputs live here so that the arithmetic and key generation crates
//! never embed them: callers pass them in explicitly.

#![no_std]

pub mod traditional;
