//! Strategy traits for key derivation and message validation

pub mod bound;
pub mod search;

pub use bound::MessageBound;
pub use search::{PrivateExponentSearch, PublicExponentSearch};
