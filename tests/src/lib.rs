//! Shared fixtures for the trsa integration tests
pub mod vectors;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use trsa_api::BigUint;

/// Seeded generator so failures reproduce
pub fn seeded_rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Random integer of at most `bytes` bytes
pub fn random_biguint(rng: &mut ChaChaRng, bytes: usize) -> BigUint {
    let mut buf = vec![0u8; bytes];
    rng.fill_bytes(&mut buf);
    BigUint::from_bytes_le(&buf)
}

/// Random printable ASCII text of `1..=max_len` characters
pub fn random_text(rng: &mut ChaChaRng, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| rng.gen_range(b' '..=b'~') as char).collect()
}
