//! Bounded linear search over consecutive naturals
//!
//! Both exponent searches of key generation have the same shape: starting at
//! some candidate, step upward by one and stop at the first candidate a
//! predicate accepts. [`first_match`] is that loop, with an exclusive upper
//! bound and an optional cap on the number of candidates examined.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::Result;

/// Scan `start, start + 1, ...` strictly below `end` for the first accepted candidate
///
/// `predicate` returns `Ok(Some(value))` to accept a candidate, `Ok(None)` to
/// move on, or an error to abort the scan. On success the accepted candidate
/// is returned together with the value the predicate produced for it.
///
/// Returns `Ok(None)` when the range is exhausted, or when `max_candidates`
/// candidates have been rejected.
pub fn first_match<T, F>(
    start: &BigUint,
    end: &BigUint,
    max_candidates: Option<u64>,
    mut predicate: F,
) -> Result<Option<(BigUint, T)>>
where
    F: FnMut(&BigUint) -> Result<Option<T>>,
{
    let one = BigUint::one();
    let mut candidate = start.clone();
    let mut examined: u64 = 0;

    while &candidate < end {
        if max_candidates.is_some_and(|max| examined >= max) {
            return Ok(None);
        }

        if let Some(value) = predicate(&candidate)? {
            return Ok(Some((candidate, value)));
        }

        candidate += &one;
        examined += 1;
    }

    Ok(None)
}
