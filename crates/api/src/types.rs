//! Configuration types shared by the key generation strategies

/// Upper bound applied to the exponent searches
///
/// Both exponent searches scan candidates upward one at a time. `Totient`
/// keeps the natural bound (every candidate below φ); `Candidates` also
/// stops after the given number of candidates has been examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchLimit {
    /// Scan every candidate below φ
    #[default]
    Totient,
    /// Scan at most this many candidates, and never past φ
    Candidates(u64),
}

impl SearchLimit {
    /// Maximum number of candidates to examine, if capped
    pub fn max_candidates(&self) -> Option<u64> {
        match self {
            SearchLimit::Totient => None,
            SearchLimit::Candidates(k) => Some(*k),
        }
    }
}
