//! Sample inputs for textbook RSA
//!
//! Large values are kept as decimal strings; they are parsed into
//! arbitrary-precision integers by the caller.

/// Textbook example prime `p`
pub const TEXTBOOK_P: u64 = 61;

/// Textbook example prime `q`
pub const TEXTBOOK_Q: u64 = 53;

/// Textbook example message integer
pub const TEXTBOOK_MESSAGE: u64 = 65;

/// Default sample prime `p` (101 decimal digits)
pub const SAMPLE_P: &str = "57140694569194923997089675352334396002512364480036647869314851331421918217214154304944524415966781659";

/// Default sample prime `q` (101 decimal digits)
pub const SAMPLE_Q: &str = "33902784548282375116964388270838028192268243957691211282369267923758155734015998147223844817542695019";

/// Larger sample prime `p` (250 decimal digits)
pub const LARGE_P: &str = "4529744291791584270107578401453542323616929750509389288843976597908183837251007222475788228191611764608260075490017363957004182537994337990875226354778778508897973109554522950148540918578243540540499704650434750455631645633356810232965826630971061107";

/// Larger sample prime `q` (250 decimal digits)
pub const LARGE_Q: &str = "4164215748648093797608606675963547884055923752159129834747187730572469388547663115656464947509474130604943276802503049091123710432817560978941447232446050654745188389882267330722651570942096755573062086156639674260502720382675953064353409525592485141";

/// Default sample plaintext
pub const SAMPLE_MESSAGE: &str = "A quick brown fox jumps over the lazy dog";

/// First candidate of the public exponent search
pub const PUBLIC_EXPONENT_START: u32 = 2;

/// First multiplier `i` of the private exponent search `(phi * i + 1) / e`
pub const PRIVATE_MULTIPLIER_START: u32 = 1;

/// Radix the sample primes are written in
pub const SAMPLE_RADIX: u32 = 10;
