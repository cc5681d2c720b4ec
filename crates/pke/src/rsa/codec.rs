//! Conversion between text and message integers
//!
//! Encoding reads the UTF-8 bytes of the text as a little-endian integer.
//! Decoding goes back through the big-endian hex rendering of the integer:
//! pad to an even number of hex digits so byte boundaries match the ones
//! encoding produced, decode, reverse.
//!
//! Trailing `0x00` bytes of the input are not representable in the integer
//! and do not survive a round trip.

use alloc::string::String;
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::Error;

/// Encode raw bytes as a little-endian integer
pub fn encode_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encode text as the integer M of its UTF-8 bytes, least significant byte first
pub fn encode_message(text: &str) -> BigUint {
    encode_bytes(text.as_bytes())
}

/// Recover the byte sequence an integer was encoded from
///
/// Zero decodes to the empty sequence.
pub fn decode_bytes(value: &BigUint) -> trsa_api::Result<Vec<u8>> {
    if value.is_zero() {
        return Ok(Vec::new());
    }

    let mut digits = value.to_str_radix(16);
    if digits.len() % 2 == 1 {
        digits.insert(0, '0');
    }

    let mut bytes = hex::decode(&digits)
        .map_err(|_| Error::InvalidEncoding("hex rendering of the integer is malformed"))?;
    bytes.reverse();

    Ok(bytes)
}

/// Recover the text an integer was encoded from
///
/// # Errors
/// Returns [`trsa_api::Error::InvalidEncoding`] if the bytes are not UTF-8,
/// which is what a wrong private key usually produces.
pub fn decode_message(value: &BigUint) -> trsa_api::Result<String> {
    let bytes = decode_bytes(value)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| Error::InvalidEncoding("decrypted bytes are not valid UTF-8"))?;

    Ok(text)
}
