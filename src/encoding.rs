//! Character <-> integer mapping
//!
//! Messages are encrypted one Unicode scalar value at a time. There is no
//! padding and no length hiding: the ciphertext length equals the number of
//! characters in the message.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Substituted for values that are not Unicode scalar values
pub const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Maps each character to its code point
pub fn encode(message: &str) -> Vec<u32> {
    message.chars().map(u32::from).collect()
}

/// Maps one recovered integer back to a character, lossy for out-of-range values
pub fn decode_value(value: &BigInt) -> char {
    value
        .to_u32()
        .and_then(char::from_u32)
        .unwrap_or(REPLACEMENT)
}

/// Maps recovered integers back to a string
pub fn decode_lossy<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a BigInt>,
{
    values.into_iter().map(decode_value).collect()
}
