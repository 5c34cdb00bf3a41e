//! Common Conversion Internals
//!
//! Provides shared helpers for the codec modules: the hex digit alphabet,
//! digit valuation, power-of-two moduli, and exact decimal string parsing.
//! All arithmetic goes through malachite's `Integer` so values of any
//! magnitude are handled exactly.

use entities_numeric::ConversionError;
use malachite::Integer;

/// Uppercase hex digit alphabet, indexed by nibble value.
pub(crate) const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Value of a single hex digit byte
///
/// Accepts `0-9`, `A-F`, and `a-f`; returns `None` for anything else.
pub(crate) fn hex_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        _ => None,
    }
}

/// The modulus 2^bits as an exact integer.
pub(crate) fn power_of_two(bits: u32) -> Integer {
    Integer::from(1) << bits as u64
}

/// Parse a signed decimal string exactly
///
/// Accepts an optional leading `-` followed by one or more ASCII digits;
/// leading zeros are allowed, a leading `+` is not. The value is accumulated
/// digit by digit so inputs of any length are exact.
///
/// # Returns
///
/// * `Ok((value, negative))` - The parsed value and whether the string
///   carried a `-` sign (`"-0"` parses to zero with the flag set)
/// * `Err(ConversionError::InvalidArgument)` - Empty input or non-digit
///   characters
pub(crate) fn parse_decimal(text: &str) -> Result<(Integer, bool), ConversionError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() {
        return Err(ConversionError::InvalidArgument(format!(
            "malformed decimal string: {:?}",
            text
        )));
    }

    let ten = Integer::from(10u64);
    let mut value = Integer::from(0);
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(ConversionError::InvalidArgument(format!(
                "invalid decimal digit: {:?}",
                byte as char
            )));
        }
        value = value * &ten + Integer::from(byte - b'0');
    }
    if negative {
        value = -value;
    }
    Ok((value, negative))
}
