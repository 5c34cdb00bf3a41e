//! Conversion API Facades
//!
//! Provides the bits-as-integer entry points. Each facade validates the
//! width through [`BitWidth::from_bits`] and calls the infrastructure
//! codecs; unsupported widths surface as `InvalidArgument`.

use entities_numeric::{padding, BitWidth, ConversionError};
use infrastructure_radix_encoding::{HexCodec, SignExtender};

/// Left-pad `text` with `fill_char` to `target_length` characters
///
/// Returns `text` unchanged when it is already long enough.
///
/// # Examples
/// ```
/// assert_eq!(api_facades::pad('0', 4, "B1"), "00B1");
/// ```
pub fn pad(fill_char: char, target_length: usize, text: &str) -> String {
    padding::pad(fill_char, target_length, text)
}

/// Encode a decimal string as two's-complement hex of `bits` width
///
/// `bits` must be one of 8, 16, 32, 64, 128. The result has exactly
/// `bits / 4` uppercase hex digits.
///
/// # Examples
/// ```
/// assert_eq!(api_facades::hexify("-128", 8).unwrap(), "80");
/// assert_eq!(api_facades::hexify("256", 8).unwrap(), "00");
/// ```
pub fn hexify(decimal: &str, bits: u32) -> Result<String, ConversionError> {
    let width = BitWidth::from_bits(bits)?;
    HexCodec::hexify(decimal, width)
}

/// Decode a two's-complement hex string of `bits` width to decimal
///
/// `bits` must be one of 8, 16, 32, 64, 128. Input of any length is
/// accepted and wraps modulo 2^bits; when `signed` is true the upper half
/// of the range decodes as negative.
///
/// # Examples
/// ```
/// assert_eq!(api_facades::decify("80", 8, true).unwrap(), "-128");
/// assert_eq!(api_facades::decify("80", 8, false).unwrap(), "128");
/// ```
pub fn decify(hex: &str, bits: u32, signed: bool) -> Result<String, ConversionError> {
    let width = BitWidth::from_bits(bits)?;
    HexCodec::decify(hex, width, signed)
}

/// Decode a single unsigned hex byte to decimal
///
/// # Examples
/// ```
/// assert_eq!(api_facades::decify_byte("FF").unwrap(), "255");
/// ```
pub fn decify_byte(hex_byte: &str) -> Result<String, ConversionError> {
    HexCodec::decify_byte(hex_byte)
}

/// Sign-extend a hex value of `bits` width to 16 hex digits (64 bits)
///
/// `bits` must be one of 8, 16, 32, 64; anything else - including 128 -
/// is `InvalidArgument`. Input longer than `bits / 4` digits is `Overflow`.
///
/// # Examples
/// ```
/// assert_eq!(api_facades::sign_extend64(8, "FF").unwrap(), "FFFFFFFFFFFFFFFF");
/// assert_eq!(api_facades::sign_extend64(32, "76543210").unwrap(), "0000000076543210");
/// ```
pub fn sign_extend64(bits: u32, hex: &str) -> Result<String, ConversionError> {
    let width = BitWidth::from_bits(bits)?;
    SignExtender::extend64(width, hex)
}
