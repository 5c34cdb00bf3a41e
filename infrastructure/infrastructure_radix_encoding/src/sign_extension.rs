//! Sign Extension Module
//!
//! Provides widening of 8/16/32 bit two's-complement hex values to 64 bits.
//! The numeric value is preserved: when the top bit of the input width is
//! set the new high-order digits are all `F`, otherwise all `0`. 64-bit
//! input passes through unchanged.

use entities_numeric::padding::{pad0, pad_f};
use entities_numeric::{BitWidth, ConversionError};

use crate::common::hex_digit_value;

/// Hex digits in the 64-bit output.
const EXTENDED_CHARS: usize = 16;

/// Two's-complement sign extender
pub struct SignExtender;

impl SignExtender {
    /// Sign-extend a hex value to 64 bits
    ///
    /// The input is zero-padded to `width.hex_chars()` digits, its top
    /// nibble decides the sign (`8-F` means negative), and the value is
    /// padded to 16 digits with `'F'` or `'0'` accordingly. Lowercase input
    /// is normalized to uppercase.
    ///
    /// # Arguments
    ///
    /// * `width` - Bit width of the input value; 8, 16, 32, or 64 bits
    /// * `hex` - Hex string of at most `width.hex_chars()` digits
    ///
    /// # Returns
    ///
    /// * `Ok(hex64)` - Exactly 16 uppercase hex digits
    /// * `Err(ConversionError::Overflow)` - Input longer than the width's
    ///   digit count
    /// * `Err(ConversionError::InvalidArgument)` - 128-bit width, empty
    ///   input, or non-hex characters
    ///
    /// # Examples
    ///
    /// ```
    /// use entities_numeric::BitWidth;
    /// use infrastructure_radix_encoding::SignExtender;
    ///
    /// assert_eq!(
    ///     SignExtender::extend64(BitWidth::Bits8, "FF").unwrap(),
    ///     "FFFFFFFFFFFFFFFF"
    /// );
    /// assert_eq!(
    ///     SignExtender::extend64(BitWidth::Bits32, "76543210").unwrap(),
    ///     "0000000076543210"
    /// );
    /// ```
    pub fn extend64(width: BitWidth, hex: &str) -> Result<String, ConversionError> {
        if width == BitWidth::Bits128 {
            return Err(ConversionError::InvalidArgument(
                "cannot sign-extend a 128-bit value to 64 bits".to_string(),
            ));
        }
        if hex.is_empty() {
            return Err(ConversionError::InvalidArgument(
                "empty hex string".to_string(),
            ));
        }
        let upper = hex.to_ascii_uppercase();
        if let Some(bad) = upper.bytes().find(|b| hex_digit_value(*b).is_none()) {
            return Err(ConversionError::InvalidArgument(format!(
                "invalid hex digit: {:?}",
                bad as char
            )));
        }

        let in_chars = width.hex_chars();
        if upper.len() > in_chars {
            return Err(ConversionError::Overflow(format!(
                "{} hex digits do not fit in {} bits",
                upper.len(),
                width.bits()
            )));
        }

        let at_width = pad0(in_chars, &upper);
        let negative = matches!(at_width.as_bytes()[0], b'8'..=b'9' | b'A'..=b'F');
        if negative {
            Ok(pad_f(EXTENDED_CHARS, &upper))
        } else {
            Ok(pad0(EXTENDED_CHARS, &upper))
        }
    }
}
