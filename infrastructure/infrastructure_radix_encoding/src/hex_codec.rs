//! Hex Codec Module
//!
//! Provides conversion between signed decimal strings and fixed-width
//! two's-complement hexadecimal strings.
//!
//! ## Encoding
//!
//! `hexify` reduces the decimal value modulo 2^bits and renders the residue
//! as exactly bits/4 uppercase hex digits, so values outside the width wrap
//! around and negatives take the standard two's-complement form.
//!
//! ## Decoding
//!
//! `decify` sums the position-weighted digit values and reduces modulo
//! 2^bits, so hex input of any length - including longer than bits/4 - is
//! accepted and wraps. `decify_strict` is the variant that rejects
//! over-length input instead. `decify_byte` is a single-byte convenience
//! decode using native machine arithmetic.

use entities_numeric::padding::{pad0, pad_f};
use entities_numeric::{BitWidth, ConversionError};
use malachite::Integer;

use crate::common::{hex_digit_value, parse_decimal, power_of_two, HEX_DIGITS};

/// Hex digits a `u64` can hold; `decify_byte` caps its input here.
const NATIVE_HEX_CHARS: usize = 16;

/// Decimal/hex codec
pub struct HexCodec;

impl HexCodec {
    /// Encode a decimal string as fixed-width two's-complement hex
    ///
    /// The value is reduced modulo 2^bits, so out-of-range magnitudes wrap.
    /// Negative inputs are encoded in two's-complement form and padded with
    /// `'F'`; non-negative inputs are padded with `'0'`.
    ///
    /// # Arguments
    ///
    /// * `decimal` - Signed base-10 string (`-?[0-9]+`)
    /// * `width` - Target bit width
    ///
    /// # Returns
    ///
    /// * `Ok(hex)` - Exactly `width.hex_chars()` uppercase hex digits
    /// * `Err(ConversionError::InvalidArgument)` - Malformed decimal string
    ///
    /// # Examples
    ///
    /// ```
    /// use entities_numeric::BitWidth;
    /// use infrastructure_radix_encoding::HexCodec;
    ///
    /// assert_eq!(HexCodec::hexify("689", BitWidth::Bits16).unwrap(), "02B1");
    /// assert_eq!(HexCodec::hexify("256", BitWidth::Bits8).unwrap(), "00");
    /// assert_eq!(HexCodec::hexify("-1", BitWidth::Bits8).unwrap(), "FF");
    /// ```
    pub fn hexify(decimal: &str, width: BitWidth) -> Result<String, ConversionError> {
        let char_length = width.hex_chars();
        let (value, negative) = parse_decimal(decimal)?;

        let modulus = power_of_two(width.bits());
        let mut q = &value % &modulus;
        if negative {
            // The remainder carries the dividend's sign, so this lands in
            // (0, 2^bits]. The 2^bits endpoint (magnitude an exact multiple
            // of the modulus) emits one extra digit that the truncation
            // below removes.
            q = &modulus + &q;
        }

        let sixteen = Integer::from(16u64);
        let mut digits: Vec<char> = Vec::new();
        while q >= 1 {
            let r = &q % &sixteen;
            let nibble = u64::try_from(&r).unwrap_or(0) as usize;
            digits.push(HEX_DIGITS[nibble]);
            q = &q / &sixteen;
        }
        let hex: String = if digits.is_empty() {
            "0".to_string()
        } else {
            digits.iter().rev().collect()
        };

        let padded = if negative {
            pad_f(char_length, &hex)
        } else {
            pad0(char_length, &hex)
        };
        if padded.len() > char_length {
            Ok(padded[padded.len() - char_length..].to_string())
        } else {
            Ok(padded)
        }
    }

    /// Decode a two's-complement hex string to decimal
    ///
    /// Accepts hex input of any length; the position-weighted digit sum is
    /// reduced modulo 2^bits, so digits beyond the width wrap around. Use
    /// [`decify_strict`](Self::decify_strict) to reject over-length input
    /// instead. Lowercase digits are accepted.
    ///
    /// # Arguments
    ///
    /// * `hex` - Hex string (`[0-9A-Fa-f]+`)
    /// * `width` - Bit width for the modulus and the sign bit position
    /// * `signed` - When true, residues at or above 2^(bits-1) are
    ///   interpreted as negative
    ///
    /// # Returns
    ///
    /// * `Ok(decimal)` - Canonical base-10 string, `-` prefix for negatives
    /// * `Err(ConversionError::InvalidArgument)` - Empty input or non-hex
    ///   characters
    ///
    /// # Examples
    ///
    /// ```
    /// use entities_numeric::BitWidth;
    /// use infrastructure_radix_encoding::HexCodec;
    ///
    /// assert_eq!(HexCodec::decify("80", BitWidth::Bits8, true).unwrap(), "-128");
    /// assert_eq!(HexCodec::decify("80", BitWidth::Bits8, false).unwrap(), "128");
    /// assert_eq!(HexCodec::decify("FFFF", BitWidth::Bits8, false).unwrap(), "255");
    /// ```
    pub fn decify(hex: &str, width: BitWidth, signed: bool) -> Result<String, ConversionError> {
        let unsigned = Self::decode_unsigned(hex, width)?;
        if signed && unsigned >= power_of_two(width.bits() - 1) {
            let modulus = power_of_two(width.bits());
            Ok((&unsigned - &modulus).to_string())
        } else {
            Ok(unsigned.to_string())
        }
    }

    /// Decode like [`decify`](Self::decify), but reject over-length input
    ///
    /// # Returns
    ///
    /// * `Ok(decimal)` - As for `decify`
    /// * `Err(ConversionError::Overflow)` - Input longer than
    ///   `width.hex_chars()` characters
    /// * `Err(ConversionError::InvalidArgument)` - Empty input or non-hex
    ///   characters
    pub fn decify_strict(
        hex: &str,
        width: BitWidth,
        signed: bool,
    ) -> Result<String, ConversionError> {
        if hex.len() > width.hex_chars() {
            return Err(ConversionError::Overflow(format!(
                "{} hex digits do not fit in {} bits",
                hex.len(),
                width.bits()
            )));
        }
        Self::decify(hex, width, signed)
    }

    /// Decode a single unsigned hex byte to decimal
    ///
    /// Convenience form using native machine arithmetic: the input is parsed
    /// as hex and reduced modulo 256. Inputs longer than a `u64` can hold
    /// are rejected rather than decoded inexactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use infrastructure_radix_encoding::HexCodec;
    ///
    /// assert_eq!(HexCodec::decify_byte("FF").unwrap(), "255");
    /// assert_eq!(HexCodec::decify_byte("1FF").unwrap(), "255");
    /// ```
    pub fn decify_byte(hex: &str) -> Result<String, ConversionError> {
        if hex.is_empty() {
            return Err(ConversionError::InvalidArgument(
                "empty hex string".to_string(),
            ));
        }
        if let Some(bad) = hex.bytes().find(|b| hex_digit_value(*b).is_none()) {
            return Err(ConversionError::InvalidArgument(format!(
                "invalid hex digit: {:?}",
                bad as char
            )));
        }
        if hex.len() > NATIVE_HEX_CHARS {
            return Err(ConversionError::Overflow(format!(
                "{} hex digits exceed the native range",
                hex.len()
            )));
        }
        let value = u64::from_str_radix(hex, 16).map_err(|e| {
            ConversionError::InvalidArgument(format!("malformed hex byte {:?}: {}", hex, e))
        })?;
        Ok((value % 256).to_string())
    }

    /// Position-weighted digit sum reduced to the least non-negative residue
    /// modulo 2^bits.
    fn decode_unsigned(hex: &str, width: BitWidth) -> Result<Integer, ConversionError> {
        if hex.is_empty() {
            return Err(ConversionError::InvalidArgument(
                "empty hex string".to_string(),
            ));
        }
        let mut sum = Integer::from(0);
        let mut weight = Integer::from(1u64);
        for byte in hex.bytes().rev() {
            let digit = hex_digit_value(byte).ok_or_else(|| {
                ConversionError::InvalidArgument(format!("invalid hex digit: {:?}", byte as char))
            })?;
            sum += Integer::from(digit) * &weight;
            weight *= Integer::from(16u64);
        }
        let modulus = power_of_two(width.bits());
        // The sum is non-negative, so the remainder is already the least
        // non-negative residue.
        Ok(&sum % &modulus)
    }
}
