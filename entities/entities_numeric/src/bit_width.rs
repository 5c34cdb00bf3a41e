//! Bit Width Type
//!
//! Provides the fixed set of supported bit widths. A width determines both
//! the two's-complement modulus (2^bits) and the canonical hex string length
//! (bits / 4, one hex digit per nibble).

use crate::error::ConversionError;

/// Supported fixed bit widths: 8, 16, 32, 64, or 128 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitWidth {
    Bits8,
    Bits16,
    Bits32,
    Bits64,
    Bits128,
}

impl BitWidth {
    /// All supported widths, smallest first.
    pub const ALL: [BitWidth; 5] = [
        BitWidth::Bits8,
        BitWidth::Bits16,
        BitWidth::Bits32,
        BitWidth::Bits64,
        BitWidth::Bits128,
    ];

    /// Look up a width from its bit count
    ///
    /// # Arguments
    /// * `bits` - Bit count; must be one of 8, 16, 32, 64, 128
    ///
    /// # Returns
    /// * `Ok(BitWidth)` - The matching width
    /// * `Err(ConversionError::InvalidArgument)` - Any other value
    ///
    /// # Examples
    /// ```
    /// use entities_numeric::BitWidth;
    ///
    /// assert_eq!(BitWidth::from_bits(16).unwrap(), BitWidth::Bits16);
    /// assert!(BitWidth::from_bits(12).is_err());
    /// ```
    pub fn from_bits(bits: u32) -> Result<Self, ConversionError> {
        match bits {
            8 => Ok(BitWidth::Bits8),
            16 => Ok(BitWidth::Bits16),
            32 => Ok(BitWidth::Bits32),
            64 => Ok(BitWidth::Bits64),
            128 => Ok(BitWidth::Bits128),
            other => Err(ConversionError::InvalidArgument(format!(
                "unsupported bit width: {}",
                other
            ))),
        }
    }

    /// Number of bits for this width.
    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            BitWidth::Bits8 => 8,
            BitWidth::Bits16 => 16,
            BitWidth::Bits32 => 32,
            BitWidth::Bits64 => 64,
            BitWidth::Bits128 => 128,
        }
    }

    /// Canonical hex string length for this width (one digit per 4 bits).
    #[inline]
    pub fn hex_chars(self) -> usize {
        (self.bits() / 4) as usize
    }
}
