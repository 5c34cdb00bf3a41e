//! Integration tests for infrastructure_radix_encoding crate
//!
//! These tests verify the decimal/hex codec and sign extension end to end
//! against the conversion vector tables, plus the round-trip property
//! between encoding and decoding.

use entities_numeric::{BitWidth, ConversionError};
use infrastructure_radix_encoding::{HexCodec, SignExtender};

#[test]
fn test_hexify_vectors() {
    let vectors = vec![
        // decimal, bits, hex
        ("1", 64, "0000000000000001"),
        ("01", 8, "01"),
        ("-1", 8, "FF"),
        ("-1", 16, "FFFF"),
        ("-1", 32, "FFFFFFFF"),
        ("-1", 64, "FFFFFFFFFFFFFFFF"),
        ("-1", 128, "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF"),
        ("10", 64, "000000000000000A"),
        ("689", 16, "02B1"),
        ("689", 8, "B1"),
        ("256", 8, "00"),
        (
            "24197857200151252744792662746087043600",
            128,
            "1234567890ABCDEFEDCBA09876543210",
        ),
        ("-129", 8, "7F"),
        ("-128", 8, "80"),
        ("-129", 16, "FF7F"),
    ];

    for (decimal, bits, hex) in vectors {
        let width = BitWidth::from_bits(bits).unwrap();
        assert_eq!(
            HexCodec::hexify(decimal, width).unwrap(),
            hex,
            "hexify({:?}, {})",
            decimal,
            bits
        );
    }
}

#[test]
fn test_decify_vectors() {
    let vectors = vec![
        // hex, bits, signed flag, decimal
        ("0", 8, true, "0"),
        ("00", 8, false, "0"),
        ("FF", 8, true, "-1"),
        ("FF", 8, false, "255"),
        ("FFFF", 8, true, "-1"),
        ("FFFF", 8, false, "255"),
        ("000000000000000A", 64, false, "10"),
        ("7F", 8, true, "127"),
        ("80", 8, true, "-128"),
        ("80", 8, false, "128"),
        ("FF7F", 16, true, "-129"),
        (
            "1234567890ABCDEFEDCBA09876543210",
            128,
            true,
            "24197857200151252744792662746087043600",
        ),
        (
            "1234567890ABCDEFEDCBA09876543210",
            128,
            false,
            "24197857200151252744792662746087043600",
        ),
    ];

    for (hex, bits, signed, decimal) in vectors {
        let width = BitWidth::from_bits(bits).unwrap();
        assert_eq!(
            HexCodec::decify(hex, width, signed).unwrap(),
            decimal,
            "decify({:?}, {}, {})",
            hex,
            bits,
            signed
        );
    }
}

#[test]
fn test_sign_extend_vectors() {
    let vectors = vec![
        // bits, in, out
        (8, "FF", "FFFFFFFFFFFFFFFF"),
        (8, "60", "0000000000000060"),
        (16, "FFFF", "FFFFFFFFFFFFFFFF"),
        (16, "7FFF", "0000000000007FFF"),
        (32, "80000000", "FFFFFFFF80000000"),
        (32, "76543210", "0000000076543210"),
        (64, "FFFFFFFFFFFFFFFF", "FFFFFFFFFFFFFFFF"),
        (64, "0000000000000000", "0000000000000000"),
    ];

    for (bits, input, output) in vectors {
        let width = BitWidth::from_bits(bits).unwrap();
        assert_eq!(
            SignExtender::extend64(width, input).unwrap(),
            output,
            "extend64({}, {:?})",
            bits,
            input
        );
    }
}

#[test]
fn test_round_trip_signed() {
    // decify is the left inverse of hexify for values in the signed range.
    let values = vec![
        "0", "1", "-1", "127", "-128", "255", "-255", "32767", "-32768",
        "2147483647", "-2147483648", "9223372036854775807", "-9223372036854775808",
    ];

    for width in BitWidth::ALL {
        let half = 1i128 << (width.bits().min(64) - 1);
        for decimal in &values {
            let v: i128 = decimal.parse().unwrap();
            if width.bits() < 128 && (v < -half || v >= half) {
                continue;
            }
            let hex = HexCodec::hexify(decimal, width).unwrap();
            assert_eq!(hex.len(), width.hex_chars());
            assert_eq!(
                HexCodec::decify(&hex, width, true).unwrap(),
                *decimal,
                "round trip of {} at {} bits",
                decimal,
                width.bits()
            );
        }
    }
}

#[test]
fn test_round_trip_unsigned() {
    let values = vec!["0", "1", "255", "65535", "4294967295", "18446744073709551615"];

    for width in BitWidth::ALL {
        for decimal in &values {
            let v: u128 = decimal.parse().unwrap();
            if width.bits() < 128 && v >= 1u128 << width.bits() {
                continue;
            }
            let hex = HexCodec::hexify(decimal, width).unwrap();
            assert_eq!(
                HexCodec::decify(&hex, width, false).unwrap(),
                *decimal,
                "round trip of {} at {} bits",
                decimal,
                width.bits()
            );
        }
    }
}

#[test]
fn test_sign_extension_matches_decoded_value() {
    // Extending preserves the signed value: decoding the widened string at
    // 64 bits equals decoding the original at its own width.
    let cases = vec![
        (8, "FF"),
        (8, "01"),
        (8, "80"),
        (16, "FF7F"),
        (32, "80000000"),
        (32, "76543210"),
    ];

    for (bits, hex) in cases {
        let width = BitWidth::from_bits(bits).unwrap();
        let wide = SignExtender::extend64(width, hex).unwrap();
        assert_eq!(
            HexCodec::decify(&wide, BitWidth::Bits64, true).unwrap(),
            HexCodec::decify(hex, width, true).unwrap(),
            "extend64({}, {:?})",
            bits,
            hex
        );
    }
}

#[test]
fn test_strict_decode_distinguishes_overflow_from_malformed() {
    assert!(matches!(
        HexCodec::decify_strict("FFFF", BitWidth::Bits8, false),
        Err(ConversionError::Overflow(_))
    ));
    assert!(matches!(
        HexCodec::decify_strict("GG", BitWidth::Bits8, false),
        Err(ConversionError::InvalidArgument(_))
    ));
}
