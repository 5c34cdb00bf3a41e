//! Infrastructure Layer: Radix Encoding
//!
//! Provides exact conversion between arbitrary-precision decimal strings and
//! fixed-width two's-complement hexadecimal strings, plus sign extension
//! between hex widths.
//!
//! ## Overview
//!
//! The `infrastructure_radix_encoding` crate is the conversion engine of the
//! workspace. All operations are pure string-to-string functions over the
//! bit widths 8, 16, 32, 64, and 128; the arithmetic is performed with
//! malachite's `Integer`, so no precision is ever lost to floating point.
//!
//! ## Modules
//!
//! - **[`hex_codec`](hex_codec/index.html)**: Encoding of decimal strings to
//!   fixed-length two's-complement hex (`hexify`) and decoding back
//!   (`decify`, `decify_strict`, `decify_byte`).
//!
//! - **[`sign_extension`](sign_extension/index.html)**: Widening of 8/16/32
//!   bit hex values to 64 bits by replicating the sign bit.
//!
//! ## See Also
//!
//! - [`entities_numeric`](../../entities/entities_numeric/index.html):
//!   BitWidth, padding helpers, and the error taxonomy
//! - [`api_facades`](../../api_facades/index.html): flat bits-as-integer
//!   surface over these codecs

mod common;

pub mod hex_codec;
pub mod sign_extension;

pub use hex_codec::HexCodec;
pub use sign_extension::SignExtender;
