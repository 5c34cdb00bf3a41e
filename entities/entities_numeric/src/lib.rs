//! Entities Layer: Numeric Fundamentals
//!
//! Provides the fundamental value types for fixed-width numeric conversion:
//! - Bit widths (8/16/32/64/128) and their hex digit counts
//! - Left-padding helpers for hex string assembly
//! - The shared conversion error taxonomy
//!
//! ## Overview
//!
//! The `entities_numeric` crate is the innermost layer of the conversion
//! workspace. It defines plain value types with no dependencies; the
//! infrastructure layer builds the actual codecs on top of them.
//!
//! ## See Also
//!
//! - [`infrastructure_radix_encoding`](../../infrastructure/infrastructure_radix_encoding/index.html):
//!   decimal/hex codecs and sign extension built on these types

pub mod bit_width;
pub mod error;
pub mod padding;

pub use bit_width::BitWidth;
pub use error::ConversionError;
