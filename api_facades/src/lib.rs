//! API Facades Layer
//!
//! Provides the flat conversion surface for external callers: free functions
//! taking the bit width as a plain integer, matching the documented
//! signatures `pad`, `hexify`, `decify`, `decifyByte`, and `signExtend64`.
//!
//! All facades delegate to the inner layers; callers that already hold a
//! [`entities_numeric::BitWidth`] can use
//! [`infrastructure_radix_encoding`] directly.

pub mod conversion_facades;

pub use conversion_facades::{decify, decify_byte, hexify, pad, sign_extend64};
