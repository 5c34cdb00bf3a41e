//! Conversion Error Taxonomy
//!
//! Provides the error type shared by every conversion operation. All errors
//! are surfaced synchronously to the caller; these are pure computations with
//! no transient failure modes, so there is no retry or recovery path.

use std::fmt;

/// Errors reported by conversion operations
///
/// Carries a human-readable description of the offending input so callers
/// can report it without reconstructing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input is wider than the operation's bit width allows
    Overflow(String),
    /// Malformed input or unsupported parameter value
    InvalidArgument(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Overflow(msg) => write!(f, "overflow: {}", msg),
            ConversionError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for ConversionError {}
