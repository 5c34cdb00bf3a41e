//! Left-Padding Helpers
//!
//! Provides left-padding of strings to a fixed length, used to bring hex
//! digit strings up to their canonical width. Two fill characters matter to
//! the codecs: `'0'` for non-negative values and `'F'` for negative
//! two's-complement values, each pre-bound to the five canonical hex lengths
//! (2, 4, 8, 16, 32 digits for 8/16/32/64/128 bits).
//!
//! The width-bound forms use the MMIX size vocabulary: byte (8 bits),
//! wyde (16), tetra (32), octa (64), sexa (128).

/// Left-pad `text` with `fill` until it is `target_len` characters long
///
/// Returns `text` unchanged when it is already `target_len` characters or
/// longer; truncation is the caller's responsibility.
///
/// # Arguments
/// * `fill` - Fill character to prepend
/// * `target_len` - Desired length in characters
/// * `text` - String to pad
///
/// # Examples
/// ```
/// use entities_numeric::padding::pad;
///
/// assert_eq!(pad('0', 4, "B1"), "00B1");
/// assert_eq!(pad('F', 2, "FFFF"), "FFFF");
/// ```
pub fn pad(fill: char, target_len: usize, text: &str) -> String {
    let len = text.chars().count();
    if len >= target_len {
        return text.to_string();
    }
    let mut padded = String::with_capacity(target_len);
    for _ in 0..target_len - len {
        padded.push(fill);
    }
    padded.push_str(text);
    padded
}

/// `pad` with `'0'` as the fill character.
pub fn pad0(target_len: usize, text: &str) -> String {
    pad('0', target_len, text)
}

/// `pad` with `'F'` as the fill character.
pub fn pad_f(target_len: usize, text: &str) -> String {
    pad('F', target_len, text)
}

/// Zero-pad to 2 digits (8-bit byte).
pub fn pad0_byte(text: &str) -> String {
    pad0(2, text)
}

/// Zero-pad to 4 digits (16-bit wyde).
pub fn pad0_wyde(text: &str) -> String {
    pad0(4, text)
}

/// Zero-pad to 8 digits (32-bit tetra).
pub fn pad0_tetra(text: &str) -> String {
    pad0(8, text)
}

/// Zero-pad to 16 digits (64-bit octa).
pub fn pad0_octa(text: &str) -> String {
    pad0(16, text)
}

/// Zero-pad to 32 digits (128-bit sexa).
pub fn pad0_sexa(text: &str) -> String {
    pad0(32, text)
}

/// F-pad to 2 digits (8-bit byte).
pub fn pad_f_byte(text: &str) -> String {
    pad_f(2, text)
}

/// F-pad to 4 digits (16-bit wyde).
pub fn pad_f_wyde(text: &str) -> String {
    pad_f(4, text)
}

/// F-pad to 8 digits (32-bit tetra).
pub fn pad_f_tetra(text: &str) -> String {
    pad_f(8, text)
}

/// F-pad to 16 digits (64-bit octa).
pub fn pad_f_octa(text: &str) -> String {
    pad_f(16, text)
}

/// F-pad to 32 digits (128-bit sexa).
pub fn pad_f_sexa(text: &str) -> String {
    pad_f(32, text)
}
