//! # Cleaner
//!
//! Reduces arbitrary field text to the *raw token*: decimal digits and `K`.
//!
//! ```text
//!   " 15.943.503-2 "  ──► clean() ──►  "159435032"
//!   "12.345.678-k"    ──► clean() ──►  "12345678K"
//!   "abc"             ──► clean() ──►  ""
//! ```

/// Maximum number of significant characters in a raw token (8 body + 1 check).
pub const MAX_RAW_LEN: usize = 9;

/// Returns true for characters that survive cleaning: `0-9`, `k`, `K`.
#[inline]
pub fn is_content_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'k' || c == 'K'
}

/// Strips everything except digits and `K`, upper-casing the `K`.
///
/// Total over all inputs; order is preserved.
///
/// ## Example
/// ```rust
/// use rut_core::clean::clean;
///
/// assert_eq!(clean("15.943.503-2"), "159435032");
/// assert_eq!(clean("7.654.321-k"), "7654321K");
/// assert_eq!(clean(""), "");
/// ```
pub fn clean(input: &str) -> String {
    input
        .chars()
        .filter(|&c| is_content_char(c))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// [`clean`] for callers holding an optional value; `None` cleans to `""`.
pub fn clean_optional(input: Option<&str>) -> String {
    input.map(clean).unwrap_or_default()
}

/// Returns the first [`MAX_RAW_LEN`] characters of an already-cleaned token.
pub fn truncate_raw(raw: &str) -> &str {
    match raw.char_indices().nth(MAX_RAW_LEN) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}
