//! Caret bookkeeping across a reformat.
//!
//! The caret is tracked by how many content characters (`0-9`, `K`) sit in
//! front of it, since separators move when the value is regrouped.

use rut_core::is_content_char;

/// Counts content characters among the first `caret` characters of `value`.
pub fn content_before(value: &str, caret: usize) -> usize {
    value
        .chars()
        .take(caret)
        .filter(|&c| is_content_char(c))
        .count()
}

/// Caret position just after the `count`-th content character of `value`.
///
/// `count == 0` maps to the start of the field. A count larger than the
/// number of content characters maps to the end.
pub fn caret_after_content(value: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }

    let mut seen = 0;
    for (idx, c) in value.chars().enumerate() {
        if is_content_char(c) {
            seen += 1;
            if seen == count {
                return idx + 1;
            }
        }
    }

    value.chars().count()
}

/// Steps back one position when the caret sits right after a separator.
pub fn step_back_over_separator(value: &str, pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }

    match value.chars().nth(pos - 1) {
        Some(c) if !is_content_char(c) => pos - 1,
        _ => pos,
    }
}
