//! # Checksum Module
//!
//! Modulo-11 check digit over the RUT body.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  body     7   6   0   8   6   4   2   8                                 │
//! │  weight   3   2   7   6   5   4   3   2   ◄── from the right, 2..7      │
//! │  product 21  12   0  48  30  16   6  16   = 149                         │
//! │                                                                         │
//! │  149 mod 11 = 6        11 - 6 = 5        check digit: 5                 │
//! │                                                                         │
//! │  11 → '0'      10 → 'K'      otherwise the digit itself                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted body, in digits.
pub const MAX_BODY_LEN: usize = 8;

// =============================================================================
// Check Digit
// =============================================================================

/// The trailing check character of a RUT.
///
/// Serializes as a one-character string (`"5"`, `"K"`).
///
/// Digits order before `K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CheckDigit {
    /// `0` through `9`.
    Digit(u8),
    /// `K`, used when `11 - (sum mod 11)` is 10.
    K,
}

impl CheckDigit {
    /// Maps the `11 - remainder` value (1..=11) to a check digit.
    fn from_raw(raw: u32) -> Self {
        match raw {
            11 => CheckDigit::Digit(0),
            10 => CheckDigit::K,
            n => CheckDigit::Digit(n as u8),
        }
    }

    /// Returns the character form (`'0'`..`'9'` or `'K'`).
    ///
    /// A hand-built `Digit` above 9 renders as `'?'`.
    pub fn as_char(&self) -> char {
        match self {
            CheckDigit::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            CheckDigit::K => 'K',
        }
    }
}

impl fmt::Display for CheckDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for CheckDigit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'k' | 'K' => Ok(CheckDigit::K),
            '0'..='9' => Ok(CheckDigit::Digit(c as u8 - b'0')),
            other => Err(other),
        }
    }
}

impl From<CheckDigit> for String {
    fn from(check: CheckDigit) -> Self {
        check.to_string()
    }
}

impl TryFrom<String> for CheckDigit {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                CheckDigit::try_from(c).map_err(|c| format!("invalid check digit '{}'", c))
            }
            _ => Err(format!("check digit must be one character, got '{}'", s)),
        }
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Weighted Modulo-11 sum over body digits, weights 2..=7 cycling from the right.
fn weighted_sum(digits: impl DoubleEndedIterator<Item = u32>) -> u32 {
    let mut sum = 0;
    let mut multiplier = 2;

    for digit in digits.rev() {
        sum += digit * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    sum
}

/// Computes the check digit for a textual body.
///
/// Returns `None` if the body is empty, longer than [`MAX_BODY_LEN`], or has
/// anything other than ASCII digits.
///
/// ## Example
/// ```rust
/// use rut_core::checksum::{compute_check_digit, CheckDigit};
///
/// assert_eq!(compute_check_digit("76086428"), Some(CheckDigit::Digit(5)));
/// assert_eq!(compute_check_digit("10000013"), Some(CheckDigit::K));
/// assert_eq!(compute_check_digit("12a"), None);
/// ```
pub fn compute_check_digit(body: &str) -> Option<CheckDigit> {
    if body.is_empty() || body.len() > MAX_BODY_LEN {
        return None;
    }

    let digits = body
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;

    let sum = weighted_sum(digits.into_iter());
    Some(CheckDigit::from_raw(11 - sum % 11))
}

/// Computes the check digit for a numeric body.
///
/// Leading zeros do not change the sum, so `7` and `00000007` agree.
pub fn check_digit_for(body: u32) -> CheckDigit {
    let digits: Vec<u32> = body
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    let sum = weighted_sum(digits.into_iter());
    CheckDigit::from_raw(11 - sum % 11)
}
