//! # Validation Module
//!
//! Checksum validation for Chilean RUT identifiers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form field (rut-field, on blur)                               │
//! │  ├── is_valid() with BodyRule::Lenient                                  │
//! │  └── Visual marker: valid / invalid                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Server-side re-validation (rut-cli, imports)                  │
//! │  ├── validate() with BodyRule::Server                                   │
//! │  └── Typed reason for every rejection                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Stored column shape                                           │
//! │  └── is_canonical(): DD.DDD.DDD-C                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rut_core::validation::{is_valid, validate, BodyRule};
//!
//! assert!(is_valid("76.086.428-5"));
//! assert!(!is_valid("76.086.428-4"));
//!
//! let rut = validate("15943503-2", BodyRule::Server).unwrap();
//! assert_eq!(rut.to_string(), "15.943.503-2");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::checksum::{compute_check_digit, CheckDigit};
use crate::clean::{clean, is_content_char};
use crate::error::{RutError, RutResult};
use crate::types::Rut;

// =============================================================================
// Body Rule
// =============================================================================

/// How many body digits a validator accepts in front of the check character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum BodyRule {
    /// 1 to 8 digits. Used while a user is creating or editing a record.
    #[default]
    Lenient,

    /// Exactly 8 digits. Used by the simple blur/focus formatter.
    FullWidth,

    /// 7 to 8 digits. Used when re-validating on the server or during imports.
    Server,
}

impl BodyRule {
    /// Inclusive `(min, max)` body length.
    pub const fn range(&self) -> (usize, usize) {
        match self {
            BodyRule::Lenient => (1, 8),
            BodyRule::FullWidth => (8, 8),
            BodyRule::Server => (7, 8),
        }
    }

    /// Config / CLI name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            BodyRule::Lenient => "lenient",
            BodyRule::FullWidth => "full-width",
            BodyRule::Server => "server",
        }
    }
}

impl fmt::Display for BodyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a body rule name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown body rule: '{0}'. Valid options: lenient, full-width, server")]
pub struct UnknownRule(pub String);

impl FromStr for BodyRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" | "user" => Ok(BodyRule::Lenient),
            "full-width" | "strict" | "fixed" => Ok(BodyRule::FullWidth),
            "server" | "import" => Ok(BodyRule::Server),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Parses and checks an identifier, explaining any rejection.
///
/// ## Rules
/// - Input is cleaned first, so any punctuation is accepted
/// - Body length must fall inside `rule.range()`
/// - Body must be digits only; the check character may be `0-9` or `K`
/// - Check character must match the Modulo-11 result
///
/// ## Example
/// ```rust
/// use rut_core::validation::{validate, BodyRule};
/// use rut_core::RutError;
///
/// assert!(validate("10.000.013-k", BodyRule::Lenient).is_ok());
/// assert_eq!(validate("", BodyRule::Lenient), Err(RutError::Empty));
/// assert!(matches!(
///     validate("765.432-1", BodyRule::Server),
///     Err(RutError::InvalidLength { len: 6, min: 7, max: 8 })
/// ));
/// ```
pub fn validate(input: &str, rule: BodyRule) -> RutResult<Rut> {
    let cleaned = clean(input);
    if cleaned.is_empty() {
        return Err(RutError::Empty);
    }

    let (body, given) = cleaned.split_at(cleaned.len() - 1);

    if !body.chars().all(|c| c.is_ascii_digit()) {
        return Err(RutError::InvalidCharacters);
    }

    let (min, max) = rule.range();
    if body.len() < min || body.len() > max {
        return Err(RutError::InvalidLength {
            len: body.len(),
            min,
            max,
        });
    }

    let given = given
        .chars()
        .next()
        .and_then(|c| CheckDigit::try_from(c).ok())
        .ok_or(RutError::InvalidCharacters)?;
    let expected = compute_check_digit(body).ok_or(RutError::InvalidCharacters)?;

    if given != expected {
        return Err(RutError::CheckDigitMismatch { expected, given });
    }

    let body: u32 = body.parse().map_err(|_| RutError::InvalidCharacters)?;
    Rut::from_parts(body, expected)
}

/// Returns true when `input` carries a correct check digit (1–8 body digits).
///
/// Never fails; malformed input is simply `false`.
pub fn is_valid(input: &str) -> bool {
    is_valid_with(input, BodyRule::Lenient)
}

/// [`is_valid`] with an explicit body length rule.
pub fn is_valid_with(input: &str, rule: BodyRule) -> bool {
    validate(input, rule).is_ok()
}

/// Checks the stored column shape `D{1,2}.DDD.DDD-C` without computing the checksum.
///
/// ## Example
/// ```rust
/// use rut_core::validation::is_canonical;
///
/// assert!(is_canonical("12.345.678-5"));
/// assert!(is_canonical("7.654.321-k"));
/// assert!(!is_canonical("12345678-5"));
/// ```
pub fn is_canonical(input: &str) -> bool {
    let Some((number, check)) = input.split_once('-') else {
        return false;
    };

    let mut check_chars = check.chars();
    let check_ok = matches!(
        (check_chars.next(), check_chars.next()),
        (Some(c), None) if is_content_char(c)
    );
    if !check_ok {
        return false;
    }

    let groups: Vec<&str> = number.split('.').collect();
    let all_digits = |g: &str| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit());

    match groups.as_slice() {
        [head, mid, tail] => {
            (1..=2).contains(&head.len())
                && mid.len() == 3
                && tail.len() == 3
                && all_digits(head)
                && all_digits(mid)
                && all_digits(tail)
        }
        _ => false,
    }
}

// =============================================================================
// Validation Report
// =============================================================================

/// Outcome of validating one input, shaped for JSON output and the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationReport {
    /// The text that was checked, as given.
    pub input: String,

    /// Whether the identifier passed.
    pub valid: bool,

    /// Canonical `DD.DDD.DDD-C` form when valid.
    pub canonical: Option<String>,

    /// Human-readable rejection reason when invalid.
    pub reason: Option<String>,
}

impl ValidationReport {
    /// Validates `input` under `rule` and records the outcome.
    pub fn check(input: &str, rule: BodyRule) -> Self {
        match validate(input, rule) {
            Ok(rut) => ValidationReport {
                input: input.to_string(),
                valid: true,
                canonical: Some(rut.to_string()),
                reason: None,
            },
            Err(e) => ValidationReport {
                input: input.to_string(),
                valid: false,
                canonical: None,
                reason: Some(e.to_string()),
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
