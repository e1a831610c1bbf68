//! # Domain Types
//!
//! The checked [`Rut`] value.
//!
//! ## Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          One identifier                                 │
//! │                                                                         │
//! │   Rut { body: 15943503, check: Digit(2) }                               │
//! │        │                                                                │
//! │        ├── to_string()  → "15.943.503-2"   (canonical, stored form)     │
//! │        ├── compact()    → "159435032"      (raw token)                  │
//! │        └── serde        → "15.943.503-2"                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Rut` can only be built through validation or from a body whose check
//! digit is derived, so holding one means the checksum is correct.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum::{check_digit_for, CheckDigit};
use crate::error::{RutError, RutResult};
use crate::format::group_body;
use crate::validation::{validate, BodyRule};

/// Largest body that fits in 8 digits.
pub const MAX_BODY: u32 = 99_999_999;

// =============================================================================
// Rut
// =============================================================================

/// A Chilean RUT with a verified Modulo-11 check digit.
///
/// Leading zeros in the typed body are not preserved; they do not affect the
/// checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rut {
    body: u32,
    check: CheckDigit,
}

impl Rut {
    /// Builds a RUT from its numeric body, deriving the check digit.
    ///
    /// ## Example
    /// ```rust
    /// use rut_core::Rut;
    ///
    /// let rut = Rut::from_body(76086428).unwrap();
    /// assert_eq!(rut.to_string(), "76.086.428-5");
    /// assert!(Rut::from_body(100_000_000).is_err());
    /// ```
    pub fn from_body(body: u32) -> RutResult<Self> {
        Self::from_parts(body, check_digit_for(body))
    }

    /// Builds a RUT after confirming `check` matches `body`.
    pub(crate) fn from_parts(body: u32, check: CheckDigit) -> RutResult<Self> {
        if body > MAX_BODY {
            return Err(RutError::BodyOutOfRange(body));
        }

        let expected = check_digit_for(body);
        if expected != check {
            return Err(RutError::CheckDigitMismatch {
                expected,
                given: check,
            });
        }

        Ok(Rut { body, check })
    }

    /// Numeric body.
    #[inline]
    pub const fn body(&self) -> u32 {
        self.body
    }

    /// Check digit.
    #[inline]
    pub const fn check_digit(&self) -> CheckDigit {
        self.check
    }

    /// Raw token form without separators, e.g. `"159435032"`.
    pub fn compact(&self) -> String {
        format!("{}{}", self.body, self.check)
    }
}

impl fmt::Display for Rut {
    /// Canonical `DD.DDD.DDD-C` form, body grouped from the right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", group_body(&self.body.to_string()), self.check)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    /// Parses any punctuation of a RUT with 1–8 body digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s, BodyRule::Lenient)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.to_string()
    }
}

impl TryFrom<String> for Rut {
    type Error = RutError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
