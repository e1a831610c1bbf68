//! # Error Types
//!
//! Domain-specific error types for rut-core.
//!
//! ## Where Errors Appear
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surfaces                                  │
//! │                                                                         │
//! │  clean() / format()        → never fail (total functions)               │
//! │  is_valid() / is_valid_with() → bool, invalid input is `false`          │
//! │                                                                         │
//! │  validate() / Rut::from_str() / Rut::from_body()                        │
//! │  └── RutError  - the reason an identifier was rejected                  │
//! │                                                                         │
//! │  rut-cli                                                                │
//! │  └── CliError  - I/O and config failures (separate crate)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending values in the message
//! 3. An invalid identifier is a normal outcome; these variants describe it,
//!    they never abort formatting

use thiserror::Error;

use crate::checksum::CheckDigit;

// =============================================================================
// Rut Error
// =============================================================================

/// Reasons an identifier can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RutError {
    /// Nothing left after cleaning.
    #[error("RUT is empty")]
    Empty,

    /// A `K` appears somewhere other than the check position.
    #[error("RUT body must contain only digits")]
    InvalidCharacters,

    /// Body length is outside the accepted range for the rule in use.
    ///
    /// `len` counts body digits only (the check character is excluded).
    #[error("RUT body has {len} digits, expected between {min} and {max}")]
    InvalidLength { len: usize, min: usize, max: usize },

    /// The check character does not match the Modulo-11 result.
    #[error("RUT check digit is {given}, expected {expected}")]
    CheckDigitMismatch {
        expected: CheckDigit,
        given: CheckDigit,
    },

    /// Numeric body exceeds 8 digits.
    #[error("RUT body {0} is out of range")]
    BodyOutOfRange(u32),
}

impl RutError {
    /// Returns true if the input was structurally fine but failed the checksum.
    pub fn is_checksum_failure(&self) -> bool {
        matches!(self, RutError::CheckDigitMismatch { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with RutError.
pub type RutResult<T> = Result<T, RutError>;

// =============================================================================
// Unit Tests
// =============================================================================
