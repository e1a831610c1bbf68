//! # rut-core: Pure Identifier Logic
//!
//! Cleaning, Modulo-11 validation and display formatting for Chilean RUT
//! numbers, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RUT Kit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 Form host (browser, desktop, tests)             │    │
//! │  │        input / focus / blur events  ──►  TextField handle       │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │                 rut-field (binder, caret handling)              │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ rut-core (THIS CRATE) ★                         │    │
//! │  │                                                                 │    │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌────────────┐      │    │
//! │  │   │  clean   │  │ checksum │  │  format  │  │ validation │      │    │
//! │  │   │ [0-9K]   │  │ Mod-11   │  │ 3 policy │  │ BodyRule   │      │    │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └────────────┘      │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO UI TOOLKIT • PURE FUNCTIONS                       │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐    │
//! │  │                 rut-cli (server-side re-validation)             │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`clean`] - Reduce field text to the raw `[0-9K]` token
//! - [`checksum`] - Modulo-11 check digit
//! - [`format`] - Separator placement policies
//! - [`validation`] - Validators and body length rules
//! - [`types`] - The checked [`Rut`] value
//! - [`error`] - Rejection reasons
//!
//! ## Example Usage
//!
//! ```rust
//! use rut_core::{format, is_valid, FormatPolicy, Rut};
//!
//! // Punctuate while typing
//! assert_eq!(format("159435032", FormatPolicy::UserEntryVariable), "15.943.503-2");
//!
//! // Check on blur
//! assert!(is_valid("15.943.503-2"));
//!
//! // Parse for storage
//! let rut: Rut = "15943503-2".parse().unwrap();
//! assert_eq!(rut.to_string(), "15.943.503-2");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod clean;
pub mod error;
pub mod format;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use checksum::{compute_check_digit, CheckDigit};
pub use clean::{clean, clean_optional, is_content_char, MAX_RAW_LEN};
pub use error::{RutError, RutResult};
pub use format::{format, group_body, FormatPolicy};
pub use types::Rut;
pub use validation::{is_canonical, is_valid, is_valid_with, validate, BodyRule, ValidationReport};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest formatted value any policy produces (`DD.DDD.DDD-C`).
///
/// Hosts use it as the field's `maxlength`.
pub const MAX_FORMATTED_LEN: usize = 12;

/// Placeholder shown in empty identifier fields.
pub const PLACEHOLDER: &str = "XX.XXX.XXX-X";
