//! # Field Handle
//!
//! The capability a UI host hands to the binder instead of global element
//! lookups and direct DOM mutation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Host side                         Binder side                          │
//! │  ─────────                         ───────────                          │
//! │  <input id="rut">  ◄── value / set_value ──────  RutField::on_input     │
//! │     selection      ◄── caret / set_caret ──────  caret preservation     │
//! │     classList      ◄── set_visual_state ───────  RutField::on_blur      │
//! │     attributes     ◄── set_attribute ──────────  bind (hints)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Caret positions are **character** indices into the value.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Visual State
// =============================================================================

/// Validity marker shown on the field. The two markers are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum VisualState {
    /// Neither marker (empty field).
    #[default]
    Neutral,
    /// Identifier passed the checksum.
    Valid,
    /// Identifier failed the checksum or is malformed.
    Invalid,
}

impl VisualState {
    /// Bootstrap-style class for hosts that style with CSS classes.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            VisualState::Neutral => None,
            VisualState::Valid => Some("is-valid"),
            VisualState::Invalid => Some("is-invalid"),
        }
    }
}

// =============================================================================
// Traits
// =============================================================================

/// A text input the binder can read and rewrite.
pub trait TextField {
    /// Current text. A missing value is the empty string.
    fn value(&self) -> String;

    /// Replaces the text.
    fn set_value(&mut self, value: &str);

    /// Caret position as a character index.
    fn caret(&self) -> usize;

    /// Moves the caret (collapsed selection).
    fn set_caret(&mut self, pos: usize);

    /// Shows exactly one validity marker, or none for [`VisualState::Neutral`].
    fn set_visual_state(&mut self, state: VisualState);

    /// Sets a presentational attribute such as `maxlength` or `placeholder`.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Resolves element identifiers to field handles.
pub trait FieldRegistry {
    type Field: TextField;

    /// Returns the field for `id`, or `None` when no such element exists.
    fn lookup(&mut self, id: &str) -> Option<Self::Field>;
}
