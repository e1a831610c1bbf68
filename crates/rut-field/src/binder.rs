//! # Binder
//!
//! Wires a [`TextField`] to the rut-core cleaner, formatter and validator.
//!
//! ## Event Handling per Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Event   DatabaseMatchLeft   UserEntryVariable        SimpleFixedWidth  │
//! │  ─────   ─────────────────   ─────────────────        ────────────────  │
//! │  input   reformat, skip on   reformat + keep caret,   (nothing)         │
//! │          deletions           skip separator-only                        │
//! │                              deletions                                  │
//! │  focus   (nothing)           (nothing)                strip to raw      │
//! │  blur    (nothing)           valid / invalid marker   reformat          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Deletions
//! A deleted separator must stay deleted. The search filter leaves every
//! deletion alone; the user-entry form leaves it alone when the raw token
//! did not change.

use rut_core::clean::truncate_raw;
use rut_core::{clean, format, is_valid, FormatPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::caret::{caret_after_content, content_before, step_back_over_separator};
use crate::handle::{FieldRegistry, TextField, VisualState};
use crate::hints::FieldHints;

// =============================================================================
// Edit Kind
// =============================================================================

/// What kind of edit produced an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum EditKind {
    /// Typing, pasting or dropping text.
    Insert,
    /// Backspace and other deletions toward the start.
    DeleteBackward,
    /// Delete key and other deletions toward the end.
    DeleteForward,
    /// Anything else (undo, autofill, script).
    Other,
}

impl EditKind {
    /// Maps a DOM `InputEvent.inputType` string.
    ///
    /// ```rust
    /// use rut_field::EditKind;
    ///
    /// assert_eq!(EditKind::from_input_type("deleteContentBackward"), EditKind::DeleteBackward);
    /// assert_eq!(EditKind::from_input_type("insertText"), EditKind::Insert);
    /// ```
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.starts_with("delete") {
            if input_type.ends_with("Forward") {
                EditKind::DeleteForward
            } else {
                EditKind::DeleteBackward
            }
        } else if input_type.starts_with("insert") {
            EditKind::Insert
        } else {
            EditKind::Other
        }
    }

    /// True for backspace / delete style edits.
    pub fn is_deletion(&self) -> bool {
        matches!(self, EditKind::DeleteBackward | EditKind::DeleteForward)
    }
}

// =============================================================================
// Input Outcome
// =============================================================================

/// What an input handler did to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Value already had the right shape.
    Unchanged,
    /// Left alone on purpose (deletion, or a policy without live formatting).
    Skipped,
    /// Nothing significant left; value emptied and marker cleared.
    Cleared,
    /// Value rewritten; caret moved to `caret`.
    Reformatted { caret: usize },
}

// =============================================================================
// Bound Field
// =============================================================================

/// A text field with RUT handlers attached.
///
/// The host forwards its input / focus / blur events to the `on_*` methods.
#[derive(Debug)]
pub struct RutField<F: TextField> {
    id: String,
    policy: FormatPolicy,
    field: F,
    /// Raw token as of the last handled event.
    last_raw: String,
}

/// Looks up `element_id` and binds it with the default hints for `policy`.
///
/// A missing element is not an error: a warning is logged and `None` returned.
pub fn bind<R: FieldRegistry>(
    registry: &mut R,
    element_id: &str,
    policy: FormatPolicy,
) -> Option<RutField<R::Field>> {
    bind_with_hints(registry, element_id, policy, &FieldHints::for_policy(policy))
}

/// [`bind`] with explicit field hints.
pub fn bind_with_hints<R: FieldRegistry>(
    registry: &mut R,
    element_id: &str,
    policy: FormatPolicy,
    hints: &FieldHints,
) -> Option<RutField<R::Field>> {
    let Some(mut field) = registry.lookup(element_id) else {
        warn!(element_id, "RUT field not found, nothing bound");
        return None;
    };

    hints.apply(&mut field);
    info!(element_id, %policy, "RUT formatter bound");

    Some(RutField::new(element_id, policy, field))
}

impl<F: TextField> RutField<F> {
    /// Attaches handlers to an already resolved field.
    pub fn new(id: &str, policy: FormatPolicy, field: F) -> Self {
        let last_raw = truncate_raw(&clean(&field.value())).to_string();
        RutField {
            id: id.to_string(),
            policy,
            field,
            last_raw,
        }
    }

    /// Element id this field was bound under.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Formatting policy in use.
    pub fn policy(&self) -> FormatPolicy {
        self.policy
    }

    /// The underlying handle.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access, e.g. for the host to apply an edit before `on_input`.
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    /// Detaches the handlers and returns the handle.
    pub fn into_inner(self) -> F {
        self.field
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Handles an input event; the field already holds the edited value.
    pub fn on_input(&mut self, edit: EditKind) -> InputOutcome {
        let outcome = match self.policy {
            FormatPolicy::DatabaseMatchLeft => self.input_left_anchored(edit),
            FormatPolicy::UserEntryVariable => self.input_user_entry(edit),
            FormatPolicy::SimpleFixedWidth => InputOutcome::Skipped,
        };

        self.last_raw = truncate_raw(&clean(&self.field.value())).to_string();
        debug!(id = %self.id, ?edit, ?outcome, "RUT input handled");
        outcome
    }

    /// Handles focus. The simple formatter strips punctuation for editing.
    ///
    /// Returns true if the value changed.
    pub fn on_focus(&mut self) -> bool {
        if self.policy != FormatPolicy::SimpleFixedWidth {
            return false;
        }

        let current = self.field.value();
        let raw = clean(&current);
        if raw == current {
            return false;
        }

        self.field.set_value(&raw);
        self.field.set_caret(raw.chars().count());
        debug!(id = %self.id, "RUT punctuation stripped on focus");
        true
    }

    /// Handles blur.
    ///
    /// User entry: sets and returns the validity marker.
    /// Simple formatter: rewrites the value in full punctuated form.
    pub fn on_blur(&mut self) -> Option<VisualState> {
        match self.policy {
            FormatPolicy::UserEntryVariable => {
                let value = self.field.value();
                let value = value.trim();

                let state = if value.is_empty() {
                    VisualState::Neutral
                } else if is_valid(value) {
                    VisualState::Valid
                } else {
                    VisualState::Invalid
                };

                self.field.set_visual_state(state);
                debug!(id = %self.id, ?state, "RUT validated on blur");
                Some(state)
            }
            FormatPolicy::SimpleFixedWidth => {
                let current = self.field.value();
                let formatted = format(&current, self.policy);
                if formatted != current {
                    self.field.set_value(&formatted);
                }
                self.last_raw = truncate_raw(&clean(&formatted)).to_string();
                None
            }
            FormatPolicy::DatabaseMatchLeft => None,
        }
    }

    // =========================================================================
    // Policy-specific input handling
    // =========================================================================

    fn input_left_anchored(&mut self, edit: EditKind) -> InputOutcome {
        if edit.is_deletion() {
            return InputOutcome::Skipped;
        }

        let current = self.field.value();
        let formatted = format(&current, self.policy);
        if formatted == current {
            return InputOutcome::Unchanged;
        }

        self.field.set_value(&formatted);
        let caret = formatted.chars().count();
        self.field.set_caret(caret);
        InputOutcome::Reformatted { caret }
    }

    fn input_user_entry(&mut self, edit: EditKind) -> InputOutcome {
        let current = self.field.value();
        let raw = clean(&current);

        if raw.is_empty() {
            self.field.set_value("");
            self.field.set_visual_state(VisualState::Neutral);
            return InputOutcome::Cleared;
        }

        // Only separators went away; putting them back would undo the edit.
        if edit.is_deletion() && truncate_raw(&raw) == self.last_raw {
            return InputOutcome::Skipped;
        }

        let formatted = format(&raw, self.policy);
        if formatted == current {
            return InputOutcome::Unchanged;
        }

        let content = content_before(&current, self.field.caret());
        self.field.set_value(&formatted);

        let mut caret = caret_after_content(&formatted, content);
        if edit.is_deletion() {
            caret = step_back_over_separator(&formatted, caret);
        }
        self.field.set_caret(caret);

        InputOutcome::Reformatted { caret }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryField, MemoryRegistry};

    fn bound(value: &str, policy: FormatPolicy) -> RutField<MemoryField> {
        RutField::new("rut", policy, MemoryField::new(value))
    }

    /// Types `text` one character at a time, firing an input event for each.
    fn type_chars(field: &mut RutField<MemoryField>, text: &str) {
        for c in text.chars() {
            let edit = field.field_mut().type_text(&c.to_string());
            field.on_input(edit);
        }
    }

    #[test]
    fn test_edit_kind_from_input_type() {
        assert_eq!(
            EditKind::from_input_type("deleteContentForward"),
            EditKind::DeleteForward
        );
        assert_eq!(
            EditKind::from_input_type("deleteWordBackward"),
            EditKind::DeleteBackward
        );
        assert_eq!(
            EditKind::from_input_type("insertFromPaste"),
            EditKind::Insert
        );
        assert_eq!(EditKind::from_input_type("historyUndo"), EditKind::Other);
        assert!(!EditKind::Other.is_deletion());
    }

    #[test]
    fn test_bind_missing_element_is_noop() {
        let mut registry = MemoryRegistry::new();
        assert!(bind(&mut registry, "missing", FormatPolicy::UserEntryVariable).is_none());
    }

    #[test]
    fn test_bind_applies_user_entry_hints() {
        let mut registry = MemoryRegistry::new();
        registry.insert("rut", MemoryField::default());

        let field = bind(&mut registry, "rut", FormatPolicy::UserEntryVariable).unwrap();
        assert_eq!(field.id(), "rut");
        assert_eq!(field.field().attribute("maxlength"), Some("12"));
        assert_eq!(field.field().attribute("placeholder"), Some("XX.XXX.XXX-X"));
    }

    #[test]
    fn test_left_anchored_typing() {
        let mut field = bound("", FormatPolicy::DatabaseMatchLeft);
        type_chars(&mut field, "145678901");
        assert_eq!(field.field().value(), "14.567.890-1");
    }

    #[test]
    fn test_left_anchored_deletion_keeps_separator_deleted() {
        let mut field = bound("", FormatPolicy::DatabaseMatchLeft);
        type_chars(&mut field, "145");
        assert_eq!(field.field().value(), "14.5");

        // Remove the '5', then the '.' that precedes it.
        let edit = field.field_mut().backspace();
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);
        let edit = field.field_mut().backspace();
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);
        assert_eq!(field.field().value(), "14");
    }

    #[test]
    fn test_user_entry_typing() {
        let mut field = bound("", FormatPolicy::UserEntryVariable);
        type_chars(&mut field, "159435032");
        assert_eq!(field.field().value(), "15.943.503-2");
        assert_eq!(field.field().caret(), 12);
    }

    #[test]
    fn test_user_entry_separator_deletion_is_not_regenerated() {
        let mut field = bound("15.943.503-2", FormatPolicy::UserEntryVariable);
        field.field_mut().set_caret(3);

        let edit = field.field_mut().backspace();
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);
        assert_eq!(field.field().value(), "15943.503-2");
    }

    #[test]
    fn test_user_entry_digit_deletion_regroups_and_keeps_caret() {
        let mut field = bound("15.943.503-2", FormatPolicy::UserEntryVariable);
        // Caret right after the '9'.
        field.field_mut().set_caret(4);

        let edit = field.field_mut().backspace();
        let outcome = field.on_input(edit);

        assert_eq!(field.field().value(), "1.543.503-2");
        assert_eq!(outcome, InputOutcome::Reformatted { caret: 3 });
        // Caret sits between '5' and '4', as before the regroup.
        assert_eq!(&field.field().value()[..3], "1.5");
    }

    #[test]
    fn test_user_entry_deleting_first_digit_puts_caret_at_start() {
        let mut field = bound("1.234-5", FormatPolicy::UserEntryVariable);
        field.field_mut().set_caret(1);

        let edit = field.field_mut().backspace();
        let outcome = field.on_input(edit);

        assert_eq!(field.field().value(), "234-5");
        assert_eq!(outcome, InputOutcome::Reformatted { caret: 0 });
    }

    #[test]
    fn test_user_entry_insert_in_middle_keeps_caret() {
        let mut field = bound("12.345-6", FormatPolicy::UserEntryVariable);
        field.field_mut().set_caret(4);

        let edit = field.field_mut().type_text("9");
        field.on_input(edit);

        assert_eq!(field.field().value(), "123.945-6");
        // Caret follows the inserted '9', past the regrouped separator.
        assert_eq!(field.field().caret(), 5);
    }

    #[test]
    fn test_user_entry_clearing_resets_marker() {
        let mut field = bound("5", FormatPolicy::UserEntryVariable);
        field.field_mut().set_visual_state(VisualState::Invalid);

        let edit = field.field_mut().backspace();
        assert_eq!(field.on_input(edit), InputOutcome::Cleared);
        assert_eq!(field.field().value(), "");
        assert_eq!(field.field().visual_state(), VisualState::Neutral);
    }

    #[test]
    fn test_user_entry_blur_markers() {
        let mut field = bound("15.943.503-2", FormatPolicy::UserEntryVariable);
        assert_eq!(field.on_blur(), Some(VisualState::Valid));
        assert_eq!(field.field().visual_state(), VisualState::Valid);

        field.field_mut().set_value("15.943.503-3");
        assert_eq!(field.on_blur(), Some(VisualState::Invalid));
        assert_eq!(field.field().visual_state(), VisualState::Invalid);

        field.field_mut().set_value("   ");
        assert_eq!(field.on_blur(), Some(VisualState::Neutral));
        assert_eq!(field.field().visual_state(), VisualState::Neutral);
    }

    #[test]
    fn test_simple_focus_and_blur() {
        let mut field = bound("15.943.503-2", FormatPolicy::SimpleFixedWidth);

        assert!(field.on_focus());
        assert_eq!(field.field().value(), "159435032");
        assert!(!field.on_focus());

        let edit = field.field_mut().type_text("9");
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);

        assert_eq!(field.on_blur(), None);
        assert_eq!(field.field().value(), "15.943.503-2");
    }

    #[test]
    fn test_user_entry_forward_delete_separator_then_digit() {
        let mut field = bound("15.943.503-2", FormatPolicy::UserEntryVariable);
        field.field_mut().set_caret(2);

        // Delete removes the '.' after "15": raw token unchanged, left alone.
        let edit = field.field_mut().delete_forward();
        assert_eq!(edit, EditKind::DeleteForward);
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);
        assert_eq!(field.field().value(), "15943.503-2");
        assert_eq!(field.field().caret(), 2);

        // Delete again removes the '9': regrouped, caret stays after the '5'.
        let edit = field.field_mut().delete_forward();
        let outcome = field.on_input(edit);
        assert_eq!(field.field().value(), "1.543.503-2");
        assert_eq!(outcome, InputOutcome::Reformatted { caret: 3 });
        assert_eq!(field.field().caret(), 3);
    }

    #[test]
    fn test_into_inner_returns_edited_handle() {
        let mut field = bound("", FormatPolicy::UserEntryVariable);
        type_chars(&mut field, "76086428");
        field.on_blur();

        let handle = field.into_inner();
        assert_eq!(handle.value(), "7.608.642-8");
        assert_eq!(handle.visual_state(), VisualState::Invalid);
    }

    #[test]
    fn test_simple_blur_partial_body() {
        let mut field = bound("1594350", FormatPolicy::SimpleFixedWidth);
        field.on_blur();
        assert_eq!(field.field().value(), "1.594.350");
    }
}
