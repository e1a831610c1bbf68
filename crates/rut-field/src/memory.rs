//! In-memory field handles.
//!
//! Useful for headless hosts (server-rendered forms, terminal UIs) and for
//! driving the binder in tests. Editing helpers mimic what a browser does to
//! the value and caret before it fires the input event.

use std::collections::{BTreeMap, HashMap};

use crate::binder::EditKind;
use crate::handle::{FieldRegistry, TextField, VisualState};

/// A text field held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    value: String,
    caret: usize,
    visual: VisualState,
    attributes: BTreeMap<String, String>,
}

impl MemoryField {
    /// Creates a field holding `value` with the caret at the end.
    pub fn new(value: &str) -> Self {
        MemoryField {
            value: value.to_string(),
            caret: value.chars().count(),
            ..Default::default()
        }
    }

    /// Current validity marker.
    pub fn visual_state(&self) -> VisualState {
        self.visual
    }

    /// Attribute set through [`TextField::set_attribute`].
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Inserts `text` at the caret, as typing or pasting would.
    pub fn type_text(&mut self, text: &str) -> EditKind {
        let at = self.byte_offset(self.caret);
        self.value.insert_str(at, text);
        self.caret += text.chars().count();
        EditKind::Insert
    }

    /// Removes the character before the caret.
    pub fn backspace(&mut self) -> EditKind {
        if self.caret > 0 {
            let start = self.byte_offset(self.caret - 1);
            let end = self.byte_offset(self.caret);
            self.value.replace_range(start..end, "");
            self.caret -= 1;
        }
        EditKind::DeleteBackward
    }

    /// Removes the character after the caret.
    pub fn delete_forward(&mut self) -> EditKind {
        if self.caret < self.value.chars().count() {
            let start = self.byte_offset(self.caret);
            let end = self.byte_offset(self.caret + 1);
            self.value.replace_range(start..end, "");
        }
        EditKind::DeleteForward
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }
}

impl TextField for MemoryField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.caret = self.caret.min(self.value.chars().count());
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, pos: usize) {
        self.caret = pos.min(self.value.chars().count());
    }

    fn set_visual_state(&mut self, state: VisualState) {
        self.visual = state;
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Registry of [`MemoryField`]s keyed by element id.
///
/// Lookup hands the field over to the caller.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    fields: HashMap<String, MemoryField>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a field under `id`, replacing any previous one.
    pub fn insert(&mut self, id: &str, field: MemoryField) {
        self.fields.insert(id.to_string(), field);
    }
}

impl FieldRegistry for MemoryRegistry {
    type Field = MemoryField;

    fn lookup(&mut self, id: &str) -> Option<MemoryField> {
        self.fields.remove(id)
    }
}
