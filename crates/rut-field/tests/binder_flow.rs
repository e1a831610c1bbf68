//! End-to-end binder sessions against a host-defined field handle.
//!
//! `DomLikeField` mirrors what a browser host keeps per element: the value,
//! the selection, a class list and attributes.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use rut_core::FormatPolicy;
use rut_field::{bind, EditKind, FieldRegistry, InputOutcome, TextField, VisualState};

#[derive(Debug, Default)]
struct DomLikeField {
    value: String,
    selection: usize,
    class_list: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

impl DomLikeField {
    fn insert(&mut self, c: char) -> EditKind {
        let mut chars: Vec<char> = self.value.chars().collect();
        chars.insert(self.selection, c);
        self.value = chars.into_iter().collect();
        self.selection += 1;
        EditKind::from_input_type("insertText")
    }

    fn backspace(&mut self) -> EditKind {
        let mut chars: Vec<char> = self.value.chars().collect();
        if self.selection > 0 {
            chars.remove(self.selection - 1);
            self.selection -= 1;
        }
        self.value = chars.into_iter().collect();
        EditKind::from_input_type("deleteContentBackward")
    }
}

impl TextField for DomLikeField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        // Browsers move the caret to the end when the value is replaced.
        self.selection = self.value.chars().count();
    }

    fn caret(&self) -> usize {
        self.selection
    }

    fn set_caret(&mut self, pos: usize) {
        self.selection = pos;
    }

    fn set_visual_state(&mut self, state: VisualState) {
        self.class_list.remove("is-valid");
        self.class_list.remove("is-invalid");
        if let Some(class) = state.css_class() {
            self.class_list.insert(class.to_string());
        }
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

#[derive(Default)]
struct Document {
    elements: HashMap<String, DomLikeField>,
}

impl FieldRegistry for Document {
    type Field = DomLikeField;

    fn lookup(&mut self, id: &str) -> Option<DomLikeField> {
        self.elements.remove(id)
    }
}

fn document_with(id: &str) -> Document {
    let mut doc = Document::default();
    doc.elements.insert(id.to_string(), DomLikeField::default());
    doc
}

#[test]
fn search_filter_session_matches_stored_prefix() {
    let mut doc = document_with("filtro-rut");
    let mut field = bind(&mut doc, "filtro-rut", FormatPolicy::DatabaseMatchLeft).unwrap();
    assert!(field.field().attributes.is_empty());

    let stored = "14.567.890-1";
    for c in "1456".chars() {
        let edit = field.field_mut().insert(c);
        field.on_input(edit);
        assert!(stored.starts_with(&field.field().value()));
    }
    assert_eq!(field.field().value(), "14.56");

    // Backspace removes the '6'; the handler leaves the value alone.
    let edit = field.field_mut().backspace();
    assert_eq!(field.on_input(edit), InputOutcome::Skipped);
    assert_eq!(field.field().value(), "14.5");
}

#[test]
fn user_entry_session_marks_validity() {
    let mut doc = document_with("rut");
    let mut field = bind(&mut doc, "rut", FormatPolicy::UserEntryVariable).unwrap();
    assert_eq!(field.field().attributes.get("maxlength").map(String::as_str), Some("12"));

    for c in "76086428k".chars() {
        let edit = field.field_mut().insert(c);
        field.on_input(edit);
    }
    assert_eq!(field.field().value(), "76.086.428-K");

    field.on_blur();
    assert!(field.field().class_list.contains("is-invalid"));

    // Fix the check digit: backspace over 'K', type '5'.
    let edit = field.field_mut().backspace();
    field.on_input(edit);
    let edit = field.field_mut().insert('5');
    field.on_input(edit);

    assert_eq!(field.field().value(), "76.086.428-5");
    field.on_blur();
    assert!(field.field().class_list.contains("is-valid"));
    assert!(!field.field().class_list.contains("is-invalid"));
}

#[test]
fn simple_formatter_session_round_trips_on_focus_and_blur() {
    let mut doc = document_with("rut-simple");
    let mut field = bind(&mut doc, "rut-simple", FormatPolicy::SimpleFixedWidth).unwrap();

    for c in "1594350".chars() {
        let edit = field.field_mut().insert(c);
        assert_eq!(field.on_input(edit), InputOutcome::Skipped);
    }

    field.on_blur();
    assert_eq!(field.field().value(), "1.594.350");

    field.on_focus();
    assert_eq!(field.field().value(), "1594350");

    for c in "32".chars() {
        let edit = field.field_mut().insert(c);
        field.on_input(edit);
    }
    field.on_blur();
    assert_eq!(field.field().value(), "15.943.503-2");
}

#[test]
fn binding_unknown_element_leaves_document_untouched() {
    let mut doc = document_with("rut");
    assert!(bind(&mut doc, "otro", FormatPolicy::UserEntryVariable).is_none());
    assert!(doc.elements.contains_key("rut"));
}
