//! # rut-field: Text-Field Binder
//!
//! Attaches RUT cleaning, formatting and validation to a text input without
//! depending on any UI toolkit. The host implements [`TextField`] (and
//! optionally [`FieldRegistry`]) and forwards its events.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  keystroke ──► host updates value ──► RutField::on_input(EditKind)      │
//! │                                          │                              │
//! │                                          ├── clean()                    │
//! │                                          ├── format(policy)             │
//! │                                          └── caret repositioning        │
//! │                                                                         │
//! │  focus     ──► RutField::on_focus()  (simple policy: strip to raw)      │
//! │  blur      ──► RutField::on_blur()   (user entry: valid / invalid)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use rut_core::FormatPolicy;
//! use rut_field::{bind, MemoryField, MemoryRegistry, TextField, VisualState};
//!
//! let mut registry = MemoryRegistry::new();
//! registry.insert("rut", MemoryField::default());
//!
//! let mut field = bind(&mut registry, "rut", FormatPolicy::UserEntryVariable).unwrap();
//! for c in "159435032".chars() {
//!     let edit = field.field_mut().type_text(&c.to_string());
//!     field.on_input(edit);
//! }
//! assert_eq!(field.field().value(), "15.943.503-2");
//! assert_eq!(field.on_blur(), Some(VisualState::Valid));
//! ```

pub mod binder;
pub mod caret;
pub mod handle;
pub mod hints;
pub mod memory;

pub use binder::{bind, bind_with_hints, EditKind, InputOutcome, RutField};
pub use handle::{FieldRegistry, TextField, VisualState};
pub use hints::FieldHints;
pub use memory::{MemoryField, MemoryRegistry};
