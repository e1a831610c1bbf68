//! Presentational attributes applied to a field at bind time.

use rut_core::{FormatPolicy, MAX_FORMATTED_LEN, PLACEHOLDER};
use serde::{Deserialize, Serialize};

use crate::handle::TextField;

/// `maxlength` / `placeholder` for a bound field.
///
/// Hosts may ship these in their own config:
/// ```toml
/// max_length = 12
/// placeholder = "XX.XXX.XXX-X"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldHints {
    pub max_length: Option<usize>,
    pub placeholder: Option<String>,
}

impl FieldHints {
    /// Defaults per policy. Only the user-entry form constrains the field.
    pub fn for_policy(policy: FormatPolicy) -> Self {
        match policy {
            FormatPolicy::UserEntryVariable => FieldHints {
                max_length: Some(MAX_FORMATTED_LEN),
                placeholder: Some(PLACEHOLDER.to_string()),
            },
            FormatPolicy::DatabaseMatchLeft | FormatPolicy::SimpleFixedWidth => {
                FieldHints::default()
            }
        }
    }

    /// Writes the hints that are set onto `field`.
    pub fn apply<F: TextField>(&self, field: &mut F) {
        if let Some(max) = self.max_length {
            field.set_attribute("maxlength", &max.to_string());
        }
        if let Some(placeholder) = &self.placeholder {
            field.set_attribute("placeholder", placeholder);
        }
    }
}
