// SPDX-License-Identifier: MPL-2.0

//! Option type for the multi-picker widget.

use serde::{Deserialize, Serialize};

/// Unique identifier of a picker option.
pub type OptionId = String;

/// Separator placed between value and label when building the searchable text.
const SEARCH_SEPARATOR: &str = "   ";

/// A single selectable entry: an identifier plus the text shown for it.
///
/// Missing fields deserialize to empty strings. An option without a value
/// still renders; it just never matches a filter that needs the value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PickerOption {
    /// Unique identifier, the thing stored in the form value.
    #[serde(default)]
    pub value: OptionId,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

impl PickerOption {
    /// Creates a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Lowercased `value` and `label` joined, used for substring filtering.
    pub fn search_text(&self) -> String {
        [self.value.as_str(), self.label.as_str()]
            .join(SEARCH_SEPARATOR)
            .to_lowercase()
    }

    /// Returns true if `needle` (already lowercased) occurs in the search text.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.search_text().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_joins_value_and_label() {
        let option = PickerOption::new("pref-a", "Alpha Pref");
        assert_eq!(option.search_text(), "pref-a   alpha pref");
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let option: PickerOption = serde_json::from_str(r#"{"label": "Orphan"}"#).unwrap();
        assert_eq!(option.value, "");
        assert_eq!(option.label, "Orphan");
        assert!(!option.matches_lowercase("x"));
        assert!(option.matches_lowercase("orph"));
    }
}
