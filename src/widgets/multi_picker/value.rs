// SPDX-License-Identifier: MPL-2.0

//! The form value a multi-picker is bound to.

use super::option::OptionId;
use std::collections::HashSet;
use std::fmt;

/// Delimiter used when the value is carried as a single string.
pub const DELIMITER: &str = ", ";

/// The currently selected identifiers, as the form container supplies them.
///
/// Form bindings may hand over either a delimited string or a list. This is
/// the only place that distinguishes the two; everything else works on the
/// normalized id list from [`PickerValue::to_ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerValue {
    /// Identifiers joined by [`DELIMITER`].
    Delimited(String),
    /// Identifiers as an explicit list.
    List(Vec<OptionId>),
}

impl Default for PickerValue {
    fn default() -> Self {
        PickerValue::Delimited(String::new())
    }
}

impl PickerValue {
    /// Builds the delimited form from a list of identifiers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = ids
            .into_iter()
            .map(|id| id.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(DELIMITER);
        PickerValue::Delimited(joined)
    }

    /// Returns the selected identifiers in order.
    ///
    /// An empty delimited string means nothing is selected.
    pub fn to_ids(&self) -> Vec<OptionId> {
        match self {
            PickerValue::Delimited(s) if s.is_empty() => Vec::new(),
            PickerValue::Delimited(s) => s.split(DELIMITER).map(str::to_owned).collect(),
            PickerValue::List(ids) => ids.clone(),
        }
    }

    /// Returns the identifiers as a set for membership tests.
    pub fn id_set(&self) -> HashSet<OptionId> {
        self.to_ids().into_iter().collect()
    }

    /// Returns true if no identifier is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            PickerValue::Delimited(s) => s.is_empty(),
            PickerValue::List(ids) => ids.is_empty(),
        }
    }

    /// Union of the current ids and `selection`, first occurrence wins.
    pub fn union(&self, selection: &[OptionId]) -> Self {
        let mut seen = HashSet::new();
        let merged = self
            .to_ids()
            .into_iter()
            .chain(selection.iter().cloned())
            .filter(|id| seen.insert(id.clone()))
            .collect::<Vec<_>>();
        Self::from_ids(merged)
    }

    /// Current ids with everything in `selection` taken out.
    pub fn difference(&self, selection: &[OptionId]) -> Self {
        let removed: HashSet<&str> = selection.iter().map(String::as_str).collect();
        let remaining = self
            .to_ids()
            .into_iter()
            .filter(|id| !removed.contains(id.as_str()))
            .collect::<Vec<_>>();
        Self::from_ids(remaining)
    }
}

impl fmt::Display for PickerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerValue::Delimited(s) => f.write_str(s),
            PickerValue::List(ids) => f.write_str(&ids.join(DELIMITER)),
        }
    }
}

impl From<String> for PickerValue {
    fn from(value: String) -> Self {
        PickerValue::Delimited(value)
    }
}

impl From<&str> for PickerValue {
    fn from(value: &str) -> Self {
        PickerValue::Delimited(value.to_owned())
    }
}

impl From<Vec<OptionId>> for PickerValue {
    fn from(ids: Vec<OptionId>) -> Self {
        PickerValue::List(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn ids(list: &[&str]) -> Vec<OptionId> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalizes_both_representations() {
        assert_eq!(PickerValue::from("a, b").to_ids(), ids(&["a", "b"]));
        assert_eq!(PickerValue::from(ids(&["a", "b"])).to_ids(), ids(&["a", "b"]));
        assert!(PickerValue::default().to_ids().is_empty());
        assert!(PickerValue::List(Vec::new()).to_ids().is_empty());
    }

    #[test]
    fn test_union_dedupes_in_first_occurrence_order() {
        let value = PickerValue::from("b, a");
        let merged = value.union(&ids(&["c", "a", "c"]));
        assert_eq!(merged, PickerValue::from("b, a, c"));
    }

    #[test]
    fn test_difference_keeps_unknown_ids() {
        let value = PickerValue::from("ghost, a, b");
        assert_eq!(value.difference(&ids(&["a", "zzz"])), PickerValue::from("ghost, b"));
    }

    #[test]
    fn test_list_input_serializes_delimited() {
        let value = PickerValue::from(ids(&["a"]));
        assert_eq!(value.union(&ids(&["b"])), PickerValue::from("a, b"));
        assert_eq!(value.to_string(), "a");
    }

    fn id_set() -> impl Strategy<Value = Vec<OptionId>> {
        prop::collection::hash_set("[a-z0-9_-]{1,8}", 0..12)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_delimited_round_trip(set in id_set()) {
            prop_assert_eq!(PickerValue::from_ids(&set).to_ids(), set);
        }

        #[test]
        fn prop_union_is_idempotent(value in id_set(), selection in id_set()) {
            let once = PickerValue::from(value).union(&selection);
            let twice = once.union(&selection);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_remove_undoes_disjoint_add(value in id_set(), selection in id_set()) {
            let selection: Vec<_> = selection.into_iter().filter(|id| !value.contains(id)).collect();
            let original = PickerValue::from_ids(&value);
            let round_trip = original.union(&selection).difference(&selection);
            prop_assert_eq!(round_trip, original);
        }
    }
}
