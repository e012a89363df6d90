// SPDX-License-Identifier: MPL-2.0

//! State management for the multi-picker widget.

use super::filter::{FilterLabels, FilterList};
use super::message::PickerMessage;
use super::option::{OptionId, PickerOption};
use super::value::PickerValue;

/// Options split by membership in the current value.
///
/// Both halves keep the order of the original option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'o> {
    /// Options not in the value.
    pub available: Vec<&'o PickerOption>,
    /// Options in the value.
    pub chosen: Vec<&'o PickerOption>,
}

/// Splits `options` into those not yet chosen and those already in `value`.
pub fn partition<'o>(options: &'o [PickerOption], value: &PickerValue) -> Partition<'o> {
    let selected = value.id_set();
    let (chosen, available): (Vec<_>, Vec<_>) = options
        .iter()
        .partition(|option| selected.contains(&option.value));
    Partition { available, chosen }
}

/// Adds `selection` to `value`.
pub fn apply_selection(value: &PickerValue, selection: &[OptionId]) -> PickerValue {
    value.union(selection)
}

/// Takes `selection` out of `value`.
pub fn remove_selection(value: &PickerValue, selection: &[OptionId]) -> PickerValue {
    value.difference(selection)
}

/// State for the multi-picker widget.
///
/// Holds only the two lists' transient search and highlight state. The
/// options and the form value belong to the parent and are passed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPickerState {
    unit: String,
    /// The list of options that can be added.
    pub available: FilterList,
    /// The list of options already chosen.
    pub chosen: FilterList,
}

impl Default for MultiPickerState {
    fn default() -> Self {
        Self::new("")
    }
}

impl MultiPickerState {
    /// Creates picker state whose labels are built from `unit`.
    pub fn new(unit: impl Into<String>) -> Self {
        let unit = unit.into();
        Self {
            available: FilterList::new(FilterLabels::available(&unit)),
            chosen: FilterList::new(FilterLabels::selected(&unit)),
            unit,
        }
    }

    /// Changes the unit and relabels both lists. Search and highlight are kept.
    pub fn set_unit(&mut self, unit: impl Into<String>) {
        self.unit = unit.into();
        self.available.set_labels(FilterLabels::available(&self.unit));
        self.chosen.set_labels(FilterLabels::selected(&self.unit));
    }

    /// Splits `options` by membership in `value`.
    pub fn partition<'o>(
        &self,
        options: &'o [PickerOption],
        value: &PickerValue,
    ) -> Partition<'o> {
        partition(options, value)
    }

    /// Applies a widget message against the current `options` and `value`.
    ///
    /// Returns the replacement value when a confirm produced one. Filter
    /// edits, highlight changes and empty confirms return `None`. Only rows
    /// the routed list currently shows can be committed.
    pub fn update(
        &mut self,
        options: &[PickerOption],
        value: &PickerValue,
        message: PickerMessage,
    ) -> Option<PickerValue> {
        let split = partition(options, value);
        match message {
            PickerMessage::Available(msg) => {
                let batch = self.available.update(msg, split.available)?;
                tracing::trace!(?batch, "adding to selection");
                Some(apply_selection(value, &batch))
            }
            PickerMessage::Chosen(msg) => {
                let batch = self.chosen.update(msg, split.chosen)?;
                tracing::trace!(?batch, "removing from selection");
                Some(remove_selection(value, &batch))
            }
        }
    }

    /// Prunes both highlights to the rows still shown after `options` or
    /// `value` changed outside the widget.
    pub fn sync(&mut self, options: &[PickerOption], value: &PickerValue) {
        let split = partition(options, value);
        self.available.retain_visible(split.available);
        self.chosen.retain_visible(split.chosen);
    }

    /// Clears search text and highlights in both lists.
    pub fn reset(&mut self) {
        self.available = FilterList::new(FilterLabels::available(&self.unit));
        self.chosen = FilterList::new(FilterLabels::selected(&self.unit));
    }
}

#[cfg(test)]
mod tests {
    use super::super::message::FilterListMessage;
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn options() -> Vec<PickerOption> {
        vec![
            PickerOption::new("a", "Alpha"),
            PickerOption::new("b", "Beta"),
        ]
    }

    fn values(list: &[&PickerOption]) -> Vec<String> {
        list.iter().map(|o| o.value.clone()).collect()
    }

    fn highlight(ids: &[&str]) -> FilterListMessage {
        FilterListMessage::HighlightChanged(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_value_leaves_everything_available() {
        let options = options();
        let split = partition(&options, &PickerValue::from(""));
        assert_eq!(values(&split.available), vec!["a", "b"]);
        assert!(split.chosen.is_empty());
    }

    #[test]
    fn test_confirm_on_available_adds() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("");

        let msg = PickerMessage::Available(highlight(&["a"]));
        assert_eq!(state.update(&options, &value, msg), None);
        let changed = state
            .update(&options, &value, PickerMessage::Available(FilterListMessage::Confirm))
            .unwrap();
        assert_eq!(changed, PickerValue::from("a"));
        assert!(state.available.highlighted().is_empty());

        let split = state.partition(&options, &changed);
        assert_eq!(values(&split.chosen), vec!["a"]);
        assert_eq!(values(&split.available), vec!["b"]);
    }

    #[test]
    fn test_confirm_on_chosen_removes() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("a, b");
        state.update(&options, &value, PickerMessage::Chosen(highlight(&["a"])));
        let changed = state.update(&options, &value, PickerMessage::Chosen(FilterListMessage::Confirm));
        assert_eq!(changed, Some(PickerValue::from("b")));
    }

    #[test]
    fn test_empty_confirm_reports_nothing() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("a");
        let confirm_chosen = PickerMessage::Chosen(FilterListMessage::Confirm);
        assert_eq!(state.update(&options, &value, confirm_chosen), None);
        let confirm_available = PickerMessage::Available(FilterListMessage::Confirm);
        assert_eq!(state.update(&options, &value, confirm_available), None);
        assert!(state.chosen.highlighted().is_empty());
    }

    #[test]
    fn test_filter_edits_never_change_value() {
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("a");
        let options = options();
        let msg = PickerMessage::Available(FilterListMessage::FilterTextChanged("bet".into()));
        assert_eq!(state.update(&options, &value, msg), None);

        let split = state.partition(&options, &value);
        assert_eq!(values(&state.available.filtered_options(split.available)), vec!["b"]);
    }

    #[test]
    fn test_empty_options_show_empty_labels() {
        let state = MultiPickerState::new("Rules");
        let split = state.partition(&[], &PickerValue::from("x"));
        assert!(split.available.is_empty() && split.chosen.is_empty());
        assert_eq!(state.available.empty_state_label(), "No rules available.");
        assert_eq!(state.chosen.empty_state_label(), "No rules selected.");
    }

    #[test]
    fn test_unknown_ids_survive_changes() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("ghost, a");
        state.update(&options, &value, PickerMessage::Chosen(highlight(&["a"])));
        let changed = state.update(&options, &value, PickerMessage::Chosen(FilterListMessage::Confirm));
        assert_eq!(changed, Some(PickerValue::from("ghost")));
    }

    #[test]
    fn test_set_unit_relabels() {
        let mut state = MultiPickerState::new("Rules");
        state.available.set_filter_text("x");
        state.set_unit("Locales");
        assert_eq!(state.available.labels().title, "Available Locales");
        assert_eq!(state.chosen.labels().confirm_label, "Remove Locales");
        assert_eq!(state.available.filter_text(), "x");

        state.reset();
        assert_eq!(state.available.filter_text(), "");
        assert_eq!(state.available.labels().title, "Available Locales");
    }

    #[test]
    fn test_filtered_out_highlight_is_not_added() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let value = PickerValue::from("");

        state.update(&options, &value, PickerMessage::Available(highlight(&["a"])));
        let msg = PickerMessage::Available(FilterListMessage::FilterTextChanged("bet".into()));
        state.update(&options, &value, msg);

        let confirm = PickerMessage::Available(FilterListMessage::Confirm);
        assert_eq!(state.update(&options, &value, confirm), None);
        assert!(state.available.highlighted().is_empty());
    }

    #[test]
    fn test_sync_drops_highlight_after_value_changes_elsewhere() {
        let options = options();
        let mut state = MultiPickerState::new("Letters");
        let before = PickerValue::from("");
        state.update(&options, &before, PickerMessage::Available(highlight(&["a", "b"])));

        let after = PickerValue::from("a");
        state.sync(&options, &after);
        assert_eq!(state.available.highlighted(), ["b".to_string()]);

        state.sync(&options[..1], &after);
        let split = state.partition(&options[..1], &after);
        assert!(!state.available.can_confirm(split.available));
        assert!(state.available.highlighted().is_empty());
    }

    fn arb_case() -> impl Strategy<Value = (Vec<PickerOption>, Vec<String>)> {
        prop::collection::hash_set("[a-z]{1,4}", 0..10).prop_flat_map(|ids| {
            let ids: Vec<String> = ids.into_iter().collect();
            let options: Vec<PickerOption> = ids
                .iter()
                .map(|id| PickerOption::new(id.clone(), id.to_uppercase()))
                .collect();
            let picked = prop::sample::subsequence(ids.clone(), 0..=ids.len());
            (Just(options), picked)
        })
    }

    proptest! {
        #[test]
        fn prop_partition_is_complete_and_disjoint((options, picked) in arb_case()) {
            let split = partition(&options, &PickerValue::from_ids(&picked));
            let available: HashSet<_> = values(&split.available).into_iter().collect();
            let chosen: HashSet<_> = values(&split.chosen).into_iter().collect();
            let all: HashSet<_> = options.iter().map(|o| o.value.clone()).collect();

            prop_assert!(available.is_disjoint(&chosen));
            prop_assert_eq!(available.union(&chosen).cloned().collect::<HashSet<_>>(), all);
            prop_assert_eq!(chosen, picked.into_iter().collect::<HashSet<_>>());
        }
    }
}
