// SPDX-License-Identifier: MPL-2.0

//! One searchable, multi-selectable option list.

use super::message::FilterListMessage;
use super::option::{OptionId, PickerOption};
use std::collections::HashSet;

/// Display strings for a filter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLabels {
    /// Heading shown above the list.
    pub title: String,
    /// Placeholder of the search input.
    pub search_placeholder: String,
    /// Text of the confirm button.
    pub confirm_label: String,
    /// Shown when the list is empty and no filter is active.
    pub empty_label: String,
}

impl FilterLabels {
    /// Labels for the list of options that can still be added.
    pub fn available(unit: &str) -> Self {
        Self {
            title: format!("Available {unit}"),
            search_placeholder: format!("Filter Available {unit}"),
            confirm_label: format!("Add {unit}"),
            empty_label: format!("No {} available.", unit.to_lowercase()),
        }
    }

    /// Labels for the list of options already chosen.
    pub fn selected(unit: &str) -> Self {
        Self {
            title: format!("Selected {unit}"),
            search_placeholder: format!("Filter Selected {unit}"),
            confirm_label: format!("Remove {unit}"),
            empty_label: format!("No {} selected.", unit.to_lowercase()),
        }
    }
}

/// Keeps the options whose value or label contains `search`, ignoring case.
///
/// Order is preserved. An empty search keeps everything.
pub fn filter_options<'o, I>(options: I, search: &str) -> Vec<&'o PickerOption>
where
    I: IntoIterator<Item = &'o PickerOption>,
{
    let needle = search.to_lowercase();
    options
        .into_iter()
        .filter(|option| option.matches_lowercase(&needle))
        .collect()
}

/// State of one list: the search text and the rows highlighted but not yet
/// confirmed.
///
/// The options themselves are not stored; the parent lends them each frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterList {
    labels: FilterLabels,
    filter_text: String,
    highlighted: Vec<OptionId>,
}

impl FilterList {
    /// Creates an empty list state with the given labels.
    pub fn new(labels: FilterLabels) -> Self {
        Self {
            labels,
            filter_text: String::new(),
            highlighted: Vec::new(),
        }
    }

    pub fn labels(&self) -> &FilterLabels {
        &self.labels
    }

    pub fn set_labels(&mut self, labels: FilterLabels) {
        self.labels = labels;
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter_text.clear();
    }

    pub fn highlighted(&self) -> &[OptionId] {
        &self.highlighted
    }

    /// Replaces the highlighted set. Empty identifiers are dropped.
    pub fn set_highlighted(&mut self, ids: Vec<OptionId>) {
        self.highlighted = ids.into_iter().filter(|id| !id.is_empty()).collect();
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.iter().any(|h| h == id)
    }

    /// Returns the highlighted set that results from toggling `id`.
    pub fn toggled(&self, id: &str) -> Vec<OptionId> {
        if self.is_highlighted(id) {
            self.highlighted.iter().filter(|h| *h != id).cloned().collect()
        } else {
            let mut next = self.highlighted.clone();
            next.push(id.to_owned());
            next
        }
    }

    /// Adds `id` to the highlight, or removes it if already there.
    pub fn toggle_highlight(&mut self, id: &str) {
        let next = self.toggled(id);
        self.set_highlighted(next);
    }

    /// Drops highlighted ids that are not among the rows `options` shows
    /// under the current search text.
    pub fn retain_visible<'o, I>(&mut self, options: I)
    where
        I: IntoIterator<Item = &'o PickerOption>,
    {
        let visible: HashSet<&str> = self
            .filtered_options(options)
            .into_iter()
            .map(|option| option.value.as_str())
            .collect();
        self.highlighted.retain(|id| visible.contains(id.as_str()));
    }

    /// The confirm action is only offered while a visible row is highlighted.
    pub fn can_confirm<'o, I>(&self, options: I) -> bool
    where
        I: IntoIterator<Item = &'o PickerOption>,
    {
        self.filtered_options(options)
            .iter()
            .any(|option| self.is_highlighted(&option.value))
    }

    /// Takes the highlighted rows still visible in `options` and clears the
    /// highlight.
    ///
    /// Returns `None` when no visible row is highlighted. The search text is
    /// kept.
    pub fn confirm<'o, I>(&mut self, options: I) -> Option<Vec<OptionId>>
    where
        I: IntoIterator<Item = &'o PickerOption>,
    {
        self.retain_visible(options);
        if self.highlighted.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.highlighted))
    }

    /// Options from `options` that pass the current search text.
    pub fn filtered_options<'o, I>(&self, options: I) -> Vec<&'o PickerOption>
    where
        I: IntoIterator<Item = &'o PickerOption>,
    {
        filter_options(options, &self.filter_text)
    }

    /// Message for an empty list: a "no results" note while filtering,
    /// otherwise the configured empty label.
    pub fn empty_state_label(&self) -> String {
        if self.filter_text.is_empty() {
            self.labels.empty_label.clone()
        } else {
            format!("No results found for \"{}\"", self.filter_text)
        }
    }

    /// Applies an event against the rows of `options` this list holds.
    ///
    /// Only a confirm with a visible highlight yields a batch. Every other
    /// event leaves the highlight pruned to the rows still shown.
    pub fn update<'o, I>(&mut self, message: FilterListMessage, options: I) -> Option<Vec<OptionId>>
    where
        I: IntoIterator<Item = &'o PickerOption>,
    {
        match message {
            FilterListMessage::FilterTextChanged(text) => self.set_filter_text(text),
            FilterListMessage::HighlightChanged(ids) => self.set_highlighted(ids),
            FilterListMessage::ClearFilter => self.clear_filter(),
            FilterListMessage::Confirm => return self.confirm(options),
        }
        self.retain_visible(options);
        None
    }
}
