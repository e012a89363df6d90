// SPDX-License-Identifier: MPL-2.0

//! Messages emitted by the multi-picker widget.

use super::option::OptionId;

/// Events a single filter list reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterListMessage {
    /// The search input changed.
    FilterTextChanged(String),
    /// The highlighted rows changed.
    ///
    /// Always carries the complete highlighted set, not a delta.
    HighlightChanged(Vec<OptionId>),
    /// The confirm button was pressed.
    Confirm,
    /// The search input was cleared.
    ClearFilter,
}

/// Messages emitted by the multi-picker widget.
///
/// Wrap these in the parent's message type and hand them back to
/// [`MultiPickerState::update`](super::MultiPickerState::update).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMessage {
    /// Event from the list of options not yet chosen.
    Available(FilterListMessage),
    /// Event from the list of chosen options.
    Chosen(FilterListMessage),
}
