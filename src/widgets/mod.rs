// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Multipicker application.

pub mod multi_picker;

pub use multi_picker::{MultiPicker, MultiPickerState, PickerMessage, PickerOption, PickerValue};
