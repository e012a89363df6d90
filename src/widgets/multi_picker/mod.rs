// SPDX-License-Identifier: MPL-2.0

//! Dual-list multi-picker widget for form values.
//!
//! A multi-picker shows two searchable lists: the options that are not part
//! of the bound value, and the ones that are. Highlighting rows in either list
//! and confirming moves them across, which produces a single new value for
//! the form. The value can arrive as a `", "`-delimited string or as a list
//! of ids; replacements are always reported in the delimited form.
//!
//! # Example
//!
//! ```ignore
//! use crate::widgets::multi_picker::{
//!     MultiPicker, MultiPickerState, PickerMessage, PickerOption, PickerValue,
//! };
//!
//! // In your app state
//! struct AppModel {
//!     picker: MultiPickerState,
//!     options: Vec<PickerOption>,
//!     value: PickerValue,
//! }
//!
//! // In your message enum
//! enum Message {
//!     Picker(PickerMessage),
//! }
//!
//! // In your view function
//! fn view(&self) -> Element<'_, Message> {
//!     MultiPicker::new(&self.picker, &self.options, &self.value, Message::Picker).into()
//! }
//!
//! // In your update function
//! fn update(&mut self, message: Message) -> Task<Message> {
//!     match message {
//!         Message::Picker(msg) => {
//!             if let Some(value) = self.picker.update(&self.options, &self.value, msg) {
//!                 self.value = value;
//!             }
//!         }
//!     }
//!     Task::none()
//! }
//! ```

mod filter;
mod message;
mod option;
mod state;
mod value;
mod widget;

pub use message::PickerMessage;
pub use option::PickerOption;
pub use state::MultiPickerState;
pub use value::PickerValue;
pub use widget::MultiPicker;
