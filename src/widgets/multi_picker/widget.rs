// SPDX-License-Identifier: MPL-2.0

//! Multi-picker widget builder and rendering.

use super::filter::FilterList;
use super::message::{FilterListMessage, PickerMessage};
use super::option::PickerOption;
use super::state::MultiPickerState;
use super::value::PickerValue;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};
use std::rc::Rc;

/// Builder for the multi-picker widget.
///
/// Renders the "available" and "selected" lists side by side. Options and
/// value are borrowed from the parent; the parent also owns the
/// [`MultiPickerState`] and feeds every emitted message back into
/// [`MultiPickerState::update`].
///
/// # Example
///
/// ```ignore
/// MultiPicker::new(&self.picker, &self.options, &self.value, Message::Picker)
///     .list_height(Length::Fixed(320.0))
///     .into()
/// ```
pub struct MultiPicker<'a, Message>
where
    Message: Clone + 'static,
{
    state: &'a MultiPickerState,
    options: &'a [PickerOption],
    value: &'a PickerValue,
    on_message: Rc<dyn Fn(PickerMessage) -> Message + 'a>,
    list_height: Length,
    spacing: u16,
}

impl<'a, Message> MultiPicker<'a, Message>
where
    Message: Clone + 'static,
{
    /// Creates a new multi-picker.
    ///
    /// # Arguments
    ///
    /// - `state`: search and highlight state of both lists (owned by parent)
    /// - `options`: every option that can be picked
    /// - `value`: the form value the picker is bound to
    /// - `on_message`: wraps `PickerMessage` into the parent's `Message` type
    pub fn new(
        state: &'a MultiPickerState,
        options: &'a [PickerOption],
        value: &'a PickerValue,
        on_message: impl Fn(PickerMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            options,
            value,
            on_message: Rc::new(on_message),
            list_height: Length::Fixed(280.0),
            spacing: 12,
        }
    }

    /// Sets the height of the option lists.
    ///
    /// Default is `Length::Fixed(280.0)`.
    pub fn list_height(mut self, height: Length) -> Self {
        self.list_height = height;
        self
    }

    /// Sets the spacing between the two lists.
    ///
    /// Default is 12.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Renders one row; highlighted rows get the primary style and a check mark.
    fn render_item(option: &PickerOption, is_highlighted: bool) -> Element<'a, Message> {
        let mut row = widget::row::with_capacity(2)
            .push(widget::text::body(option.label.clone()).width(Length::Fill))
            .align_y(Alignment::Center)
            .spacing(8);

        if is_highlighted {
            row = row.push(icon::from_name("object-select-symbolic").size(16));
        }

        let container_class = if is_highlighted {
            cosmic::style::Container::Primary
        } else {
            cosmic::style::Container::default()
        };

        widget::container(row)
            .padding(6)
            .width(Length::Fill)
            .class(container_class)
            .into()
    }

    /// Renders one framed list: title, search input, rows and confirm button.
    fn render_list(
        &self,
        list: &FilterList,
        options: Vec<&PickerOption>,
        wrap: fn(FilterListMessage) -> PickerMessage,
    ) -> Element<'a, Message> {
        let labels = list.labels();
        let visible = list.filtered_options(options);
        let can_confirm = list.can_confirm(visible.iter().copied());

        let on_message = Rc::clone(&self.on_message);
        let search = widget::search_input(
            labels.search_placeholder.clone(),
            list.filter_text().to_owned(),
        )
        .on_input(move |text| on_message(wrap(FilterListMessage::FilterTextChanged(text))))
        .on_clear((self.on_message)(wrap(FilterListMessage::ClearFilter)))
        .width(Length::Fill);

        let rows: Element<'a, Message> = if visible.is_empty() {
            widget::container(widget::text::caption(list.empty_state_label()))
                .padding(16)
                .width(Length::Fill)
                .align_x(cosmic::iced::alignment::Horizontal::Center)
                .into()
        } else {
            let mut column = widget::column::with_capacity(visible.len()).spacing(2);
            for option in visible {
                let is_highlighted = list.is_highlighted(&option.value);
                let toggle = (self.on_message)(wrap(FilterListMessage::HighlightChanged(
                    list.toggled(&option.value),
                )));
                column = column.push(
                    widget::mouse_area(Self::render_item(option, is_highlighted)).on_press(toggle),
                );
            }
            widget::scrollable(column).width(Length::Fill).into()
        };

        let confirm = widget::button::standard(labels.confirm_label.clone()).on_press_maybe(
            can_confirm.then(|| (self.on_message)(wrap(FilterListMessage::Confirm))),
        );

        widget::container(
            widget::column::with_capacity(4)
                .push(widget::text::title4(labels.title.clone()))
                .push(search)
                .push(widget::container(rows).height(self.list_height))
                .push(confirm)
                .spacing(8),
        )
        .padding(12)
        .width(Length::Fill)
        .class(cosmic::style::Container::Card)
        .into()
    }

    /// Builds the widget and returns it as an Element.
    pub fn build(self) -> Element<'a, Message> {
        let split = self.state.partition(self.options, self.value);

        let available =
            self.render_list(&self.state.available, split.available, PickerMessage::Available);
        let chosen = self.render_list(&self.state.chosen, split.chosen, PickerMessage::Chosen);

        widget::row::with_capacity(2)
            .push(available)
            .push(chosen)
            .spacing(self.spacing)
            .width(Length::Fill)
            .into()
    }
}

impl<'a, Message> From<MultiPicker<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'static,
{
    fn from(picker: MultiPicker<'a, Message>) -> Self {
        picker.build()
    }
}
