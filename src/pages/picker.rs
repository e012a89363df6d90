// SPDX-License-Identifier: MPL-2.0

//! Picker page view for the Multipicker application.

use crate::app::{AppModel, Message};
use crate::fl;
use crate::widgets::MultiPicker;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

use super::widgets::options_status_badge;

/// View for the Picker page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::row::with_capacity(2)
        .push(widget::text::title1(fl!("picker")))
        .push(options_status_badge(&app.options_status))
        .align_y(Alignment::Center)
        .spacing(space_m);

    let picker = MultiPicker::new(&app.picker, &app.options, &app.value, Message::Picker)
        .list_height(Length::Fill)
        .spacing(space_m);

    let value_text = if app.value.is_empty() {
        fl!("value-empty")
    } else {
        app.value.to_string()
    };

    let value_row = widget::row::with_capacity(4)
        .push(widget::text::body(fl!("current-value")))
        .push(
            widget::container(widget::text::body(value_text))
                .padding(space_s)
                .width(Length::Fill)
                .class(cosmic::style::Container::Card),
        )
        .push(
            widget::button::standard(fl!("copy-value"))
                .on_press_maybe((!app.value.is_empty()).then_some(Message::CopyValue)),
        )
        .push(
            widget::button::destructive(fl!("clear-selection"))
                .on_press_maybe((!app.value.is_empty()).then_some(Message::ClearSelection)),
        )
        .align_y(Alignment::Center)
        .spacing(space_s);

    widget::column::with_capacity(3)
        .push(header)
        .push(widget::container(picker).height(Length::Fill))
        .push(value_row)
        .spacing(space_m)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
