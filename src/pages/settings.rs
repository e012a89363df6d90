// SPDX-License-Identifier: MPL-2.0

//! Settings page view for the Multipicker application.

use crate::app::{AppModel, Message, OptionsStatus};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget;

/// View for the Settings page
pub fn view(app: &AppModel, space_s: u16, space_m: u16) -> Element<'_, Message> {
    let header = widget::text::title1(fl!("settings"));

    let picker_section = cosmic::widget::settings::section()
        .title(fl!("picker-config"))
        .add(
            cosmic::widget::settings::item::builder(fl!("unit"))
                .description(fl!("unit-description"))
                .control(
                    widget::text_input(fl!("unit-placeholder"), &app.unit_input)
                        .on_input(Message::UnitChanged)
                        .width(Length::Fixed(300.0)),
                ),
        )
        .add(
            cosmic::widget::settings::item::builder(fl!("options-file"))
                .description(fl!("options-file-description"))
                .control(
                    widget::text_input(fl!("options-file-placeholder"), &app.options_file_input)
                        .on_input(Message::OptionsFileChanged)
                        .width(Length::Fixed(300.0)),
                ),
        );

    let status_text = match &app.options_status {
        OptionsStatus::Builtin => fl!("options-builtin"),
        OptionsStatus::Loading(path) => format!("{}: {path}", fl!("loading")),
        OptionsStatus::Loaded(path) => format!("{}: {path}", fl!("options-from-file")),
        OptionsStatus::Error(e) => format!("{}: {e}", fl!("error")),
    };

    let actions = widget::row::with_capacity(3)
        .push(widget::button::suggested(fl!("save")).on_press(Message::SaveSettings))
        .push(widget::button::standard(fl!("reload-options")).on_press(Message::ReloadOptions))
        .push(widget::text::caption(status_text))
        .align_y(Alignment::Center)
        .spacing(space_s);

    widget::column::with_capacity(3)
        .push(header)
        .push(picker_section)
        .push(actions)
        .spacing(space_m)
        .width(Length::Fill)
        .into()
}
