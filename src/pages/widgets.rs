// SPDX-License-Identifier: MPL-2.0

//! Shared widgets for the Multipicker application pages.

use crate::app::{Message, Notification, NotificationLevel, OptionsStatus};
use crate::fl;
use cosmic::iced::{Alignment, Length};
use cosmic::prelude::*;
use cosmic::widget::{self, icon};

/// Badge describing where the picker's options came from
pub fn options_status_badge(status: &OptionsStatus) -> Element<'static, Message> {
    match status {
        OptionsStatus::Builtin => widget::button::custom(widget::text::body(fl!("options-builtin")))
            .class(cosmic::theme::Button::Standard)
            .into(),
        OptionsStatus::Loading(_) => widget::button::custom(widget::text::body(fl!("loading")))
            .class(cosmic::theme::Button::Standard)
            .into(),
        OptionsStatus::Loaded(_) => widget::button::custom(
            widget::row::with_capacity(2)
                .push(icon::from_name("object-select-symbolic").size(16))
                .push(widget::text::body(fl!("options-from-file")))
                .spacing(4)
                .align_y(Alignment::Center),
        )
        .class(cosmic::theme::Button::Suggested)
        .into(),
        OptionsStatus::Error(_) => widget::button::custom(widget::text::body(fl!("error")))
            .class(cosmic::theme::Button::Destructive)
            .on_press(Message::ReloadOptions)
            .into(),
    }
}

/// Notification toast widget
pub fn notification_toast(notification: &Notification) -> Element<'_, Message> {
    let id = notification.id;

    let level_icon = match notification.level {
        NotificationLevel::Info => icon::from_name("dialog-information-symbolic").size(20),
        NotificationLevel::Success => icon::from_name("object-select-symbolic").size(20),
        NotificationLevel::Warning => icon::from_name("dialog-warning-symbolic").size(20),
        NotificationLevel::Error => icon::from_name("dialog-error-symbolic").size(20),
    };

    let content = widget::row::with_capacity(3)
        .push(level_icon)
        .push(
            widget::column::with_capacity(2)
                .push(widget::text::body(&notification.title))
                .push_maybe(if notification.message.is_empty() {
                    None
                } else {
                    Some(widget::text::caption(&notification.message))
                })
                .spacing(2)
                .width(Length::Fill),
        )
        .push(
            widget::button::icon(icon::from_name("window-close-symbolic"))
                .on_press(Message::DismissNotification(id))
                .class(cosmic::theme::Button::Standard),
        )
        .spacing(8)
        .align_y(Alignment::Center);

    widget::container(content)
        .padding(12)
        .width(Length::Fixed(400.0))
        .class(cosmic::style::Container::Card)
        .into()
}
