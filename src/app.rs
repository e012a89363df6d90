// SPDX-License-Identifier: MPL-2.0

use crate::config::Config;
use crate::fl;
use crate::options;
use crate::pages;
use crate::widgets::{MultiPickerState, PickerMessage, PickerOption, PickerValue};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget::{self, about::About, icon, menu, nav_bar};
use std::collections::HashMap;

const REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");
const APP_ICON: &[u8] = include_bytes!("../resources/icons/hicolor/scalable/apps/icon.svg");

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    context_page: ContextPage,
    /// The about page for this app.
    about: About,
    /// Contains items assigned to the nav bar panel.
    nav: nav_bar::Model,
    /// Key bindings for the application's menu bar.
    key_binds: HashMap<menu::KeyBind, MenuAction>,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Cosmic config context for saving
    config_context: Option<cosmic_config::Config>,

    // === Form state ===
    /// Every option the picker offers
    pub options: Vec<PickerOption>,
    /// Where the current options came from
    pub options_status: OptionsStatus,
    /// The form value bound to the picker
    pub value: PickerValue,
    /// Search and highlight state of the picker's two lists
    pub picker: MultiPickerState,

    // === Settings inputs ===
    /// Temporary unit input (before saving)
    pub unit_input: String,
    /// Temporary options file input (before saving)
    pub options_file_input: String,

    /// Active notifications to display
    pub notifications: Vec<Notification>,
    /// Counter for generating unique notification IDs
    pub notification_id_counter: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsStatus {
    #[default]
    Builtin,
    Loading(String),
    Loaded(String),
    Error(String),
}

impl OptionsStatus {
    /// Whether a load of `path` is the one in flight.
    pub fn is_loading(&self, path: &str) -> bool {
        matches!(self, OptionsStatus::Loading(current) if current == path)
    }
}

/// Notification level/type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A notification message to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation & UI
    LaunchUrl(String),
    ToggleContextPage(ContextPage),
    UpdateConfig(Config),

    // Picker
    Picker(PickerMessage),
    /// The picker produced a replacement value for the form
    ValueChanged(PickerValue),
    ClearSelection,
    CopyValue,

    // Options
    ReloadOptions,
    OptionsLoaded {
        path: String,
        result: Result<Vec<PickerOption>, String>,
    },

    // Settings inputs
    UnitChanged(String),
    OptionsFileChanged(String),
    SaveSettings,

    // Notifications
    AddNotification(NotificationLevel, String, String),
    DismissNotification(u32),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "dev.mmurphy.Multipicker";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        _flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let mut nav = nav_bar::Model::default();

        nav.insert()
            .text(fl!("picker"))
            .data::<Page>(Page::Picker)
            .icon(icon::from_name("view-dual-symbolic"))
            .activate();

        nav.insert()
            .text(fl!("settings"))
            .data::<Page>(Page::Settings)
            .icon(icon::from_name("preferences-system-symbolic"));

        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_svg_bytes(APP_ICON))
            .version(env!("CARGO_PKG_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        let config_context = cosmic_config::Config::new(Self::APP_ID, Config::VERSION).ok();
        let config = config_context
            .as_ref()
            .map(|context| match Config::get_entry(context) {
                Ok(config) => config,
                Err((errors, config)) => {
                    tracing::warn!(?errors, "falling back to partially loaded config");
                    config
                }
            })
            .unwrap_or_default();

        let mut app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            nav,
            key_binds: HashMap::new(),
            unit_input: config.unit.clone(),
            options_file_input: config.options_file.clone(),
            picker: MultiPickerState::new(config.unit.clone()),
            config,
            config_context,
            options: Vec::new(),
            options_status: OptionsStatus::default(),
            value: PickerValue::default(),
            notifications: Vec::new(),
            notification_id_counter: 0,
        };

        let command = Task::batch([app.update_title(), app.reload_options()]);

        (app, command)
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        let menu_bar = menu::bar(vec![menu::Tree::with_children(
            menu::root(fl!("view")).apply(Element::from),
            menu::items(
                &self.key_binds,
                vec![menu::Item::Button(fl!("about"), None, MenuAction::About)],
            ),
        )]);

        vec![menu_bar.into()]
    }

    /// Enables the COSMIC application to create a nav bar with this model.
    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav)
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let space_s = cosmic::theme::spacing().space_s;
        let space_m = cosmic::theme::spacing().space_m;

        let page_content: Element<_> = match self.nav.active_data::<Page>().unwrap_or(&Page::Picker)
        {
            Page::Picker => pages::picker::view(self, space_s, space_m),
            Page::Settings => pages::settings::view(self, space_s, space_m),
        };

        let mut content_column = widget::column::with_capacity(2).spacing(space_s);

        if !self.notifications.is_empty() {
            let notifications_row = widget::row::with_children(
                self.notifications
                    .iter()
                    .map(pages::widgets::notification_toast),
            )
            .spacing(space_s);
            content_column = content_column.push(notifications_row);
        }

        content_column = content_column.push(page_content);

        widget::container(content_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(space_m)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        // Watch for application configuration changes.
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::ToggleContextPage(context_page) => {
                if self.context_page == context_page {
                    self.core.window.show_context = !self.core.window.show_context;
                } else {
                    self.context_page = context_page;
                    self.core.window.show_context = true;
                }
            }

            Message::UpdateConfig(config) => {
                if config == self.config {
                    return Task::none();
                }
                let options_changed = config.options_file != self.config.options_file;
                self.config = config;
                self.unit_input = self.config.unit.clone();
                self.options_file_input = self.config.options_file.clone();
                self.picker.set_unit(self.config.unit.clone());
                if options_changed {
                    return self.reload_options();
                }
            }

            Message::LaunchUrl(url) => match open::that_detached(&url) {
                Ok(()) => {}
                Err(err) => {
                    tracing::warn!("failed to open {url:?}: {err}");
                }
            },

            // Picker
            Message::Picker(picker_msg) => {
                if let Some(value) = self.picker.update(&self.options, &self.value, picker_msg) {
                    return self.update(Message::ValueChanged(value));
                }
            }

            Message::ValueChanged(value) => {
                tracing::debug!(%value, "form value changed");
                self.value = value;
                self.picker.sync(&self.options, &self.value);
            }

            Message::ClearSelection => {
                self.picker.reset();
                return self.update(Message::ValueChanged(PickerValue::default()));
            }

            Message::CopyValue => {
                let text = self.value.to_string();
                return cosmic::task::future(async move {
                    let copied = arboard::Clipboard::new().and_then(|mut c| c.set_text(text));
                    match copied {
                        Ok(()) => cosmic::Action::App(Message::AddNotification(
                            NotificationLevel::Success,
                            fl!("value-copied"),
                            String::new(),
                        )),
                        Err(e) => {
                            tracing::warn!("clipboard unavailable: {e}");
                            cosmic::Action::App(Message::AddNotification(
                                NotificationLevel::Error,
                                fl!("error"),
                                e.to_string(),
                            ))
                        }
                    }
                });
            }

            // Options
            Message::ReloadOptions => {
                return self.reload_options();
            }

            Message::OptionsLoaded { path, result } => {
                if !self.options_status.is_loading(&path) {
                    tracing::debug!(%path, "ignoring stale options result");
                    return Task::none();
                }
                match result {
                    Ok(options) => {
                        let count = options.len();
                        self.options = options;
                        self.picker.sync(&self.options, &self.value);
                        self.options_status = OptionsStatus::Loaded(path.clone());
                        return self.update(Message::AddNotification(
                            NotificationLevel::Info,
                            fl!("options-loaded"),
                            format!("{count} · {path}"),
                        ));
                    }
                    Err(e) => {
                        tracing::error!(%path, "failed to load options: {e}");
                        self.options_status = OptionsStatus::Error(e.clone());
                        return self.update(Message::AddNotification(
                            NotificationLevel::Error,
                            fl!("options-load-failed"),
                            e,
                        ));
                    }
                }
            }

            // Settings inputs
            Message::UnitChanged(unit) => {
                self.unit_input = unit;
            }

            Message::OptionsFileChanged(path) => {
                self.options_file_input = path;
            }

            Message::SaveSettings => {
                self.config.unit = self.unit_input.trim().to_string();
                self.config.options_file = self.options_file_input.trim().to_string();
                self.picker.set_unit(self.config.unit.clone());

                let notify = if let Some(ref context) = self.config_context {
                    match self.config.write_entry(context) {
                        Ok(()) => Message::AddNotification(
                            NotificationLevel::Success,
                            fl!("settings-saved"),
                            String::new(),
                        ),
                        Err(e) => {
                            tracing::error!("failed to save config: {e}");
                            Message::AddNotification(
                                NotificationLevel::Error,
                                fl!("error"),
                                format!("Failed to save: {e}"),
                            )
                        }
                    }
                } else {
                    Message::AddNotification(
                        NotificationLevel::Warning,
                        fl!("settings-not-persisted"),
                        String::new(),
                    )
                };

                let notify_task = self.update(notify);
                return Task::batch([notify_task, self.reload_options()]);
            }

            // Notifications
            Message::AddNotification(level, title, message) => {
                self.notification_id_counter += 1;
                self.notifications.push(Notification {
                    id: self.notification_id_counter,
                    level,
                    title,
                    message,
                });
            }

            Message::DismissNotification(id) => {
                self.notifications.retain(|n| n.id != id);
            }
        }

        Task::none()
    }

    /// Called when a nav item is selected.
    fn on_nav_select(&mut self, id: nav_bar::Id) -> Task<cosmic::Action<Self::Message>> {
        self.nav.activate(id);
        self.update_title()
    }
}

impl AppModel {
    /// Updates the header and window titles.
    pub fn update_title(&mut self) -> Task<cosmic::Action<Message>> {
        let mut window_title = fl!("app-title");

        if let Some(page) = self.nav.text(self.nav.active()) {
            window_title.push_str(" — ");
            window_title.push_str(page);
        }

        if let Some(id) = self.core.main_window_id() {
            self.set_window_title(window_title, id)
        } else {
            Task::none()
        }
    }

    /// Loads the configured options, or the built-in sample when none is set.
    ///
    /// The current value is left alone: ids that no longer match an option
    /// stay in it.
    fn reload_options(&mut self) -> Task<cosmic::Action<Message>> {
        let Some(path) = self.config.options_path().map(str::to_owned) else {
            self.options = options::builtin_options();
            self.picker.sync(&self.options, &self.value);
            self.options_status = OptionsStatus::Builtin;
            return Task::none();
        };

        self.options_status = OptionsStatus::Loading(path.clone());
        cosmic::task::future(async move {
            let result = options::load_options(&path)
                .await
                .map_err(|e| e.to_string());
            cosmic::Action::App(Message::OptionsLoaded { path, result })
        })
    }
}

/// The page to display in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Picker,
    Settings,
}

/// The context page to display in the context drawer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAction {
    About,
}

impl menu::action::MenuAction for MenuAction {
    type Message = Message;

    fn message(&self) -> Self::Message {
        match self {
            MenuAction::About => Message::ToggleContextPage(ContextPage::About),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_the_pending_path_is_loading() {
        let status = OptionsStatus::Loading("/tmp/new.json".into());
        assert!(status.is_loading("/tmp/new.json"));
        assert!(!status.is_loading("/tmp/old.json"));

        assert!(!OptionsStatus::Builtin.is_loading("/tmp/new.json"));
        assert!(!OptionsStatus::Loaded("/tmp/new.json".into()).is_loading("/tmp/new.json"));
    }
}
