// SPDX-License-Identifier: MPL-2.0

mod app;
mod config;
mod i18n;
mod options;
mod pages;
mod widgets;

use tracing_subscriber::EnvFilter;

fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multipicker=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}

fn main() -> cosmic::iced::Result {
    if let Err(err) = init_tracing() {
        eprintln!("failed to initialise logging: {err}");
    }

    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(520.0)
            .min_height(360.0),
    );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_tracing_init_reports_error() {
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
