mod app;
mod ui;

use std::sync::Arc;

use birdsearch::config;
use birdsearch::source::{HttpSource, SuggestionSource};
use iced::{window, Size};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::load();

    let source: Arc<dyn SuggestionSource> = match HttpSource::new(&config.endpoint) {
        Ok(source) => Arc::new(source),
        Err(e) => {
            tracing::error!("Failed to set up HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting birdsearch against {}", config.endpoint.url);

    let size = Size::new(config.window.width, config.window.height);
    iced::application(
        move || app::State::new(config.clone(), Arc::clone(&source)),
        app::State::update,
        app::State::view,
    )
    .title(app::State::title)
    .subscription(app::State::subscription)
    .theme(app::State::theme)
    .window(window::Settings {
        size,
        // Close requests go through State so pending work is cancelled first
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
}
