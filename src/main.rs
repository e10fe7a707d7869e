//! Internship Finder Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if let Err(err) = console_logger::init(&config.log_level) {
        web_sys::console::warn_1(&format!("[MAIN] logger not installed: {}", err).into());
    }
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "invalid #app-config, using defaults");
    }

    mount_to_body(move || view! { <App config=config /> });
}
