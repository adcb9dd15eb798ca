// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod error;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Home Finances dashboard (Dioxus Desktop)...");

    let app_config = match AppConfig::load() {
        Ok(cfg) => {
            tracing::info!(
                version = %cfg.version,
                base_url = %cfg.api.base_url,
                "Configuration loaded."
            );
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(app_config.app.window_width),
                f64::from(app_config.app.window_height),
            )),
    );

    // AppConfig is made available to every component through the context.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Home Finances dashboard finished.");
}
