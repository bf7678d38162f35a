//! Browser Menubar - Main Entry Point
//!
//! Opens a browser window shell whose menubar is driven by the configured
//! menu template.

use anyhow::Context as _;
use browser_menubar::{config::AppConfig, frontend::MenubarApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_or_default();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| EnvFilter::new(browser_menubar::config::DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting browser menubar");

    browser_menubar::i18n::set_language(config.language);
    let template = config.load_template();
    tracing::debug!("Menu template has {} menus", template.len());

    let title = browser_menubar::i18n::app_title();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(MenubarApp::new(cc, config, template)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
    .context("Failed to run the browser window")?;

    tracing::info!("Shutting down...");
    Ok(())
}
