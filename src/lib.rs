//! # Browser Menubar
//!
//! An application menubar for a browser window, built on eframe/egui. The
//! bar renders a row of top-level labels from a menu template, opens a
//! context menu under the selected label, and supports full keyboard
//! navigation while mounted.
//!
//! ## Architecture
//!
//! - **Components**: [`frontend::Menubar`] and [`frontend::MenubarItem`] render
//!   from props and never mutate state themselves
//! - **Intents**: every reaction is a [`frontend::MenuIntent`] sent over a
//!   crossbeam channel
//! - **Store**: [`frontend::MenuStore`] applies intents and produces the next props
//! - **Templates**: [`types::Template`], built in ([`menu`]) or loaded from JSON/TOML
//!
//! ## Configuration
//!
//! Options are stored in `config.toml` in the platform config directory
//! under `dev.browser-menubar` (see [`config`]).
//!
//! ## Example
//!
//! ```ignore
//! use browser_menubar::{config::AppConfig, frontend::MenubarApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let config = AppConfig::load_or_default();
//!     let template = config.load_template();
//!
//!     eframe::run_native(
//!         "Browser",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(MenubarApp::new(cc, config, template)))),
//!     )
//! }
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod menu;
pub mod types;

// Re-export commonly used types
pub use app::MenubarApp;
pub use config::{AppConfig, MenubarSettings};
pub use error::{MenubarError, Result};
pub use frontend::{Menubar, MenubarProps, MenuIntent, MenuStore};
pub use types::{ActionEntry, MenuEntry, SubmenuEntry, Template};
