//! Frontend module for the egui UI
//!
//! The menubar follows a one-way data flow. Components read
//! [`MenubarProps`], react to input by sending [`MenuIntent`]s through a
//! crossbeam channel, and the [`MenuStore`] applies those intents before
//! the next props are handed down.
//!
//! # Main Types
//!
//! - [`MenubarApp`] - Browser window shell implementing [`eframe::App`]
//! - [`Menubar`] / [`MenubarItem`] - The menubar component and its labels
//! - [`MenuStore`] - Reducer owning the window's menu state
//!
//! # Submodules
//!
//! - [`events`] - Key and mouse events, the document listener registry
//! - [`view_registry`] - Item rectangles and focus targets per frame
//! - [`context_menu`] - Popup shown under an open menu
//! - [`navigation`] - Index arithmetic for keyboard navigation

pub mod context_menu;
pub mod events;
pub mod menubar;
pub mod menubar_item;
pub mod navigation;
pub mod state;
pub mod store;
pub mod view_registry;

pub use context_menu::{ContextMenuDetail, ContextMenuEntry, ContextMenuItem};
pub use events::{Document, KeyCode, KeyEvent, KeyListener, ListenerId, MouseEvent};
pub use menubar::Menubar;
pub use menubar_item::{MenubarItem, MenubarItemProps};
pub use state::{Dispatch, MenuIntent, MenubarProps};
pub use store::{ActivatedItem, MenuStore, WindowMenuState};
pub use view_registry::{FrameRegistry, ViewRegistry};

use std::rc::Rc;
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use rust_i18n::t;

use crate::config::{AppConfig, MenubarSettings};
use crate::i18n::{self, Language};
use crate::menu::CommandId;
use crate::types::Template;

use events::AltTap;

/// Selector the address bar registers as a focus target
pub const URL_INPUT_SELECTOR: &str = "#urlInput";

const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 3.0;

/// Main application state for the browser window shell
pub struct MenubarApp {
    // === Configuration ===
    config: AppConfig,
    settings: MenubarSettings,

    // === Menu state ===
    store: MenuStore,
    intents: Receiver<MenuIntent>,
    dispatcher: Sender<MenuIntent>,

    // === Components ===
    document: Document,
    registry: Rc<FrameRegistry>,
    menubar: Rc<Menubar>,
    alt: AltTap,

    // === Window content ===
    url: String,
    url_id: egui::Id,
    status: Option<String>,
    show_dev_tools: bool,
}

impl MenubarApp {
    /// Create the application from an eframe creation context
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, template: Template) -> Self {
        // Zoom goes through the View menu commands
        cc.egui_ctx.options_mut(|options| options.zoom_with_keyboard = false);
        Self::with_template(config, template)
    }

    /// Create the application without a window, e.g. for headless use
    pub fn with_template(config: AppConfig, template: Template) -> Self {
        i18n::set_language(config.language);

        let settings = MenubarSettings::from_config(&config);
        let store = MenuStore::new(Arc::new(template), settings.autohide);
        let (dispatcher, intents) = crossbeam_channel::unbounded();

        let registry = Rc::new(FrameRegistry::new());
        let url_id = egui::Id::new("url_input");
        registry.register_focus_target(URL_INPUT_SELECTOR, url_id);

        let menubar = Menubar::new(
            store.props(),
            Rc::new(dispatcher.clone()),
            Rc::clone(&registry) as Rc<dyn ViewRegistry>,
        );

        let mut app = Self {
            config,
            settings,
            store,
            intents,
            dispatcher,
            document: Document::new(),
            registry,
            menubar,
            alt: AltTap::default(),
            url: String::new(),
            url_id,
            status: None,
            show_dev_tools: false,
        };
        app.sync();
        app
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn menubar(&self) -> &Rc<Menubar> {
        &self.menubar
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Label of the last activated menu entry
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Apply pending intents, follow visibility with the mount state, and
    /// hand the new props to the menubar.
    fn sync(&mut self) {
        let applied = self.store.drain(&self.intents);
        if applied > 0 {
            tracing::trace!("Applied {} menu intents", applied);
        }

        let visible = self.store.is_menubar_visible();
        if visible && !self.menubar.is_mounted() {
            self.menubar.mount(&self.document);
        } else if !visible && self.menubar.is_mounted() {
            self.menubar.unmount(&self.document);
        }

        self.menubar.set_props_from_host(self.store.props());
    }

    // ==================== Input ====================

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (keys, alt_down, any_key) = ctx.input(|i| {
            let keys: Vec<egui::Key> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } if !modifiers.any() => Some(*key),
                    _ => None,
                })
                .collect();
            let any_key = i
                .events
                .iter()
                .any(|event| matches!(event, egui::Event::Key { pressed: true, .. }));
            (keys, i.modifiers.alt, any_key)
        });

        for key in keys {
            let mut event = KeyEvent::new(KeyCode::from_egui(key));
            self.document.dispatch_key(&mut event);

            if !event.default_prevented() && event.key == KeyCode::Escape {
                let state = self.store.state();
                if state.selected_label.is_some() || state.context_menu_detail.is_some() {
                    self.dispatcher.dispatch(MenuIntent::ResetMenubarState);
                    event.prevent_default();
                }
            }

            if event.default_prevented() {
                ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key));
            }
        }

        if self.alt.update(alt_down, any_key) {
            self.on_alt_tap();
        }
    }

    fn on_alt_tap(&mut self) {
        let mut event = KeyEvent::new(KeyCode::Alt);
        self.document.dispatch_key(&mut event);
        if event.default_prevented() || !self.store.autohide() {
            return;
        }

        if self.store.is_menubar_visible() {
            self.dispatcher.dispatch(MenuIntent::ResetMenubarState);
            self.dispatcher.dispatch(MenuIntent::SetMenubarVisible(false));
        } else {
            self.dispatcher.dispatch(MenuIntent::SetMenubarVisible(true));
        }
    }

    // ==================== Commands ====================

    fn run_activated(&mut self, ctx: &egui::Context) {
        for item in self.store.take_activated() {
            match item.command.as_deref().and_then(CommandId::parse) {
                Some(command) => self.run_command(ctx, command),
                None => tracing::info!("Menu item {:?} has no known command", item.label),
            }
            self.status = Some(item.label);
        }
    }

    fn run_command(&mut self, ctx: &egui::Context, command: CommandId) {
        tracing::info!("Running command {}", command);

        match command {
            CommandId::Quit | CommandId::CloseTab => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            CommandId::Minimize => ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true)),
            CommandId::ZoomIn => {
                ctx.set_zoom_factor((ctx.zoom_factor() + ZOOM_STEP).min(MAX_ZOOM));
            }
            CommandId::ZoomOut => {
                ctx.set_zoom_factor((ctx.zoom_factor() - ZOOM_STEP).max(MIN_ZOOM));
            }
            CommandId::ZoomReset => ctx.set_zoom_factor(1.0),
            CommandId::ToggleDevTools => self.show_dev_tools = !self.show_dev_tools,
            CommandId::SelectAll => {
                self.registry.focus_first_matching(URL_INPUT_SELECTOR);
            }
            _ => {}
        }
    }

    // ==================== Settings ====================

    /// Rebuild the template after a language or developer mode change
    fn rebuild_template(&mut self) {
        self.settings.apply_to(&mut self.config);
        self.store.set_template(Arc::new(self.config.load_template()));
        self.store.set_autohide(self.settings.autohide);
        self.menubar.set_props(self.store.props());
        // Labels changed while the selection did not
        self.menubar.force_update();
    }

    fn set_language(&mut self, lang: Language) {
        i18n::set_language(lang);
        self.config.language = lang;
        self.rebuild_template();
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let mut rebuild = false;
        let mut language = None;

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut self.settings.autohide, "Autohide menubar")
                    .changed()
                {
                    rebuild = true;
                }
                if ui
                    .checkbox(&mut self.settings.developer_mode, "Developer mode")
                    .changed()
                {
                    rebuild = true;
                }

                let current = i18n::current_language();
                egui::ComboBox::from_id_salt("language")
                    .selected_text(current.display_name())
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            if ui
                                .selectable_label(*lang == current, lang.display_name())
                                .clicked()
                            {
                                language = Some(*lang);
                            }
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(status) = &self.status {
                        ui.weak(status);
                    }
                });
            });
        });

        if let Some(lang) = language {
            self.set_language(lang);
        } else if rebuild {
            self.rebuild_template();
        }
    }

    /// Run one frame against `ctx`
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.sync();
        self.handle_keys(ctx);
        self.sync();

        let mut consumed = false;
        if self.store.is_menubar_visible() {
            egui::TopBottomPanel::top("menubar").show(ctx, |ui| {
                consumed = self.menubar.show(ui);
            });
        }

        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.url)
                    .id(self.url_id)
                    .hint_text(t!("url_placeholder").to_string())
                    .desired_width(f32::INFINITY),
            );
            if response.gained_focus() {
                self.dispatcher.dispatch(MenuIntent::SetLastFocusedSelector(Some(
                    URL_INPUT_SELECTOR.to_string(),
                )));
            }
        });

        let props = self.menubar.props().clone();
        let over_popup = match &props.context_menu_detail {
            Some(detail) => context_menu::show_context_menu_popup(
                ctx,
                detail,
                props.selected_index,
                self.registry.as_ref(),
                &self.dispatcher,
            ),
            None => false,
        };

        let background_click = ctx.input(|i| i.pointer.any_click());
        if background_click && !consumed && !over_popup && props.context_menu_detail.is_some() {
            tracing::debug!("Click outside the menu, closing it");
            self.dispatcher.dispatch(MenuIntent::ResetMenubarState);
        }

        if self.show_dev_tools {
            let state = self.store.state();
            egui::Window::new("Developer Tools")
                .open(&mut self.show_dev_tools)
                .show(ctx, |ui| {
                    ui.monospace(format!("{:#?}", state));
                });
        }

        self.registry.apply_focus(ctx);
        self.sync();
        self.run_activated(ctx);
    }
}

impl eframe::App for MenubarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.apply_to(&mut self.config);
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}
