//! Default browser menubar template

// t! macro from rust_i18n (translations loaded via i18n! in lib.rs)
use rust_i18n::t;

use crate::types::{ActionEntry, MenuEntry, SubmenuEntry, Template};

use super::ids::CommandId;

/// State needed to build the default template
#[derive(Debug, Clone, Default)]
pub struct MenuTemplateState {
    /// Show the developer tools entry in the View menu
    pub developer_mode: bool,
}

/// Build the default menubar template in the current locale
pub fn build_default_template(state: &MenuTemplateState) -> Template {
    Template::new(vec![
        build_file_menu(),
        build_edit_menu(),
        build_view_menu(state),
        build_history_menu(),
        build_bookmarks_menu(),
        build_window_menu(),
        build_help_menu(),
    ])
}

fn item(key: &str, command: CommandId) -> ActionEntry {
    ActionEntry::new(t!(key).to_string()).with_command(command.as_str())
}

fn build_file_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_file").to_string(),
        vec![
            item("menu_file_new_tab", CommandId::NewTab)
                .with_accelerator("Ctrl+T")
                .into(),
            item("menu_file_new_window", CommandId::NewWindow)
                .with_accelerator("Ctrl+N")
                .into(),
            SubmenuEntry::Separator,
            item("menu_file_close_tab", CommandId::CloseTab)
                .with_accelerator("Ctrl+W")
                .into(),
            item("menu_file_quit", CommandId::Quit)
                .with_accelerator("Ctrl+Q")
                .into(),
        ],
    )
}

fn build_edit_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_edit").to_string(),
        vec![
            item("menu_edit_undo", CommandId::Undo)
                .with_accelerator("Ctrl+Z")
                .into(),
            item("menu_edit_redo", CommandId::Redo)
                .with_accelerator("Ctrl+Shift+Z")
                .into(),
            SubmenuEntry::Separator,
            item("menu_edit_cut", CommandId::Cut)
                .with_accelerator("Ctrl+X")
                .into(),
            item("menu_edit_copy", CommandId::Copy)
                .with_accelerator("Ctrl+C")
                .into(),
            item("menu_edit_paste", CommandId::Paste)
                .with_accelerator("Ctrl+V")
                .into(),
            item("menu_edit_select_all", CommandId::SelectAll)
                .with_accelerator("Ctrl+A")
                .into(),
        ],
    )
}

fn build_view_menu(state: &MenuTemplateState) -> MenuEntry {
    MenuEntry::new(
        t!("menu_view").to_string(),
        vec![
            item("menu_view_reload", CommandId::Reload)
                .with_accelerator("Ctrl+R")
                .into(),
            SubmenuEntry::Separator,
            item("menu_view_zoom_in", CommandId::ZoomIn)
                .with_accelerator("Ctrl++")
                .into(),
            item("menu_view_zoom_out", CommandId::ZoomOut)
                .with_accelerator("Ctrl+-")
                .into(),
            item("menu_view_zoom_reset", CommandId::ZoomReset)
                .with_accelerator("Ctrl+0")
                .into(),
            SubmenuEntry::Separator,
            // Hidden unless developer mode is on
            item("menu_view_dev_tools", CommandId::ToggleDevTools)
                .with_accelerator("Ctrl+Shift+I")
                .with_visible(state.developer_mode)
                .into(),
        ],
    )
}

fn build_history_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_history").to_string(),
        vec![
            item("menu_history_back", CommandId::Back)
                .with_accelerator("Alt+Left")
                .into(),
            item("menu_history_forward", CommandId::Forward)
                .with_accelerator("Alt+Right")
                .into(),
            SubmenuEntry::Separator,
            item("menu_history_show", CommandId::ShowHistory)
                .with_accelerator("Ctrl+H")
                .into(),
        ],
    )
}

fn build_bookmarks_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_bookmarks").to_string(),
        vec![
            item("menu_bookmarks_add", CommandId::BookmarkPage)
                .with_accelerator("Ctrl+D")
                .into(),
            item("menu_bookmarks_show", CommandId::ShowBookmarks).into(),
        ],
    )
}

fn build_window_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_window").to_string(),
        vec![item("menu_window_minimize", CommandId::Minimize)
            .with_accelerator("Ctrl+M")
            .into()],
    )
}

fn build_help_menu() -> MenuEntry {
    MenuEntry::new(
        t!("menu_help").to_string(),
        vec![
            item("menu_help_report_issue", CommandId::ReportIssue).into(),
            SubmenuEntry::Separator,
            item("menu_help_about", CommandId::About).into(),
        ],
    )
}
