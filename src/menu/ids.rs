//! Command identifiers carried by template entries

/// Browser commands a menu entry can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // File
    NewTab,
    NewWindow,
    CloseTab,
    Quit,

    // Edit
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,

    // View
    Reload,
    ZoomIn,
    ZoomOut,
    ZoomReset,
    ToggleDevTools,

    // History
    Back,
    Forward,
    ShowHistory,

    // Bookmarks
    BookmarkPage,
    ShowBookmarks,

    // Window
    Minimize,

    // Help
    About,
    ReportIssue,
}

impl CommandId {
    pub const ALL: &'static [CommandId] = &[
        Self::NewTab,
        Self::NewWindow,
        Self::CloseTab,
        Self::Quit,
        Self::Undo,
        Self::Redo,
        Self::Cut,
        Self::Copy,
        Self::Paste,
        Self::SelectAll,
        Self::Reload,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ZoomReset,
        Self::ToggleDevTools,
        Self::Back,
        Self::Forward,
        Self::ShowHistory,
        Self::BookmarkPage,
        Self::ShowBookmarks,
        Self::Minimize,
        Self::About,
        Self::ReportIssue,
    ];

    /// Stable string id stored in templates
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewTab => "file_new_tab",
            Self::NewWindow => "file_new_window",
            Self::CloseTab => "file_close_tab",
            Self::Quit => "file_quit",
            Self::Undo => "edit_undo",
            Self::Redo => "edit_redo",
            Self::Cut => "edit_cut",
            Self::Copy => "edit_copy",
            Self::Paste => "edit_paste",
            Self::SelectAll => "edit_select_all",
            Self::Reload => "view_reload",
            Self::ZoomIn => "view_zoom_in",
            Self::ZoomOut => "view_zoom_out",
            Self::ZoomReset => "view_zoom_reset",
            Self::ToggleDevTools => "view_toggle_dev_tools",
            Self::Back => "history_back",
            Self::Forward => "history_forward",
            Self::ShowHistory => "history_show",
            Self::BookmarkPage => "bookmarks_add",
            Self::ShowBookmarks => "bookmarks_show",
            Self::Minimize => "window_minimize",
            Self::About => "help_about",
            Self::ReportIssue => "help_report_issue",
        }
    }

    /// Parse a string id back into a command
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
