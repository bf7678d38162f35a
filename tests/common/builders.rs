//! Test data builders for creating templates and props

use std::sync::Arc;

use browser_menubar::frontend::MenubarProps;
use browser_menubar::types::{ActionEntry, MenuEntry, SubmenuEntry, Template};

/// Builder for creating test templates
#[derive(Default)]
pub struct TemplateBuilder {
    entries: Vec<MenuEntry>,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu; `"-"` becomes a separator and a leading `!` marks the
    /// item hidden.
    pub fn menu(mut self, label: &str, items: &[&str]) -> Self {
        let submenu = items
            .iter()
            .map(|item| match *item {
                "-" => SubmenuEntry::Separator,
                hidden if hidden.starts_with('!') => {
                    ActionEntry::new(&hidden[1..]).with_visible(false).into()
                }
                label => SubmenuEntry::action(label),
            })
            .collect();
        self.entries.push(MenuEntry::new(label, submenu));
        self
    }

    pub fn build(self) -> Template {
        Template::new(self.entries)
    }

    pub fn build_arc(self) -> Arc<Template> {
        Arc::new(self.build())
    }
}

/// The File / Edit / View template most tests navigate
pub fn browser_template() -> Arc<Template> {
    TemplateBuilder::new()
        .menu("File", &["New Tab", "New Window", "-", "Quit"])
        .menu("Edit", &["Undo", "!Redo", "-", "Copy", "Paste"])
        .menu("View", &["Reload"])
        .build_arc()
}

/// Props with `label` selected
pub fn props_selecting(template: Arc<Template>, label: &str) -> MenubarProps {
    MenubarProps {
        selected_label: Some(label.to_string()),
        ..MenubarProps::new(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_builder() {
        let template = browser_template();
        assert_eq!(template.len(), 3);

        let edit = template.find("Edit").unwrap();
        assert!(edit.submenu[2].is_separator());
        assert_eq!(edit.submenu[1].as_action().unwrap().visible, Some(false));
    }
}
