//! Runtime settings that can be modified while the application runs
//!
//! Mirrors the toggleable part of [`AppConfig`] so the UI can flip options
//! without touching the file until the user saves.

use super::AppConfig;

/// Menubar options the user can change at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenubarSettings {
    /// Hide the menubar until Alt is pressed
    pub autohide: bool,

    /// Show developer entries in the menus
    pub developer_mode: bool,
}

impl MenubarSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            autohide: config.autohide_menubar,
            developer_mode: config.developer_mode,
        }
    }

    /// Write these settings back into a config
    pub fn apply_to(&self, config: &mut AppConfig) {
        config.autohide_menubar = self.autohide;
        config.developer_mode = self.developer_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_follow_config() {
        let config = AppConfig {
            autohide_menubar: true,
            ..Default::default()
        };
        let settings = MenubarSettings::from_config(&config);
        assert!(settings.autohide);
        assert!(!settings.developer_mode);
    }

    #[test]
    fn test_apply_writes_back() {
        let mut config = AppConfig::default();
        let mut settings = MenubarSettings::from_config(&config);

        settings.autohide = true;
        settings.developer_mode = true;
        settings.apply_to(&mut config);

        assert!(config.autohide_menubar);
        assert!(config.developer_mode);
    }
}
