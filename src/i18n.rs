//! Menu label translations
//!
//! Locale files live in `locales/`; the `i18n!` macro is initialized at the
//! crate root (lib.rs). The default template reads its labels through
//! `t!`, so it has to be rebuilt after [`set_language`].

use serde::{Deserialize, Serialize};

/// Supported languages, stored in the config by locale code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
}

impl Language {
    /// Locale code understood by `rust_i18n`
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::SimplifiedChinese => "zh-CN",
        }
    }

    /// Name of the language in its own script
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::SimplifiedChinese => "简体中文",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::English, Language::SimplifiedChinese]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Switch the process-wide locale
pub fn set_language(lang: Language) {
    tracing::debug!("Switching language to {}", lang.code());
    rust_i18n::set_locale(lang.code());
}

/// Window title in the current locale
pub fn app_title() -> String {
    rust_i18n::t!("app_title").to_string()
}

/// Language of the current locale, English if it is not one we ship
pub fn current_language() -> Language {
    let locale = rust_i18n::locale();
    Language::from_code(&locale).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    #[serial]
    fn test_set_language_changes_locale() {
        set_language(Language::SimplifiedChinese);
        assert_eq!(current_language(), Language::SimplifiedChinese);

        assert_eq!(app_title(), "浏览器");

        set_language(Language::English);
        assert_eq!(current_language(), Language::English);
        assert_eq!(app_title(), "Browser");
    }
}
