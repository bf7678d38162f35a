//! Error handling for the browser menubar
//!
//! The menubar component itself never fails: lookups that come up empty
//! simply skip the dependent action. Errors only surface at the crate
//! boundary, where templates and configuration are loaded from disk.

use thiserror::Error;

/// Main error type for menubar operations
#[derive(Error, Debug)]
pub enum MenubarError {
    /// Malformed menu template supplied by the host
    #[error("Template error: {0}")]
    Template(String),

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to intent channel communication
    #[error("Channel error: {0}")]
    Channel(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<MenubarError>,
    },
}

impl MenubarError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        MenubarError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for MenubarError {
    fn from(err: serde_json::Error) -> Self {
        MenubarError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MenubarError {
    fn from(err: toml::de::Error) -> Self {
        MenubarError::Serialization(err.to_string())
    }
}

/// Result type alias for menubar operations
pub type Result<T> = std::result::Result<T, MenubarError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
