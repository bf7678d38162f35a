//! Application module
//!
//! Re-exports the browser window shell and the pieces needed to start it.

pub use crate::frontend::{MenubarApp, URL_INPUT_SELECTOR};
