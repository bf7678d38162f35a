//! Browser menu definitions
//!
//! Command ids and the default template the menubar is built from.

mod builder;
mod ids;

pub use builder::{build_default_template, MenuTemplateState};
pub use ids::CommandId;
