//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod locale_name;
mod plugin_config;
mod target;

pub use hash::ContentHash;
pub use locale_name::{is_locale_file, LocaleName, LOCALE_EXTENSION};
pub use plugin_config::{GenerationMode, PluginConfig, PluginOptions};
pub use target::Target;
