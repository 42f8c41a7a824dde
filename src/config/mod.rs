//! Project configuration (`localetypes.toml`)
//!
//! The CLI runs the plugin outside a language-service host, so the options
//! normally passed by the host come from a TOML file instead:
//!
//! ```toml
//! [plugin]
//! module_name = "i18n"
//! locales = "locales"
//! output = "src/i18n.d.ts"
//! lazy = false
//!
//! [logging]
//! default = "warn"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

mod loader;
mod types;

pub use loader::{find_config, parse_with_warnings, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{LoggingConfig, PluginSection, ProjectConfig};
