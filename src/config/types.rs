//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PluginOptions;
use crate::error::LocaleTypesResult;

use super::loader::{self, ConfigWarning};

/// `[plugin]` section: the same options a language-service host would pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSection {
    /// Import specifier to intercept
    #[serde(default)]
    pub module_name: Option<String>,

    /// Directory holding one `<locale>.yaml` per language
    #[serde(default)]
    pub locales: Option<PathBuf>,

    /// Path of the generated declarations
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub lazy: bool,

    #[serde(default)]
    pub default_locale: Option<String>,
}

/// `[logging]` section
///
/// ```toml
/// [logging]
/// default = "warn"
///
/// [logging.modules]
/// localetypes = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Contents of `localetypes.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub plugin: PluginSection,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ProjectConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LocaleTypesResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LocaleTypesResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Plugin options as a host would pass them
    ///
    /// Relative `locales` and `output` paths are resolved against `base_dir`,
    /// normally the directory holding the config file.
    pub fn plugin_options(&self, base_dir: &Path) -> PluginOptions {
        let plugin = &self.plugin;
        PluginOptions {
            module_name: plugin.module_name.clone(),
            locales_directory: plugin.locales.as_deref().map(|p| base_dir.join(p)),
            output_path: plugin.output.as_deref().map(|p| base_dir.join(p)),
            lazy: plugin.lazy.then_some(true),
            default_locale: plugin.default_locale.clone(),
        }
    }
}
