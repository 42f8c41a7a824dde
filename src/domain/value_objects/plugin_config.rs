//! Plugin configuration value objects
//!
//! Options arrive from the host as an opaque JSON value (`PluginOptions`).
//! Once validated they become a `PluginConfig`, where the lazy/normal split is
//! a tagged variant: a lazy config without a default locale cannot exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Raw plugin options as received from the host
///
/// Every field is optional here; validation decides what is required.
/// Unknown fields are ignored. The short names used by older project
/// configs (`locales`, `filePath`, `defaultLanguage`) are accepted as aliases;
/// when both spellings are present the long one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    #[serde(default, alias = "locales", skip_serializing_if = "Option::is_none")]
    pub locales_directory: Option<PathBuf>,

    #[serde(default, alias = "filePath", skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,

    #[serde(
        default,
        alias = "defaultLanguage",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_locale: Option<String>,
}

/// (long name, short alias) pairs
const ALIASES: [(&str, &str); 3] = [
    ("localesDirectory", "locales"),
    ("outputPath", "filePath"),
    ("defaultLocale", "defaultLanguage"),
];

impl PluginOptions {
    /// Interpret an opaque host value as plugin options
    ///
    /// `null` (no options block at all) yields empty options. Anything that is
    /// present but has the wrong shape is reported as an error message.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, String> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let mut value = value.clone();
        if let Some(fields) = value.as_object_mut() {
            for (long, short) in ALIASES {
                if fields.contains_key(long) {
                    fields.remove(short);
                }
            }
        }
        serde_json::from_value(value).map_err(|e| e.to_string())
    }

    /// Serialize back into the opaque host representation
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Output mode of the generator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// One artifact holding every locale's types
    #[default]
    Normal,
    /// Types plus a runtime loader; only the types artifact is persisted
    Lazy { default_locale: String },
}

impl GenerationMode {
    pub fn is_lazy(&self) -> bool {
        matches!(self, GenerationMode::Lazy { .. })
    }

    pub fn default_locale(&self) -> Option<&str> {
        match self {
            GenerationMode::Normal => None,
            GenerationMode::Lazy { default_locale } => Some(default_locale),
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Normal => write!(f, "normal"),
            GenerationMode::Lazy { default_locale } => write!(f, "lazy (default {default_locale})"),
        }
    }
}

/// Validated plugin configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    module_name: String,
    locales_dir: PathBuf,
    output_path: PathBuf,
    mode: GenerationMode,
}

impl PluginConfig {
    /// Build a config directly; callers are expected to have validated the inputs
    pub fn new(
        module_name: impl Into<String>,
        locales_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        mode: GenerationMode,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            locales_dir: locales_dir.into(),
            output_path: output_path.into(),
            mode,
        }
    }

    /// The import specifier being intercepted
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    /// Where the generated artifact is written
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn mode(&self) -> &GenerationMode {
        &self.mode
    }

    /// True if `specifier` is the tracked module name
    pub fn tracks(&self, specifier: &str) -> bool {
        self.module_name == specifier
    }
}
