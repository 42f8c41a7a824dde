//! Locale name value object
//!
//! A locale is named after its file: `locales/en-US.yaml` -> `en-US`.

use std::fmt;
use std::path::Path;

/// Extension of recognized locale files (without the dot)
pub const LOCALE_EXTENSION: &str = "yaml";

/// Name of a locale, derived from a locale file's base name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocaleName(String);

impl LocaleName {
    /// Create a locale name from an arbitrary string
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the locale name from a file path (extension stripped)
    ///
    /// Returns `None` for paths without a usable file stem.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() {
            return None;
        }
        Some(Self(stem.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// True if `path` carries the recognized locale extension
pub fn is_locale_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == LOCALE_EXTENSION)
        .unwrap_or(false)
}

impl fmt::Display for LocaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
