//! Plugin option validation
//!
//! Decides whether the plugin may activate for a set of options. Invalid
//! options are a normal input here: the plugin simply stays inert, so the
//! validator never fails loudly. `check` explains why; `validate` is the
//! boolean gate.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::{Logger, ServerHost};
use crate::domain::value_objects::{GenerationMode, PluginConfig, PluginOptions, LOCALE_EXTENSION};

/// Why a set of options was not adopted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigRejection {
    /// No host, or a host that cannot list directories
    #[error("host cannot list directories")]
    NoHost,

    /// Options present but of the wrong shape
    #[error("malformed options: {0}")]
    Malformed(String),

    /// A required option is absent or empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// `lazy: true` without a default locale
    #[error("defaultLocale is required when lazy is true")]
    MissingDefaultLocale,

    /// The locales directory has no recognized locale file
    #[error("no .{} files in {}", LOCALE_EXTENSION, .0.display())]
    NoLocaleFiles(PathBuf),

    /// The locales directory could not be listed
    #[error("cannot list {}: {message}", .path.display())]
    Unlistable { path: PathBuf, message: String },
}

/// Validate raw options and build the adopted configuration
pub fn check(
    options: &serde_json::Value,
    host: Option<&dyn ServerHost>,
) -> Result<PluginConfig, ConfigRejection> {
    let host = host.ok_or(ConfigRejection::NoHost)?;
    let options = PluginOptions::from_value(options).map_err(ConfigRejection::Malformed)?;

    let module_name = options
        .module_name
        .filter(|s| !s.is_empty())
        .ok_or(ConfigRejection::MissingField("moduleName"))?;
    let output_path = options
        .output_path
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigRejection::MissingField("outputPath"))?;
    let locales_dir = options
        .locales_directory
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigRejection::MissingField("localesDirectory"))?;

    let mode = if options.lazy.unwrap_or(false) {
        let default_locale = options
            .default_locale
            .filter(|s| !s.is_empty())
            .ok_or(ConfigRejection::MissingDefaultLocale)?;
        GenerationMode::Lazy { default_locale }
    } else {
        GenerationMode::Normal
    };

    let files = host
        .list_locale_files(&locales_dir)
        .map_err(|e| ConfigRejection::Unlistable {
            path: locales_dir.clone(),
            message: e.to_string(),
        })?;
    if files.is_empty() {
        return Err(ConfigRejection::NoLocaleFiles(locales_dir));
    }

    Ok(PluginConfig::new(module_name, locales_dir, output_path, mode))
}

/// Boolean activation gate; logs the rejection reason
pub fn validate(
    options: &serde_json::Value,
    host: Option<&dyn ServerHost>,
    logger: &dyn Logger,
) -> bool {
    match check(options, host) {
        Ok(_) => true,
        Err(rejection) => {
            logger.info(&format!("invalid options: {rejection}"));
            false
        }
    }
}
