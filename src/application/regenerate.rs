//! Regeneration pipeline
//!
//! list locale files -> read + parse each -> generate -> write `outputPath`.
//!
//! Every failure along the way is returned as a `GenerationError` and logged.
//! Nothing is written unless generation fully succeeded, so a locale file caught
//! mid-edit leaves the previous artifact in place.

use std::path::{Path, PathBuf};

use crate::domain::entities::LocaleEntry;
use crate::domain::ports::{CodeGenerator, LocaleParser, Logger, ServerHost};
use crate::domain::value_objects::{ContentHash, LocaleName, PluginConfig, Target};
use crate::error::GenerationError;

/// Summary of a successful regeneration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationReport {
    /// Artifact path
    pub output: PathBuf,
    /// Locales included, in listing order
    pub locales: Vec<LocaleName>,
    /// Hash of the written content
    pub hash: ContentHash,
}

/// One regeneration pass over a locales directory
pub struct RegenerationPipeline<'a> {
    host: &'a dyn ServerHost,
    parser: &'a dyn LocaleParser,
    generator: &'a dyn CodeGenerator,
    logger: &'a dyn Logger,
}

impl<'a> RegenerationPipeline<'a> {
    pub fn new(
        host: &'a dyn ServerHost,
        parser: &'a dyn LocaleParser,
        generator: &'a dyn CodeGenerator,
        logger: &'a dyn Logger,
    ) -> Self {
        Self {
            host,
            parser,
            generator,
            logger,
        }
    }

    /// Read and parse every locale file currently in `dir`
    pub fn load_entries(&self, dir: &Path) -> Result<Vec<LocaleEntry>, GenerationError> {
        let files = self
            .host
            .list_locale_files(dir)
            .map_err(GenerationError::Listing)?;

        files
            .into_iter()
            .map(|path| -> Result<LocaleEntry, GenerationError> {
                let name = LocaleName::from_path(&path).ok_or_else(|| GenerationError::Parse {
                    path: path.clone(),
                    message: "file name has no usable stem".to_string(),
                })?;
                let text = self
                    .host
                    .read_file(&path)
                    .ok_or_else(|| GenerationError::Unreadable { path: path.clone() })?;
                let tree = self
                    .parser
                    .parse(&text)
                    .map_err(|message| GenerationError::Parse { path, message })?;
                Ok(LocaleEntry::new(name, tree))
            })
            .collect()
    }

    /// Produce the source text for `config` without writing it
    pub fn render(
        &self,
        config: &PluginConfig,
        target: Target,
    ) -> Result<(Vec<LocaleEntry>, String), GenerationError> {
        let entries = self.load_entries(config.locales_dir())?;
        let output = self
            .generator
            .generate(&entries, target, config.mode())
            .map_err(GenerationError::Generator)?;
        Ok((entries, output.into_primary()))
    }

    /// Regenerate and overwrite the artifact
    pub fn run(&self, config: &PluginConfig) -> Result<RegenerationReport, GenerationError> {
        let output = config.output_path();
        self.logger.info(&format!("write file: {}", output.display()));

        let result = self.render(config, Target::Type).and_then(|(entries, source)| {
            self.host
                .write_file(output, &source)
                .map_err(GenerationError::Write)?;
            Ok(RegenerationReport {
                output: output.to_path_buf(),
                locales: entries.into_iter().map(|e| e.name).collect(),
                hash: ContentHash::from_content(&source),
            })
        });

        match &result {
            Ok(report) => {
                self.logger
                    .info(&format!("write file succeed: {}", output.display()));
                tracing::debug!(
                    output = %output.display(),
                    locales = report.locales.len(),
                    hash = report.hash.short(),
                    "regenerated"
                );
            }
            Err(e) => self.logger.info(&format!("write file failed: {e}")),
        }
        result
    }
}
