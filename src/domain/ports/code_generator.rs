//! Code generator port
//!
//! Turns a set of named locale trees into source text. Pure.

use crate::domain::entities::{GeneratedOutput, LocaleEntry};
use crate::domain::value_objects::{GenerationMode, Target};

/// Source generator for locale entries
pub trait CodeGenerator: Send + Sync {
    /// Generate source for `entries`
    ///
    /// `GenerationMode::Normal` yields `GeneratedOutput::Single`;
    /// `GenerationMode::Lazy` yields `GeneratedOutput::Lazy`.
    fn generate(
        &self,
        entries: &[LocaleEntry],
        target: Target,
        mode: &GenerationMode,
    ) -> Result<GeneratedOutput, String>;
}
