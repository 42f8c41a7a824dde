//! Domain Entities
//!
//! Core objects flowing through the pipeline: parsed locales, generator output,
//! and module resolution answers.

mod generated;
mod locale;
mod resolved_module;

pub use generated::GeneratedOutput;
pub use locale::{LocaleEntry, LocaleNode, LocaleTree};
pub use resolved_module::ResolvedModule;
