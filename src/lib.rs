//! localetypes - typed i18n modules for TypeScript language services
//!
//! A language-service plugin core: it intercepts resolution of one import
//! specifier (e.g. `i18n`), regenerates a TypeScript declaration file from a
//! directory of YAML locale files, answers the import with that file, and
//! keeps it current while the locale files change.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{
    PluginCreateInfo, PluginSession, RegenerationPipeline, RegenerationReport, RegenerationStatus,
    ResolverHook, SessionPhase, WatchSetManager,
};
pub use config::{LoggingConfig, ProjectConfig};
pub use domain::entities::ResolvedModule;
pub use domain::ports::{Logger, ModuleResolver, ServerHost, SessionEvent, SessionEventSink};
pub use domain::services::{check, validate, ConfigRejection};
pub use domain::value_objects::{GenerationMode, PluginConfig, PluginOptions, Target};
pub use error::{GenerationError, HostError, LocaleTypesError, LocaleTypesResult};
pub use infrastructure::{LocalHost, MemoryHost};
