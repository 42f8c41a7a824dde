//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `host/` - ServerHost implementations (Local, Memory)
//! - `parser/` - Locale parsers (YAML)
//! - `generator/` - Code generators (TypeScript)
//! - `events/` - Session event sinks (JSON, Console)
//! - `resolver` - Baseline module resolver
//! - `logger` - Logger port backed by `tracing`

pub mod events;
pub mod generator;
pub mod host;
pub mod logger;
pub mod parser;
pub mod resolver;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use generator::TypeScriptGenerator;
pub use host::{LocalHost, MemoryHost};
pub use logger::TracingLogger;
pub use parser::YamlLocaleParser;
pub use resolver::NodeModuleResolver;
