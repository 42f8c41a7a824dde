//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod code_generator;
pub mod locale_parser;
pub mod logger;
pub mod module_resolver;
pub mod server_host;
pub mod session_events;

pub use code_generator::CodeGenerator;
pub use locale_parser::LocaleParser;
pub use logger::{Logger, NoopLogger};
pub use module_resolver::ModuleResolver;
pub use server_host::{ServerHost, WatchCallback, WatchHandle};
pub use session_events::{NoopEventSink, SessionEvent, SessionEventSink};
