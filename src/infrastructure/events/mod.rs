//! Event Sink Implementations
//!
//! Concrete implementations of the SessionEventSink port.

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
