//! Tracing-backed Logger port implementation

use crate::domain::ports::Logger;

/// Forwards plugin log lines to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "localetypes", "{message}");
    }
}
