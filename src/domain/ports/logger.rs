//! Logger port
//!
//! Advisory logging supplied by the host. Logging is best-effort: nothing in
//! the plugin depends on a message being delivered.

/// Host-provided logger
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
}

/// Logger that drops every message
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
}
