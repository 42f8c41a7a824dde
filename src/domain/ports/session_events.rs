//! Session Event Port
//!
//! Observable interface for plugin sessions. Failures that the session must
//! not propagate (rejected options, failed generation) still show up here.

use std::path::PathBuf;

use serde::Serialize;

/// Event emitted by a plugin session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Options accepted and the session is active
    Activated { module_name: String },
    /// Options rejected at creation; the plugin stays inert
    ActivationRejected { reason: String },
    /// New options accepted
    Reconfigured { module_name: String },
    /// New options rejected; the previous configuration keeps running
    ReconfigurationRejected { reason: String },
    /// The resolver wrapper was installed
    ResolverHooked,
    /// The host has no resolver to wrap
    ResolverUnavailable,
    /// The tracked module was answered with the generated artifact
    ModuleIntercepted {
        module_name: String,
        containing_file: PathBuf,
    },
    /// A watched locale file changed
    FileChanged { path: PathBuf },
    /// The artifact was regenerated
    Regenerated {
        output: PathBuf,
        locales: usize,
        hash: String,
    },
    /// Regeneration failed; the previous artifact is untouched
    RegenerationFailed { message: String },
    /// The watch set was replaced
    WatchesRefreshed { opened: usize, closed: usize },
    /// The session was disposed and its watches closed
    Disposed { closed: usize },
}

/// Trait for receiving session events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: Silent operation
pub trait SessionEventSink: Send + Sync {
    fn on_event(&self, event: SessionEvent);
}

/// No-op event sink for silent operation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventSink;

impl SessionEventSink for NoopEventSink {
    fn on_event(&self, _event: SessionEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_tag() {
        let event = SessionEvent::WatchesRefreshed {
            opened: 2,
            closed: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"watches_refreshed","opened":2,"closed":1}"#);
    }

    #[test]
    fn unit_event_serializes_tag_only() {
        let json = serde_json::to_string(&SessionEvent::ResolverHooked).unwrap();
        assert_eq!(json, r#"{"event":"resolver_hooked"}"#);
    }
}
