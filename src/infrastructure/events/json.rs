//! JSON Event Sink
//!
//! Outputs session events as NDJSON for editor integrations and CI.

use crate::domain::ports::{SessionEvent, SessionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Render one event as a JSON object with the `command` field included
    pub fn render(command: &str, event: &SessionEvent) -> serde_json::Value {
        let mut value =
            serde_json::to_value(event).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        value
    }
}

impl SessionEventSink for JsonEventSink {
    fn on_event(&self, event: SessionEvent) {
        let json = Self::render(self.command, &event);
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", json);
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_event() {
        let buffer = SharedBuffer::default();
        let sink = JsonEventSink::with_writer("watch", buffer.clone());

        sink.on_event(SessionEvent::FileChanged {
            path: PathBuf::from("locales/fr.yaml"),
        });
        sink.on_event(SessionEvent::RegenerationFailed {
            message: "invalid locale file \"fr.yaml\"".to_string(),
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "file_changed");
        assert_eq!(first["command"], "watch");
        assert_eq!(first["path"], "locales/fr.yaml");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["event"], "regeneration_failed");
        assert_eq!(second["message"], "invalid locale file \"fr.yaml\"");
    }
}
