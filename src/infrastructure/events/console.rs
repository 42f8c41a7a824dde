//! Console Event Sink
//!
//! Human-readable, timestamped event lines for the terminal.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SessionEvent, SessionEventSink};

/// Event sink printing one line per event to stderr
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Format one event without timestamp
    pub fn describe(event: &SessionEvent) -> String {
        match event {
            SessionEvent::Activated { module_name } => format!("serving '{module_name}'"),
            SessionEvent::ActivationRejected { reason } => format!("inactive: {reason}"),
            SessionEvent::Reconfigured { module_name } => {
                format!("configuration updated, serving '{module_name}'")
            }
            SessionEvent::ReconfigurationRejected { reason } => {
                format!("reconfiguration rejected, continuing with prior config: {reason}")
            }
            SessionEvent::ResolverHooked => "resolver hooked".to_string(),
            SessionEvent::ResolverUnavailable => "host has no module resolver to hook".to_string(),
            SessionEvent::ModuleIntercepted {
                module_name,
                containing_file,
            } => format!(
                "resolved '{module_name}' for {}",
                containing_file.display()
            ),
            SessionEvent::FileChanged { path } => format!("changed {}", path.display()),
            SessionEvent::Regenerated {
                output,
                locales,
                hash,
            } => format!(
                "wrote {} ({locales} locales, {hash})",
                output.display()
            ),
            SessionEvent::RegenerationFailed { message } => format!("generation failed: {message}"),
            SessionEvent::WatchesRefreshed { opened, closed } => {
                format!("watching {opened} files (closed {closed})")
            }
            SessionEvent::Disposed { closed } => format!("disposed, closed {closed} watches"),
        }
    }
}

impl SessionEventSink for ConsoleEventSink {
    fn on_event(&self, event: SessionEvent) {
        let line = Self::describe(&event);
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "[{timestamp}] {line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn describes_rejected_reconfiguration_distinctly() {
        let line = ConsoleEventSink::describe(&SessionEvent::ReconfigurationRejected {
            reason: "moduleName is required".to_string(),
        });
        assert!(line.starts_with("reconfiguration rejected, continuing with prior config"));
    }

    #[test]
    fn describes_regeneration() {
        let line = ConsoleEventSink::describe(&SessionEvent::Regenerated {
            output: PathBuf::from("src/i18n.d.ts"),
            locales: 2,
            hash: "0123456789ab".to_string(),
        });
        assert_eq!(line, "wrote src/i18n.d.ts (2 locales, 0123456789ab)");
    }
}
