//! Logging setup for the CLI.
//!
//! Compact timestamped output with per-target levels from the `[logging]`
//! section of `localetypes.toml`. `RUST_LOG` takes precedence:
//!
//! ```bash
//! RUST_LOG=localetypes=info localetypes watch
//! ```
//!
//! Plugin log lines (the host `log` capability) use the `localetypes` target.

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Filter directive for a config, raised by `-v` flags
///
/// Each `-v` lifts the default level one step: warn, info, debug, trace.
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> String {
    let default = match verbose {
        0 => config.default.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let mut directive = default;
    for (module, level) in &config.modules {
        directive.push_str(&format!(",{module}={level}"));
    }
    directive
}

/// Initialize logging.
///
/// Call once at startup; later calls have no effect. Output goes to stderr so
/// `--json` event streams on stdout stay clean.
pub fn init_with_config(config: &LoggingConfig, verbose: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directive(config, verbose))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Initialize logging with the default `warn` level.
pub fn init() {
    init_with_config(&LoggingConfig::default(), 0);
}
