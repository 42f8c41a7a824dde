//! CLI command implementations

pub mod check;
pub mod generate;
pub mod resolve;
pub mod watch;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use localetypes::config::{find_config, ConfigWarning, ProjectConfig, CONFIG_FILE_NAME};
use localetypes::infrastructure::{
    ConsoleEventSink, JsonEventSink, LocalHost, NodeModuleResolver, TracingLogger,
};
use localetypes::{
    ConfigRejection, PluginConfig, PluginCreateInfo, PluginSession, ResolverHook, SessionEventSink,
};

/// A loaded `localetypes.toml` and the directory it lives in
pub struct Project {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub config: ProjectConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl Project {
    /// Load the config at `explicit`, or the nearest one above the current directory
    pub fn locate(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let cwd = std::env::current_dir().context("cannot read current directory")?;
                find_config(&cwd).with_context(|| {
                    format!(
                        "no {CONFIG_FILE_NAME} found in {} or its parents",
                        cwd.display()
                    )
                })?
            }
        };
        let (config, warnings) = ProjectConfig::load_with_warnings(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;
        let root = match config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            root,
            config_path,
            config,
            warnings,
        })
    }

    /// Print unknown-key warnings to stderr
    pub fn report_warnings(&self, json: bool) {
        for warning in &self.warnings {
            if json {
                let event = serde_json::json!({
                    "event": "config_warning",
                    "key": warning.key,
                    "file": warning.file,
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                });
                eprintln!("{event}");
            } else {
                eprintln!("warning: {warning}");
            }
        }
    }

    /// Plugin options as the host would pass them
    pub fn options(&self) -> serde_json::Value {
        self.config.plugin_options(&self.root).to_value()
    }

    /// Validate the options against the real filesystem
    pub fn plugin_config(&self) -> Result<PluginConfig, ConfigRejection> {
        localetypes::check(&self.options(), Some(&LocalHost::new()))
    }

    /// Default file the CLI pretends is importing the module
    pub fn entry_file(&self) -> PathBuf {
        self.root.join("index.ts")
    }
}

/// A plugin session attached to the local filesystem, as an editor would run it
pub struct HostedSession {
    pub session: PluginSession,
    pub hook: Arc<ResolverHook>,
}

impl HostedSession {
    pub fn start(project: &Project, command: &'static str, json: bool) -> Self {
        let events: Arc<dyn SessionEventSink> = if json {
            Arc::new(JsonEventSink::stdout(command))
        } else {
            Arc::new(ConsoleEventSink::stderr())
        };
        let session = PluginSession::default().with_events(events);
        let hook = Arc::new(ResolverHook::new(Arc::new(NodeModuleResolver::new())));
        session.create(PluginCreateInfo {
            language_service: (),
            resolver_hook: Arc::clone(&hook),
            server_host: Some(Arc::new(LocalHost::new())),
            logger: Arc::new(TracingLogger::new()),
            options: project.options(),
        });
        Self { session, hook }
    }
}
