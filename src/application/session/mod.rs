//! Plugin session
//!
//! One session per project. Lifecycle:
//!
//! ```text
//! Uninitialized --create(valid)--> Validated --resolver hooked--> Active
//!       |                                                          |
//!       +--create(invalid): stays inert        onConfigurationChanged(valid)*
//!
//! any phase --dispose / drop--> Disposed
//! ```
//!
//! The resolver wrapper is installed at most once per session; later
//! reconfigurations are observed by the wrapper through live reads of the
//! session state. A disposed session closes its watches and the wrapper
//! passes every name through to the host resolver.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock, TryLockError};

use crate::domain::ports::{
    CodeGenerator, LocaleParser, Logger, ModuleResolver, NoopEventSink, NoopLogger, ServerHost,
    SessionEvent, SessionEventSink,
};
use crate::domain::services::check;
use crate::domain::value_objects::PluginConfig;
use crate::error::HostResult;
use crate::infrastructure::{TypeScriptGenerator, YamlLocaleParser};

use crate::application::interceptor::{InterceptingResolver, ResolverHook};
use crate::application::regenerate::{RegenerationPipeline, RegenerationReport};
use crate::application::watch_set::{ChangeHandler, RefreshSummary, WatchSetManager};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No options adopted yet
    Uninitialized,
    /// Options adopted, but the host had no resolver to hook
    Validated,
    /// Options adopted and resolution intercepted
    Active,
    /// Watches closed and options dropped; nothing brings it back
    Disposed,
}

/// Outcome of the most recent regeneration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegenerationStatus {
    Written(RegenerationReport),
    Failed(String),
}

/// Everything the host hands over when creating the plugin
pub struct PluginCreateInfo<L> {
    /// Returned unchanged from `create`
    pub language_service: L,
    /// The host's module resolution slot
    pub resolver_hook: Arc<ResolverHook>,
    /// Host capabilities; `None` means the host cannot list directories
    pub server_host: Option<Arc<dyn ServerHost>>,
    pub logger: Arc<dyn Logger>,
    /// Opaque plugin options
    pub options: serde_json::Value,
}

struct SessionState {
    phase: SessionPhase,
    host: Option<Arc<dyn ServerHost>>,
    logger: Arc<dyn Logger>,
    hook: Option<Arc<ResolverHook>>,
    config: Option<PluginConfig>,
}

/// Snapshot of what a regeneration or resolution needs
#[derive(Clone)]
pub(crate) struct ActiveContext {
    pub(crate) host: Arc<dyn ServerHost>,
    pub(crate) logger: Arc<dyn Logger>,
    pub(crate) config: PluginConfig,
}

/// Shared session object the resolver wrapper and watch callbacks point at
pub(crate) struct SessionCore {
    parser: Arc<dyn LocaleParser>,
    generator: Arc<dyn CodeGenerator>,
    events: RwLock<Arc<dyn SessionEventSink>>,
    state: RwLock<SessionState>,
    watches: WatchSetManager,
    installed: AtomicBool,
    requested: AtomicBool,
    in_flight: Mutex<()>,
    runs: AtomicUsize,
    last: Mutex<Option<RegenerationStatus>>,
}

impl SessionCore {
    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    fn logger(&self) -> Arc<dyn Logger> {
        Arc::clone(&self.read_state().logger)
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        let events = Arc::clone(&self.events.read().unwrap_or_else(|e| e.into_inner()));
        events.on_event(event);
    }

    fn set_events(&self, events: Arc<dyn SessionEventSink>) {
        *self.events.write().unwrap_or_else(|e| e.into_inner()) = events;
    }

    /// Current host, logger and config, if options have been adopted
    pub(crate) fn context(&self) -> Option<ActiveContext> {
        let state = self.read_state();
        Some(ActiveContext {
            host: Arc::clone(state.host.as_ref()?),
            logger: Arc::clone(&state.logger),
            config: state.config.clone()?,
        })
    }

    /// Request a regeneration
    ///
    /// At most one run is in flight per session. A request arriving during a
    /// run is folded into one follow-up run, which reads the newest config.
    pub(crate) fn regenerate(&self) {
        self.requested.store(true, Ordering::SeqCst);
        loop {
            let guard = match self.in_flight.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::WouldBlock) => return,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            };
            while self.requested.swap(false, Ordering::SeqCst) {
                self.run_once();
            }
            drop(guard);
            if !self.requested.load(Ordering::SeqCst) {
                return;
            }
        }
    }

    fn run_once(&self) {
        let Some(ctx) = self.context() else { return };
        self.runs.fetch_add(1, Ordering::SeqCst);

        let pipeline = RegenerationPipeline::new(
            ctx.host.as_ref(),
            self.parser.as_ref(),
            self.generator.as_ref(),
            ctx.logger.as_ref(),
        );
        let status = match pipeline.run(&ctx.config) {
            Ok(report) => {
                self.emit(SessionEvent::Regenerated {
                    output: report.output.clone(),
                    locales: report.locales.len(),
                    hash: report.hash.short().to_string(),
                });
                RegenerationStatus::Written(report)
            }
            Err(e) => {
                self.emit(SessionEvent::RegenerationFailed {
                    message: e.to_string(),
                });
                RegenerationStatus::Failed(e.to_string())
            }
        };
        *self.last.lock().unwrap_or_else(|e| e.into_inner()) = Some(status);
    }

    /// Rebuild the watch set from a fresh listing of the locales directory
    pub(crate) fn refresh_watches(
        self: &Arc<Self>,
        ctx: &ActiveContext,
    ) -> HostResult<RefreshSummary> {
        let files = ctx.host.list_locale_files(ctx.config.locales_dir())?;
        if !self.watches.is_empty() {
            ctx.logger.info("close file watchers");
        }
        ctx.logger.info("watch files");

        let summary = self
            .watches
            .refresh(ctx.host.as_ref(), &files, self.change_handler())?;

        ctx.logger.info(&format!("watched {} files", summary.opened));
        self.emit(SessionEvent::WatchesRefreshed {
            opened: summary.opened,
            closed: summary.closed,
        });
        Ok(summary)
    }

    /// Re-list the locales directory and, if the set of files differs from
    /// the watched one, regenerate and rebuild the watch set
    pub(crate) fn refresh_if_locales_changed(self: &Arc<Self>) -> HostResult<bool> {
        if self.read_state().phase != SessionPhase::Active {
            return Ok(false);
        }
        let Some(ctx) = self.context() else {
            return Ok(false);
        };
        if !ctx.host.directory_exists(ctx.config.locales_dir()) {
            return Ok(false);
        }
        let files = ctx.host.list_locale_files(ctx.config.locales_dir())?;
        if files == self.watches.watched_paths() {
            return Ok(false);
        }
        ctx.logger.info("locale files changed");
        self.regenerate();
        self.refresh_watches(&ctx)?;
        Ok(true)
    }

    fn change_handler(self: &Arc<Self>) -> ChangeHandler {
        let session = Arc::downgrade(self);
        Arc::new(move |path: &Path| {
            let Some(session) = session.upgrade() else { return };
            tracing::debug!(path = %path.display(), "locale file changed");
            session.emit(SessionEvent::FileChanged {
                path: path.to_path_buf(),
            });
            session.regenerate();
        })
    }

    /// Wrap the host resolver, once per session lifetime
    fn install_interceptor(self: &Arc<Self>) {
        let (hook, logger) = {
            let state = self.read_state();
            if state.host.is_none() || state.config.is_none() {
                return;
            }
            let Some(hook) = state.hook.clone() else { return };
            (hook, Arc::clone(&state.logger))
        };
        if self.installed.swap(true, Ordering::SeqCst) {
            return;
        }

        let session = Arc::downgrade(self);
        let hooked = hook.wrap_with(|original| -> Arc<dyn ModuleResolver> {
            Arc::new(InterceptingResolver::new(original, session))
        });

        if hooked {
            logger.info("hook resolve module");
            self.write_state().phase = SessionPhase::Active;
            self.emit(SessionEvent::ResolverHooked);
        } else {
            logger.info("host has no module resolver, not hooking");
            self.emit(SessionEvent::ResolverUnavailable);
        }
    }
}

/// A plugin instance bound to one project
pub struct PluginSession {
    core: Arc<SessionCore>,
}

impl Default for PluginSession {
    fn default() -> Self {
        Self::new(Arc::new(YamlLocaleParser), Arc::new(TypeScriptGenerator))
    }
}

impl PluginSession {
    /// Create an uninitialized session with the given collaborators
    pub fn new(parser: Arc<dyn LocaleParser>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            core: Arc::new(SessionCore {
                parser,
                generator,
                events: RwLock::new(Arc::new(NoopEventSink)),
                state: RwLock::new(SessionState {
                    phase: SessionPhase::Uninitialized,
                    host: None,
                    logger: Arc::new(NoopLogger),
                    hook: None,
                    config: None,
                }),
                watches: WatchSetManager::new(),
                installed: AtomicBool::new(false),
                requested: AtomicBool::new(false),
                in_flight: Mutex::new(()),
                runs: AtomicUsize::new(0),
                last: Mutex::new(None),
            }),
        }
    }

    /// Report session events to `events`
    pub fn with_events(self, events: Arc<dyn SessionEventSink>) -> Self {
        self.set_events(events);
        self
    }

    /// Replace the event sink; an installed resolver wrapper keeps working
    pub fn set_events(&self, events: Arc<dyn SessionEventSink>) {
        self.core.set_events(events);
    }

    /// Adopt the host and, if the options are valid, hook module resolution
    ///
    /// Invalid options are not an error: the language service comes back
    /// untouched and the plugin stays inert.
    pub fn create<L>(&self, info: PluginCreateInfo<L>) -> L {
        let PluginCreateInfo {
            language_service,
            resolver_hook,
            server_host,
            logger,
            options,
        } = info;

        if self.phase() == SessionPhase::Disposed {
            logger.info("plugin disposed, ignoring create");
            return language_service;
        }

        let checked = check(&options, server_host.as_deref());
        {
            let mut state = self.core.write_state();
            state.host = server_host;
            state.logger = Arc::clone(&logger);
            state.hook = Some(resolver_hook);
        }

        match checked {
            Err(rejection) => {
                logger.info(&format!("invalid options: {rejection}"));
                self.core.emit(SessionEvent::ActivationRejected {
                    reason: rejection.to_string(),
                });
            }
            Ok(config) => {
                logger.info(&format!("create plugin: {options}"));
                let module_name = config.module_name().to_string();
                {
                    let mut state = self.core.write_state();
                    state.config = Some(config);
                    state.phase = SessionPhase::Validated;
                }
                self.core.emit(SessionEvent::Activated { module_name });
                self.core.install_interceptor();
            }
        }

        language_service
    }

    /// Apply new options
    ///
    /// Valid options replace the current config, make sure resolution is
    /// hooked, and regenerate right away. Invalid options leave the previous
    /// configuration running; that is logged and reported as
    /// `ReconfigurationRejected`. Returns whether the options were adopted.
    pub fn on_configuration_changed(&self, options: &serde_json::Value) -> bool {
        let logger = self.core.logger();
        logger.info("config changed");
        if self.phase() == SessionPhase::Disposed {
            logger.info("plugin disposed, ignoring new config");
            return false;
        }

        let host = self.core.read_state().host.clone();
        match check(options, host.as_deref()) {
            Err(rejection) => {
                logger.info(&format!(
                    "reconfiguration rejected, continuing with prior config: {rejection}"
                ));
                self.core.emit(SessionEvent::ReconfigurationRejected {
                    reason: rejection.to_string(),
                });
                false
            }
            Ok(config) => {
                let module_name = config.module_name().to_string();
                {
                    let mut state = self.core.write_state();
                    state.config = Some(config);
                    if state.phase == SessionPhase::Uninitialized {
                        state.phase = SessionPhase::Validated;
                    }
                }
                self.core.emit(SessionEvent::Reconfigured { module_name });
                self.core.install_interceptor();
                self.core.regenerate();
                true
            }
        }
    }

    /// Regenerate now, independent of resolution or file changes
    pub fn regenerate(&self) {
        self.core.regenerate();
    }

    /// Pick up locale files added to or removed from the locales directory
    ///
    /// Watches only see edits to files that existed at the last resolution.
    /// A host that cannot report new files calls this periodically instead of
    /// waiting for the editor to resolve the module again. Returns whether
    /// the listing had changed.
    pub fn refresh_if_locales_changed(&self) -> HostResult<bool> {
        self.core.refresh_if_locales_changed()
    }

    /// Close every watch and stop intercepting resolution
    ///
    /// Later `create` and `on_configuration_changed` calls are ignored.
    /// Dropping the session disposes it as well.
    pub fn dispose(&self) {
        let logger = {
            let mut state = self.core.write_state();
            if state.phase == SessionPhase::Disposed {
                return;
            }
            state.phase = SessionPhase::Disposed;
            state.config = None;
            Arc::clone(&state.logger)
        };
        let closed = self.core.watches.clear();
        logger.info("dispose plugin");
        self.core.emit(SessionEvent::Disposed { closed });
    }

    pub fn phase(&self) -> SessionPhase {
        self.core.read_state().phase
    }

    /// The adopted configuration, if any
    pub fn config(&self) -> Option<PluginConfig> {
        self.core.read_state().config.clone()
    }

    /// True once the resolver wrapper installation has been attempted
    pub fn is_hooked(&self) -> bool {
        self.core.installed.load(Ordering::SeqCst)
    }

    /// Currently watched locale files
    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.core.watches.watched_paths()
    }

    /// Number of regeneration runs performed so far
    pub fn regeneration_runs(&self) -> usize {
        self.core.runs.load(Ordering::SeqCst)
    }

    pub fn last_regeneration(&self) -> Option<RegenerationStatus> {
        self.core
            .last
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Drop for PluginSession {
    fn drop(&mut self) {
        self.dispose();
    }
}
