//! Editor session on a real project directory

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use localetypes::infrastructure::NodeModuleResolver;
use localetypes::{
    LocalHost, ModuleResolver, PluginCreateInfo, PluginSession, ResolvedModule, ResolverHook,
    SessionEvent, SessionEventSink, SessionPhase,
};

use crate::common::*;

#[derive(Default)]
struct Recorder(Mutex<Vec<SessionEvent>>);

impl SessionEventSink for Recorder {
    fn on_event(&self, event: SessionEvent) {
        self.0.lock().unwrap().push(event);
    }
}

struct Editor {
    env: TestEnv,
    session: PluginSession,
    hook: Arc<ResolverHook>,
    events: Arc<Recorder>,
}

impl Editor {
    fn open(env: TestEnv) -> Self {
        let events = Arc::new(Recorder::default());
        let session = PluginSession::default().with_events(events.clone());
        let hook = Arc::new(ResolverHook::new(Arc::new(NodeModuleResolver::new())));
        let options = serde_json::json!({
            "moduleName": "i18n",
            "localesDirectory": env.project_path("locales"),
            "outputPath": env.project_path("src/i18n.d.ts"),
        });
        session.create(PluginCreateInfo {
            language_service: (),
            resolver_hook: Arc::clone(&hook),
            server_host: Some(Arc::new(LocalHost::new())),
            logger: Arc::new(localetypes::infrastructure::TracingLogger::new()),
            options,
        });
        Self {
            env,
            session,
            hook,
            events,
        }
    }

    fn resolve(&self, name: &str) -> Option<ResolvedModule> {
        self.hook
            .resolve_module_names(
                &[name.to_string()],
                &self.env.project_path("src/main.ts"),
                None,
            )
            .unwrap()
            .pop()
            .flatten()
    }

    fn output(&self) -> Option<String> {
        self.env.read("src/i18n.d.ts")
    }
}

/// Poll until `check` holds or the timeout elapses
fn eventually(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if check() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    check()
}

#[test]
fn test_resolution_generates_and_points_at_output() {
    let editor = Editor::open(TestEnv::with_locales());
    assert_eq!(editor.session.phase(), SessionPhase::Active);

    let module = editor.resolve("i18n").expect("tracked module resolves");

    assert_eq!(module.path(), editor.env.project_path("src/i18n.d.ts"));
    assert!(!module.is_external_library_import);
    assert!(editor
        .output()
        .unwrap()
        .contains("export type Language = \"en\" | \"fr\""));
    assert_eq!(editor.session.watched_paths().len(), 2);
}

#[test]
fn test_editing_locale_file_updates_output() {
    let editor = Editor::open(TestEnv::with_locales());
    editor.resolve("i18n").unwrap();

    editor
        .env
        .write("locales/en.yaml", &format!("{EN_YAML}farewell: Goodbye\n"));

    let updated = eventually(Duration::from_secs(5), || {
        editor
            .output()
            .map(|o| o.contains("  farewell: string\n"))
            .unwrap_or(false)
    });
    assert!(updated, "output not regenerated: {:?}", editor.output());
    assert!(editor
        .events
        .0
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, SessionEvent::FileChanged { path } if path.ends_with("en.yaml"))));
}

#[test]
fn test_added_locale_file_is_picked_up_and_watched() {
    let editor = Editor::open(TestEnv::with_locales());
    editor.resolve("i18n").unwrap();

    editor.env.write("locales/de.yaml", "greeting: Hallo {name}\n");

    let added = eventually(Duration::from_secs(5), || {
        editor.session.refresh_if_locales_changed().unwrap();
        editor
            .output()
            .map(|o| o.contains("\"de\""))
            .unwrap_or(false)
    });
    assert!(added, "de missing from output: {:?}", editor.output());
    assert_eq!(editor.session.watched_paths().len(), 3);

    editor
        .env
        .write("locales/de.yaml", "greeting: Hallo {name}\nfarewell: Tschüss\n");
    let updated = eventually(Duration::from_secs(5), || {
        editor
            .output()
            .map(|o| o.contains("farewell"))
            .unwrap_or(false)
    });
    assert!(updated, "edit to de.yaml not picked up: {:?}", editor.output());
}

#[test]
fn test_removed_locales_directory_falls_back() {
    let editor = Editor::open(TestEnv::with_locales());
    std::fs::remove_dir_all(editor.env.project_path("locales")).unwrap();

    assert_eq!(editor.resolve("i18n"), None);
    assert!(editor.output().is_none());
}

#[test]
fn test_dropping_session_releases_watches() {
    let editor = Editor::open(TestEnv::with_locales());
    editor.resolve("i18n").unwrap();
    let Editor {
        env, session, hook, ..
    } = editor;
    let before = env.read("src/i18n.d.ts");

    drop(session);
    env.write("locales/fr.yaml", "greeting: salut\n");
    std::thread::sleep(Duration::from_millis(300));

    assert_eq!(env.read("src/i18n.d.ts"), before);
    let resolved = hook
        .resolve_module_names(&["i18n".to_string()], Path::new("/nowhere/main.ts"), None)
        .unwrap();
    assert_eq!(resolved, vec![None]);
}
