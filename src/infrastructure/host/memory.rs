//! In-memory host
//!
//! A `ServerHost` that keeps files in a map and fires watch callbacks only
//! when asked to (`edit_file`, `notify_change`). It also counts what the
//! plugin did to it: writes, watches opened, watches closed.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{ServerHost, WatchCallback, WatchHandle};
use crate::domain::value_objects::is_locale_file;
use crate::error::{HostError, HostResult};

#[derive(Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
    watches: Vec<WatchSlot>,
    writes: Vec<PathBuf>,
    fail_watches: bool,
}

impl MemoryState {
    fn prune_closed(&mut self) {
        self.watches.retain(|slot| slot.open.load(Ordering::SeqCst));
    }
}

struct WatchSlot {
    path: PathBuf,
    callback: WatchCallback,
    open: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct WatchCounters {
    opened: AtomicUsize,
    closed: AtomicUsize,
}

/// In-memory host for tests and embedding
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<MemoryState>,
    counters: Arc<WatchCounters>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create a file without firing watches
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.lock().files.insert(path.into(), content.into());
    }

    /// Create an empty directory
    pub fn create_dir(&self, path: impl Into<PathBuf>) {
        self.lock().dirs.insert(path.into());
    }

    /// Remove a directory and everything below it
    pub fn remove_dir(&self, path: &Path) {
        let mut state = self.lock();
        state.files.retain(|p, _| !p.starts_with(path));
        state.dirs.retain(|p| !p.starts_with(path));
    }

    /// Remove a single file without firing watches
    pub fn remove_file(&self, path: &Path) {
        self.lock().files.remove(path);
    }

    /// Change a file and fire every open watch on it
    pub fn edit_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        self.insert_file(path.clone(), content);
        self.notify_change(&path);
    }

    /// Fire every open watch on `path`
    ///
    /// Callbacks run after the host lock is released, so they may call back
    /// into the host.
    pub fn notify_change(&self, path: &Path) -> usize {
        let callbacks: Vec<WatchCallback> = {
            let mut state = self.lock();
            state.prune_closed();
            state
                .watches
                .iter()
                .filter(|slot| slot.path == path)
                .map(|slot| Arc::clone(&slot.callback))
                .collect()
        };
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }

    /// Make writes to `path` fail
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        self.lock().read_only.insert(path.into());
    }

    /// Make every subsequent `watch_file` call fail
    pub fn fail_watches(&self, fail: bool) {
        self.lock().fail_watches = fail;
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.lock().files.get(path).cloned()
    }

    /// Every path written through `write_file`, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.lock().writes.clone()
    }

    /// Number of writes that targeted `path`
    pub fn write_count(&self, path: &Path) -> usize {
        self.lock().writes.iter().filter(|p| p.as_path() == path).count()
    }

    /// Paths with a currently open watch, in opening order
    pub fn open_watches(&self) -> Vec<PathBuf> {
        self.lock()
            .watches
            .iter()
            .filter(|slot| slot.open.load(Ordering::SeqCst))
            .map(|slot| slot.path.clone())
            .collect()
    }

    pub fn watches_opened(&self) -> usize {
        self.counters.opened.load(Ordering::SeqCst)
    }

    pub fn watches_closed(&self) -> usize {
        self.counters.closed.load(Ordering::SeqCst)
    }
}

impl ServerHost for MemoryHost {
    fn list_locale_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        if !self.directory_exists(dir) {
            return Err(HostError::Listing {
                path: dir.to_path_buf(),
                message: "no such directory".to_string(),
            });
        }
        Ok(self
            .lock()
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir) && is_locale_file(p))
            .cloned()
            .collect())
    }

    fn directory_exists(&self, path: &Path) -> bool {
        let state = self.lock();
        state.dirs.iter().any(|d| d.starts_with(path))
            || state
                .files
                .keys()
                .any(|f| f.parent().map(|p| p.starts_with(path)).unwrap_or(false))
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        self.file(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> HostResult<()> {
        let mut state = self.lock();
        if state.read_only.contains(path) {
            return Err(HostError::Write {
                path: path.to_path_buf(),
                message: "read-only file".to_string(),
            });
        }
        state.writes.push(path.to_path_buf());
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn watch_file(&self, path: &Path, on_change: WatchCallback) -> HostResult<Box<dyn WatchHandle>> {
        let mut state = self.lock();
        if state.fail_watches {
            return Err(HostError::Watch {
                path: path.to_path_buf(),
                message: "watch limit reached".to_string(),
            });
        }
        state.prune_closed();
        let open = Arc::new(AtomicBool::new(true));
        state.watches.push(WatchSlot {
            path: path.to_path_buf(),
            callback: on_change,
            open: Arc::clone(&open),
        });
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryWatchHandle {
            path: path.to_path_buf(),
            open,
            counters: Arc::clone(&self.counters),
        }))
    }
}

struct MemoryWatchHandle {
    path: PathBuf,
    open: Arc<AtomicBool>,
    counters: Arc<WatchCounters>,
}

impl WatchHandle for MemoryWatchHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn close(&mut self) {
        if self.open.swap(false, Ordering::SeqCst) {
            self.counters.closed.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_direct_yaml_children() {
        let host = MemoryHost::new();
        host.insert_file("/p/locales/fr.yaml", "a: b");
        host.insert_file("/p/locales/en.yaml", "a: b");
        host.insert_file("/p/locales/notes.txt", "");
        host.insert_file("/p/locales/nested/de.yaml", "a: b");

        let files = host.list_locale_files(Path::new("/p/locales")).unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/p/locales/en.yaml"),
                PathBuf::from("/p/locales/fr.yaml")
            ]
        );
    }

    #[test]
    fn listing_missing_directory_fails() {
        let host = MemoryHost::new();
        assert!(host.list_locale_files(Path::new("/nowhere")).is_err());
    }

    #[test]
    fn directory_exists_for_parents_and_created_dirs() {
        let host = MemoryHost::new();
        host.insert_file("/p/locales/en.yaml", "");
        host.create_dir("/p/empty");
        assert!(host.directory_exists(Path::new("/p/locales")));
        assert!(host.directory_exists(Path::new("/p")));
        assert!(host.directory_exists(Path::new("/p/empty")));
        assert!(!host.directory_exists(Path::new("/q")));

        host.remove_dir(Path::new("/p/locales"));
        assert!(!host.directory_exists(Path::new("/p/locales")));
    }

    #[test]
    fn closed_watch_stops_firing() {
        let host = MemoryHost::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut handle = host
            .watch_file(
                Path::new("/p/en.yaml"),
                Arc::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            )
            .unwrap();

        host.edit_file("/p/en.yaml", "a: 1");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        handle.close();
        handle.close();
        host.edit_file("/p/en.yaml", "a: 2");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(host.watches_opened(), 1);
        assert_eq!(host.watches_closed(), 1);
    }

    #[test]
    fn closed_watches_do_not_accumulate() {
        let host = MemoryHost::new();
        for _ in 0..10 {
            let mut handle = host
                .watch_file(Path::new("/p/en.yaml"), Arc::new(|| {}))
                .unwrap();
            handle.close();
        }
        let _live = host
            .watch_file(Path::new("/p/en.yaml"), Arc::new(|| {}))
            .unwrap();

        assert_eq!(host.lock().watches.len(), 1);
        assert_eq!(host.open_watches(), vec![PathBuf::from("/p/en.yaml")]);
        assert_eq!(host.watches_opened(), 11);
        assert_eq!(host.watches_closed(), 10);
    }

    #[test]
    fn read_only_write_fails_and_keeps_content() {
        let host = MemoryHost::new();
        host.insert_file("/p/out.d.ts", "old");
        host.set_read_only("/p/out.d.ts");
        assert!(host.write_file(Path::new("/p/out.d.ts"), "new").is_err());
        assert_eq!(host.file(Path::new("/p/out.d.ts")).as_deref(), Some("old"));
        assert_eq!(host.write_count(Path::new("/p/out.d.ts")), 0);
    }
}
