//! Local host implementation
//!
//! Implements the ServerHost port over the local disk. File watches use
//! `notify` on the file's parent directory and filter events down to the one
//! file, so editors that save through rename-and-replace keep triggering.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::ports::{ServerHost, WatchCallback, WatchHandle};
use crate::domain::value_objects::is_locale_file;
use crate::error::{HostError, HostResult};

/// Local file system host
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl LocalHost {
    /// Create a new LocalHost instance
    pub fn new() -> Self {
        Self
    }
}

impl ServerHost for LocalHost {
    fn list_locale_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>> {
        let listing_error = |e: std::io::Error| HostError::Listing {
            path: dir.to_path_buf(),
            message: e.to_string(),
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(listing_error)? {
            let path = entry.map_err(listing_error)?.path();
            if path.is_file() && is_locale_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }

    fn write_file(&self, path: &Path, content: &str) -> HostResult<()> {
        let write_error = |e: std::io::Error| HostError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(write_error)?;

        // Atomic replace: readers never observe a half-written artifact
        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.persist(path).map_err(|e| write_error(e.error))?;
        Ok(())
    }

    fn watch_file(&self, path: &Path, on_change: WatchCallback) -> HostResult<Box<dyn WatchHandle>> {
        let watch_error = |message: String| HostError::Watch {
            path: path.to_path_buf(),
            message,
        };

        let file_name = path
            .file_name()
            .ok_or_else(|| watch_error("not a file path".to_string()))?;
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let dir = dir.canonicalize().map_err(|e| watch_error(e.to_string()))?;
        let target = dir.join(file_name);

        let open = Arc::new(AtomicBool::new(true));
        let still_open = Arc::clone(&open);
        let watched = target.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                let Ok(event) = res else { return };
                if matches!(event.kind, EventKind::Access(_)) {
                    return;
                }
                if still_open.load(Ordering::SeqCst) && event.paths.iter().any(|p| p == &watched) {
                    on_change();
                }
            },
            Config::default(),
        )
        .map_err(|e| watch_error(e.to_string()))?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| watch_error(e.to_string()))?;

        tracing::debug!(path = %target.display(), "opened file watch");

        Ok(Box::new(NotifyWatchHandle {
            path: path.to_path_buf(),
            watcher: Some(watcher),
            open,
        }))
    }
}

/// Watch handle backed by a dedicated `notify` watcher
struct NotifyWatchHandle {
    path: PathBuf,
    watcher: Option<RecommendedWatcher>,
    open: Arc<AtomicBool>,
}

impl WatchHandle for NotifyWatchHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn close(&mut self) {
        self.open.store(false, Ordering::SeqCst);
        if self.watcher.take().is_some() {
            tracing::debug!(path = %self.path.display(), "closed file watch");
        }
    }
}

impl Drop for NotifyWatchHandle {
    fn drop(&mut self) {
        self.close();
    }
}
