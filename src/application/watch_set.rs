//! Watch set management
//!
//! A session owns at most one live `WatchSet`: one watch per locale file that
//! existed when the set was built. `refresh` closes the whole previous set
//! before opening any new watch, so the same file is never watched twice and
//! no handle outlives its set.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::{ServerHost, WatchCallback, WatchHandle};
use crate::error::HostResult;

/// Change callback shared by every watch in a set
pub type ChangeHandler = Arc<dyn Fn(&Path) + Send + Sync>;

/// Group of open file watches
#[derive(Default)]
pub struct WatchSet {
    handles: Vec<Box<dyn WatchHandle>>,
}

impl WatchSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Watched paths, in opening order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.handles.iter().map(|h| h.path().to_path_buf()).collect()
    }

    /// Close every handle and empty the set; returns how many were closed
    pub fn close_all(&mut self) -> usize {
        let closed = self.handles.len();
        for mut handle in self.handles.drain(..) {
            handle.close();
        }
        closed
    }
}

impl Drop for WatchSet {
    fn drop(&mut self) {
        self.close_all();
    }
}

/// Counts from one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    pub opened: usize,
    pub closed: usize,
}

/// Owner of a session's single live watch set
#[derive(Default)]
pub struct WatchSetManager {
    current: Mutex<WatchSet>,
}

impl WatchSetManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, WatchSet> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the live set with watches over `files`
    ///
    /// Every watch invokes `on_change` with its own path; there is no per-file
    /// behavior beyond that. If the host fails to open a watch, the watches
    /// opened so far in this refresh are closed again, the live set is left
    /// empty, and the host error is returned.
    pub fn refresh(
        &self,
        host: &dyn ServerHost,
        files: &[PathBuf],
        on_change: ChangeHandler,
    ) -> HostResult<RefreshSummary> {
        let mut current = self.lock();
        let closed = current.close_all();

        let mut next = WatchSet::empty();
        for file in files {
            let handler = Arc::clone(&on_change);
            let path = file.clone();
            let callback: WatchCallback = Arc::new(move || handler(&path));
            next.handles.push(host.watch_file(file, callback)?);
        }

        let opened = next.len();
        *current = next;
        Ok(RefreshSummary { opened, closed })
    }

    /// Close the live set without replacing it
    pub fn clear(&self) -> usize {
        self.lock().close_all()
    }

    pub fn watched_paths(&self) -> Vec<PathBuf> {
        self.lock().paths()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
