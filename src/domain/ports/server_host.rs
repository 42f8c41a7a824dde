//! ServerHost port - the host capabilities the plugin consumes
//!
//! The language service host owns the file system and the file-watch
//! primitives. The plugin only ever talks to it through this trait, so several
//! sessions can share (or not share) a host without any global state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::HostResult;

/// Callback fired when a watched file changes
pub type WatchCallback = Arc<dyn Fn() + Send + Sync>;

/// An open file watch
///
/// `close` must stop all further callbacks. Closing twice is a no-op.
pub trait WatchHandle: Send {
    /// Path this handle watches
    fn path(&self) -> &Path;

    /// Stop watching
    fn close(&mut self);
}

/// Abstract host environment
///
/// Implementations:
/// - `LocalHost` - std file I/O and `notify` watches
/// - `MemoryHost` - in-memory files with manually triggered changes
pub trait ServerHost: Send + Sync {
    /// List recognized locale files (`*.yaml`) directly inside `dir`, sorted
    fn list_locale_files(&self, dir: &Path) -> HostResult<Vec<PathBuf>>;

    /// Check if a directory exists
    fn directory_exists(&self, path: &Path) -> bool;

    /// Read file content, `None` when absent or unreadable
    fn read_file(&self, path: &Path) -> Option<String>;

    /// Write file content, replacing whatever was there
    fn write_file(&self, path: &Path, content: &str) -> HostResult<()>;

    /// Watch a single file; `on_change` fires on every modification
    fn watch_file(&self, path: &Path, on_change: WatchCallback) -> HostResult<Box<dyn WatchHandle>>;
}
