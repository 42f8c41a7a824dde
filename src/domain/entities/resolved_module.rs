//! Resolution result entity

use std::path::{Path, PathBuf};

/// The answer to "where does this import specifier point?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub resolved_file_name: PathBuf,
    pub is_external_library_import: bool,
}

impl ResolvedModule {
    /// A resolution into the project's own sources
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            resolved_file_name: path.into(),
            is_external_library_import: false,
        }
    }

    /// A resolution into a dependency (e.g. `node_modules`)
    pub fn external(path: impl Into<PathBuf>) -> Self {
        Self {
            resolved_file_name: path.into(),
            is_external_library_import: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.resolved_file_name
    }
}
