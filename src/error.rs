//! Error types for localetypes
//!
//! Uses `thiserror` for library errors. Three families exist:
//! - `HostError` - a host capability failed (listing, watching); propagated
//! - `GenerationError` - locale data could not be turned into an artifact; contained
//! - `LocaleTypesError` - everything surfaced to CLI callers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for localetypes operations
pub type LocaleTypesResult<T> = Result<T, LocaleTypesError>;

/// Result type for host capability calls
pub type HostResult<T> = Result<T, HostError>;

/// Failure of a host capability (directory listing, file watching, writes)
#[derive(Error, Debug)]
pub enum HostError {
    /// Listing a directory failed
    #[error("cannot list directory {path}: {message}")]
    Listing { path: PathBuf, message: String },

    /// Opening a file watch failed
    #[error("cannot watch {path}: {message}")]
    Watch { path: PathBuf, message: String },

    /// Writing a file failed
    #[error("cannot write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// The underlying resolver failed
    #[error("module resolution failed: {0}")]
    Resolution(String),
}

/// Failure inside the regeneration pipeline
///
/// These never reach the host's call sites; the previous artifact stays in place.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The locale directory could not be listed while regenerating
    #[error("cannot list locale files: {0}")]
    Listing(#[source] HostError),

    /// A locale file vanished or could not be read
    #[error("cannot read locale file {path}")]
    Unreadable { path: PathBuf },

    /// A locale file is not a valid locale tree
    #[error("invalid locale file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The generator rejected the entries
    #[error("generation failed: {0}")]
    Generator(String),

    /// Writing the artifact failed
    #[error("cannot write output: {0}")]
    Write(#[source] HostError),
}

/// Main error type for CLI-facing operations
#[derive(Error, Debug)]
pub enum LocaleTypesError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host capability error
    #[error(transparent)]
    Host(#[from] HostError),

    /// Generation error
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Plugin options were rejected
    #[error("plugin options rejected: {0}")]
    Rejected(#[from] crate::domain::services::ConfigRejection),
}
