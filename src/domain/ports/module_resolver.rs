//! Module resolver port
//!
//! Mirrors the host's `resolveModuleNames`: one answer per requested name, in
//! the same order, `None` where the host could not resolve the name.

use std::path::Path;

use crate::domain::entities::ResolvedModule;
use crate::error::HostResult;

/// Resolves a batch of import specifiers from one containing file
pub trait ModuleResolver: Send + Sync {
    fn resolve_module_names(
        &self,
        module_names: &[String],
        containing_file: &Path,
        reused_names: Option<&[String]>,
    ) -> HostResult<Vec<Option<ResolvedModule>>>;
}

impl<F> ModuleResolver for F
where
    F: Fn(&[String], &Path, Option<&[String]>) -> HostResult<Vec<Option<ResolvedModule>>>
        + Send
        + Sync,
{
    fn resolve_module_names(
        &self,
        module_names: &[String],
        containing_file: &Path,
        reused_names: Option<&[String]>,
    ) -> HostResult<Vec<Option<ResolvedModule>>> {
        self(module_names, containing_file, reused_names)
    }
}
