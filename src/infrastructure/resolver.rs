//! Baseline module resolver
//!
//! Node/TypeScript-style resolution backed by `oxc_resolver`. This is what the
//! CLI hands to the plugin as "the host's own resolver"; the plugin wraps it.

use std::path::Path;

use oxc_resolver::{ResolveOptions, Resolver};

use crate::domain::entities::ResolvedModule;
use crate::domain::ports::ModuleResolver;
use crate::error::HostResult;

/// Resolver for TypeScript projects
pub struct NodeModuleResolver {
    resolver: Resolver,
}

impl NodeModuleResolver {
    /// Build a resolver probing TypeScript extensions first
    pub fn new() -> Self {
        let resolver = Resolver::new(ResolveOptions {
            extensions: vec![
                ".ts".into(),
                ".tsx".into(),
                ".d.ts".into(),
                ".mts".into(),
                ".js".into(),
                ".jsx".into(),
                ".mjs".into(),
                ".json".into(),
            ],
            extension_alias: vec![(
                ".js".into(),
                vec![".ts".into(), ".tsx".into(), ".js".into()],
            )],
            condition_names: vec!["types".into(), "import".into(), "node".into()],
            ..ResolveOptions::default()
        });
        Self { resolver }
    }

    fn resolve_one(&self, dir: &Path, specifier: &str) -> Option<ResolvedModule> {
        match self.resolver.resolve(dir, specifier) {
            Ok(resolution) => {
                let path = resolution.into_path_buf();
                let external = path
                    .components()
                    .any(|c| c.as_os_str() == "node_modules");
                Some(ResolvedModule {
                    resolved_file_name: path,
                    is_external_library_import: external,
                })
            }
            Err(e) => {
                tracing::debug!(specifier, error = %e, "unresolved import");
                None
            }
        }
    }
}

impl Default for NodeModuleResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleResolver for NodeModuleResolver {
    fn resolve_module_names(
        &self,
        module_names: &[String],
        containing_file: &Path,
        _reused_names: Option<&[String]>,
    ) -> HostResult<Vec<Option<ResolvedModule>>> {
        let dir = match containing_file.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        Ok(module_names
            .iter()
            .map(|name| self.resolve_one(dir, name))
            .collect())
    }
}
