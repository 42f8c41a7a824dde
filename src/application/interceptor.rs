//! Resolution interception
//!
//! `ResolverHook` is the host's replaceable `resolveModuleNames` slot.
//! `InterceptingResolver` is what the session installs into it: it always asks
//! the original resolver first, then answers the tracked module name with the
//! generated artifact, regenerating it and re-watching the locales directory
//! as a side effect of being asked.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use crate::domain::entities::ResolvedModule;
use crate::domain::ports::{ModuleResolver, SessionEvent};
use crate::error::HostResult;

use super::session::SessionCore;

/// The host's module resolution slot
///
/// Resolution requests go through whatever resolver currently occupies the
/// slot. A host without a resolver answers every name with `None`.
pub struct ResolverHook {
    slot: RwLock<Option<Arc<dyn ModuleResolver>>>,
    wraps: AtomicUsize,
}

impl ResolverHook {
    pub fn new(resolver: Arc<dyn ModuleResolver>) -> Self {
        Self {
            slot: RwLock::new(Some(resolver)),
            wraps: AtomicUsize::new(0),
        }
    }

    /// A host that exposes no module resolver
    pub fn without_resolver() -> Self {
        Self {
            slot: RwLock::new(None),
            wraps: AtomicUsize::new(0),
        }
    }

    fn current(&self) -> Option<Arc<dyn ModuleResolver>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn has_resolver(&self) -> bool {
        self.current().is_some()
    }

    /// Replace the resolver with `wrap(original)`
    ///
    /// Returns false (and changes nothing) when there is no resolver to wrap.
    pub fn wrap_with<F>(&self, wrap: F) -> bool
    where
        F: FnOnce(Arc<dyn ModuleResolver>) -> Arc<dyn ModuleResolver>,
    {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        match slot.take() {
            Some(original) => {
                *slot = Some(wrap(original));
                self.wraps.fetch_add(1, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }

    /// How many times the slot has been wrapped
    pub fn wrap_count(&self) -> usize {
        self.wraps.load(Ordering::SeqCst)
    }
}

impl ModuleResolver for ResolverHook {
    fn resolve_module_names(
        &self,
        module_names: &[String],
        containing_file: &Path,
        reused_names: Option<&[String]>,
    ) -> HostResult<Vec<Option<ResolvedModule>>> {
        match self.current() {
            Some(resolver) => {
                resolver.resolve_module_names(module_names, containing_file, reused_names)
            }
            None => Ok(vec![None; module_names.len()]),
        }
    }
}

/// Resolver wrapper installed by a plugin session
///
/// Holds the session weakly: configuration changes are seen through live
/// reads, and a dropped session turns the wrapper into a pass-through.
pub(crate) struct InterceptingResolver {
    original: Arc<dyn ModuleResolver>,
    session: Weak<SessionCore>,
}

impl InterceptingResolver {
    pub(crate) fn new(original: Arc<dyn ModuleResolver>, session: Weak<SessionCore>) -> Self {
        Self { original, session }
    }
}

impl ModuleResolver for InterceptingResolver {
    fn resolve_module_names(
        &self,
        module_names: &[String],
        containing_file: &Path,
        reused_names: Option<&[String]>,
    ) -> HostResult<Vec<Option<ResolvedModule>>> {
        let mut resolved =
            self.original
                .resolve_module_names(module_names, containing_file, reused_names)?;
        resolved.resize(module_names.len(), None);

        let Some(session) = self.session.upgrade() else {
            return Ok(resolved);
        };

        for (index, name) in module_names.iter().enumerate() {
            // Re-read per name: a regeneration may coincide with reconfiguration
            let Some(ctx) = session.context() else { break };
            if !ctx.config.tracks(name) {
                continue;
            }

            ctx.logger.info(&format!("resolve module: {name}"));
            if !ctx.host.directory_exists(ctx.config.locales_dir()) {
                tracing::debug!(
                    module = name.as_str(),
                    dir = %ctx.config.locales_dir().display(),
                    "locales directory missing, keeping baseline resolution"
                );
                continue;
            }

            session.regenerate();
            session.refresh_watches(&ctx)?;

            resolved[index] = Some(ResolvedModule::local(ctx.config.output_path()));
            session.emit(SessionEvent::ModuleIntercepted {
                module_name: name.clone(),
                containing_file: containing_file.to_path_buf(),
            });
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixed_resolver(answer: Option<ResolvedModule>) -> Arc<dyn ModuleResolver> {
        Arc::new(
            move |names: &[String], _: &Path, _: Option<&[String]>| -> HostResult<Vec<Option<ResolvedModule>>> {
                Ok(vec![answer.clone(); names.len()])
            },
        )
    }

    #[test]
    fn hook_without_resolver_answers_none() {
        let hook = ResolverHook::without_resolver();
        let names = vec!["a".to_string(), "b".to_string()];
        let resolved = hook
            .resolve_module_names(&names, Path::new("/p/main.ts"), None)
            .unwrap();
        assert_eq!(resolved, vec![None, None]);
        assert!(!hook.has_resolver());
    }

    #[test]
    fn hook_without_resolver_cannot_be_wrapped() {
        let hook = ResolverHook::without_resolver();
        assert!(!hook.wrap_with(|original| original));
        assert_eq!(hook.wrap_count(), 0);
    }

    #[test]
    fn wrap_replaces_resolver() {
        let hook = ResolverHook::new(fixed_resolver(None));
        let wrapped = hook.wrap_with(|_original| {
            fixed_resolver(Some(ResolvedModule::local("/p/wrapped.ts")))
        });
        assert!(wrapped);
        assert_eq!(hook.wrap_count(), 1);

        let resolved = hook
            .resolve_module_names(&["x".to_string()], Path::new("/p/main.ts"), None)
            .unwrap();
        assert_eq!(
            resolved[0].as_ref().map(|m| m.path().to_path_buf()),
            Some(PathBuf::from("/p/wrapped.ts"))
        );
    }

    #[test]
    fn orphaned_interceptor_passes_through() {
        let baseline = Some(ResolvedModule::external("/p/node_modules/i18n/index.d.ts"));
        let interceptor = InterceptingResolver::new(fixed_resolver(baseline.clone()), Weak::new());
        let resolved = interceptor
            .resolve_module_names(&["i18n".to_string()], Path::new("/p/main.ts"), None)
            .unwrap();
        assert_eq!(resolved, vec![baseline]);
    }

    #[test]
    fn short_baseline_is_padded() {
        let short: Arc<dyn ModuleResolver> = Arc::new(
            |_: &[String], _: &Path, _: Option<&[String]>| -> HostResult<Vec<Option<ResolvedModule>>> {
                Ok(Vec::new())
            },
        );
        let interceptor = InterceptingResolver::new(short, Weak::new());
        let names = vec!["a".to_string(), "b".to_string()];
        let resolved = interceptor
            .resolve_module_names(&names, Path::new("/p/main.ts"), None)
            .unwrap();
        assert_eq!(resolved.len(), 2);
    }
}
