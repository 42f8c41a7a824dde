//! Application Layer
//!
//! Use cases that orchestrate the plugin flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PluginSession` - Per-project lifecycle: create, reconfigure, intercept
//! - `RegenerationPipeline` - List, parse, generate and write the artifact
//! - `WatchSetManager` - Atomic replacement of the locale file watches
//! - `ResolverHook` - The host's replaceable module resolution slot

pub mod interceptor;
pub mod regenerate;
pub mod session;
pub mod watch_set;

pub use interceptor::ResolverHook;
pub use regenerate::{RegenerationPipeline, RegenerationReport};
pub use session::{PluginCreateInfo, PluginSession, RegenerationStatus, SessionPhase};
pub use watch_set::{ChangeHandler, RefreshSummary, WatchSet, WatchSetManager};
