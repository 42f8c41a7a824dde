//! Domain Layer
//!
//! Core types and rules of the plugin, without I/O of its own.
//!
//! ## Structure
//!
//! - `entities/` - Locale trees, generator output, resolution answers
//! - `value_objects/` - Immutable value types (PluginConfig, Target, ContentHash)
//! - `services/` - Option validation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Ports & Adapters** - The host, parser and generator are all traits

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
