//! Common test utilities for localetypes CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the CLI
//! - Fixtures: Reusable locale files and configs

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
