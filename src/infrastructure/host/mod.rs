//! Host Implementations
//!
//! Concrete implementations of the ServerHost port.

mod local;
mod memory;

pub use local::LocalHost;
pub use memory::MemoryHost;
