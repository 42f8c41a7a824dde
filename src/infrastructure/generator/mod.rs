//! Code generator implementations

mod typescript;

pub use typescript::TypeScriptGenerator;
