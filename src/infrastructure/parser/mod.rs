//! Locale parser implementations

mod yaml;

pub use yaml::YamlLocaleParser;
