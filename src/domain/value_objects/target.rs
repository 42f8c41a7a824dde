//! Generation target
//!
//! - `Type` - type declarations only (what the plugin writes)
//! - `Runtime` - a module carrying the translations themselves

use serde::{Deserialize, Serialize};

/// What kind of source the generator should emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Type declarations (`.d.ts`)
    #[default]
    Type,
    /// Runtime module with translation values
    Runtime,
}

impl Target {
    /// Conventional file extension for this target
    pub fn extension(&self) -> &'static str {
        match self {
            Target::Type => "d.ts",
            Target::Runtime => "ts",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Type => write!(f, "type"),
            Target::Runtime => write!(f, "runtime"),
        }
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "type" | "types" => Ok(Target::Type),
            "runtime" => Ok(Target::Runtime),
            other => Err(format!("unknown target '{other}' (expected 'type' or 'runtime')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_default_is_type() {
        assert_eq!(Target::default(), Target::Type);
    }

    #[test]
    fn target_from_str() {
        assert_eq!("type".parse::<Target>().unwrap(), Target::Type);
        assert_eq!("Runtime".parse::<Target>().unwrap(), Target::Runtime);
        assert!("binary".parse::<Target>().is_err());
    }

    #[test]
    fn target_serde_lowercase() {
        let target: Target = serde_json::from_str("\"runtime\"").unwrap();
        assert_eq!(target, Target::Runtime);
        assert_eq!(serde_json::to_string(&Target::Type).unwrap(), "\"type\"");
    }
}
