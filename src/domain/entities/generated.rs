//! Generator output entity

/// What the code generator produced for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedOutput {
    /// Normal mode: a single source text
    Single(String),
    /// Lazy mode: the type-only artifact and its runtime loader companion
    Lazy { types: String, loader: String },
}

impl GeneratedOutput {
    /// The type-only artifact, which is what gets persisted
    pub fn primary(&self) -> &str {
        match self {
            GeneratedOutput::Single(source) => source,
            GeneratedOutput::Lazy { types, .. } => types,
        }
    }

    /// The runtime loader companion, if any
    pub fn loader(&self) -> Option<&str> {
        match self {
            GeneratedOutput::Single(_) => None,
            GeneratedOutput::Lazy { loader, .. } => Some(loader),
        }
    }

    pub fn into_primary(self) -> String {
        match self {
            GeneratedOutput::Single(source) => source,
            GeneratedOutput::Lazy { types, .. } => types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_of_lazy_is_types() {
        let output = GeneratedOutput::Lazy {
            types: "types".to_string(),
            loader: "loader".to_string(),
        };
        assert_eq!(output.primary(), "types");
        assert_eq!(output.loader(), Some("loader"));
        assert_eq!(output.into_primary(), "types");
    }

    #[test]
    fn single_has_no_loader() {
        let output = GeneratedOutput::Single("types".to_string());
        assert_eq!(output.primary(), "types");
        assert!(output.loader().is_none());
    }
}
