//! Content Hash Value Object
//!
//! Fingerprint of a generated artifact. Two regeneration runs over an unchanged
//! locale directory must yield the same hash.

use std::fmt;

/// SHA-256 content hash with the `sha256:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a ContentHash by computing SHA-256 of content
    pub fn from_content(content: &str) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Short form used in log lines
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(12)]
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
