//! Locale parser port
//!
//! Turns the raw text of one locale file into a `LocaleTree`. Pure.

use crate::domain::entities::LocaleTree;

/// Parser for locale file contents
pub trait LocaleParser: Send + Sync {
    /// Parse `text`; the error is a human-readable reason
    fn parse(&self, text: &str) -> Result<LocaleTree, String>;
}
