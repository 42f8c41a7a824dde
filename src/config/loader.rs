//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LocaleTypesError, LocaleTypesResult};

use super::types::ProjectConfig;

/// File name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "localetypes.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LocaleTypesResult<(ProjectConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config text; `path` is only used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> LocaleTypesResult<(ProjectConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: ProjectConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LocaleTypesError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the nearest `localetypes.toml` in `start` or its ancestors
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "plugin",
        "module_name",
        "locales",
        "output",
        "lazy",
        "default_locale",
        "logging",
        "default",
        "modules",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_keys() {
        assert_eq!(suggest_key("modul_name").as_deref(), Some("module_name"));
        assert_eq!(suggest_key("ouptut").as_deref(), Some("output"));
        assert_eq!(suggest_key("completely_unrelated"), None);
    }

    #[test]
    fn distance_basics() {
        assert_eq!(levenshtein("lazy", "lazy"), 0);
        assert_eq!(levenshtein("lazy", "laze"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }
}
