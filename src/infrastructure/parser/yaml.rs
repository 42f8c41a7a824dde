//! YAML locale parser
//!
//! A locale file is a YAML mapping whose leaves are messages:
//!
//! ```yaml
//! greeting: Hello {name}
//! menu:
//!   open: Open
//! ```
//!
//! Scalars are stringified, `null` becomes an empty message, and sequences are
//! rejected because they have no key to type.

use serde_yaml_ng::Value;

use crate::domain::entities::{LocaleNode, LocaleTree};
use crate::domain::ports::LocaleParser;

/// Parses `*.yaml` locale files
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlLocaleParser;

impl YamlLocaleParser {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleParser for YamlLocaleParser {
    fn parse(&self, text: &str) -> Result<LocaleTree, String> {
        let value: Value = serde_yaml_ng::from_str(text).map_err(|e| e.to_string())?;
        match value {
            Value::Null => Ok(LocaleTree::new()),
            Value::Mapping(_) | Value::Tagged(_) => match convert(value, "")? {
                LocaleNode::Group(tree) => Ok(tree),
                LocaleNode::Text(_) => Err("top level must be a mapping".to_string()),
            },
            _ => Err("top level must be a mapping".to_string()),
        }
    }
}

fn convert(value: Value, path: &str) -> Result<LocaleNode, String> {
    match value {
        Value::Null => Ok(LocaleNode::Text(String::new())),
        Value::Bool(b) => Ok(LocaleNode::Text(b.to_string())),
        Value::Number(n) => Ok(LocaleNode::Text(n.to_string())),
        Value::String(s) => Ok(LocaleNode::Text(s)),
        Value::Sequence(_) => Err(format!("'{path}': lists are not supported")),
        Value::Tagged(tagged) => convert(tagged.value, path),
        Value::Mapping(mapping) => {
            let mut tree = LocaleTree::new();
            for (key, value) in mapping {
                let key = scalar_key(&key).ok_or_else(|| format!("'{path}': keys must be scalars"))?;
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                let node = convert(value, &child_path)?;
                tree.insert(key, node);
            }
            Ok(LocaleNode::Group(tree))
        }
    }
}

fn scalar_key(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
