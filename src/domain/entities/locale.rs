//! Locale entities
//!
//! A `LocaleEntry` pairs a locale's name with its parsed content tree.
//! Entries are recomputed from the directory on every regeneration; nothing
//! here is ever patched in place.

use std::collections::BTreeMap;

use crate::domain::value_objects::LocaleName;

/// One node of a locale tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    /// A translated message
    Text(String),
    /// A nested group of messages
    Group(LocaleTree),
}

impl LocaleNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LocaleNode::Text(text) => Some(text),
            LocaleNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&LocaleTree> {
        match self {
            LocaleNode::Text(_) => None,
            LocaleNode::Group(tree) => Some(tree),
        }
    }
}

/// Key/value tree parsed from one locale file
///
/// Keys are kept sorted so generated output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTree {
    nodes: BTreeMap<String, LocaleNode>,
}

impl LocaleTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, node: LocaleNode) {
        self.nodes.insert(key.into(), node);
    }

    /// Builder-style text insertion, mostly for tests
    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, LocaleNode::Text(text.into()));
        self
    }

    /// Builder-style group insertion, mostly for tests
    pub fn with_group(mut self, key: impl Into<String>, group: LocaleTree) -> Self {
        self.insert(key, LocaleNode::Group(group));
        self
    }

    pub fn get(&self, key: &str) -> Option<&LocaleNode> {
        self.nodes.get(key)
    }

    /// Look up a dotted key path such as `menu.file.open`
    pub fn lookup(&self, dotted: &str) -> Option<&LocaleNode> {
        let mut parts = dotted.split('.');
        let mut node = self.nodes.get(parts.next()?)?;
        for part in parts {
            node = node.as_group()?.get(part)?;
        }
        Some(node)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &LocaleNode)> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of text leaves in the whole tree
    pub fn message_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| match node {
                LocaleNode::Text(_) => 1,
                LocaleNode::Group(tree) => tree.message_count(),
            })
            .sum()
    }
}

/// Parsed content of one locale file, keyed by its derived name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleEntry {
    pub name: LocaleName,
    pub tree: LocaleTree,
}

impl LocaleEntry {
    pub fn new(name: LocaleName, tree: LocaleTree) -> Self {
        Self { name, tree }
    }
}
