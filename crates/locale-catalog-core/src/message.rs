//! Nested translation trees.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

/// Separator between the segments of a message key, as in `common.hello`.
pub const KEY_SEPARATOR: char = '.';

/// A translation value: either a message string or a nested group of messages.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
    Text(String),
    Tree(MessageTree),
}

impl MessageNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessageNode::Text(text) => Some(text),
            MessageNode::Tree(_) => None,
        }
    }

    pub fn as_tree(&self) -> Option<&MessageTree> {
        match self {
            MessageNode::Text(_) => None,
            MessageNode::Tree(tree) => Some(tree),
        }
    }
}

impl From<&str> for MessageNode {
    fn from(text: &str) -> Self {
        MessageNode::Text(text.to_string())
    }
}

impl From<String> for MessageNode {
    fn from(text: String) -> Self {
        MessageNode::Text(text)
    }
}

impl From<MessageTree> for MessageNode {
    fn from(tree: MessageTree) -> Self {
        MessageNode::Tree(tree)
    }
}

/// An ordered mapping from key segment to [`MessageNode`].
///
/// Entries keep the order in which they were authored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageTree(IndexMap<String, MessageNode>);

impl MessageTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, segment: &str) -> Option<&MessageNode> {
        self.0.get(segment)
    }

    pub fn insert(&mut self, segment: impl Into<String>, node: impl Into<MessageNode>) {
        self.0.insert(segment.into(), node.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageNode)> {
        self.0.iter()
    }

    /// Resolves a dotted key (`common.hello`) to its message string.
    ///
    /// Returns `None` when any segment is missing or the key names a group.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split(KEY_SEPARATOR);
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            node = node.as_tree()?.get(segment)?;
        }
        node.as_text()
    }

    /// Key-wise union: keys of `other` replace existing keys, other keys remain.
    pub fn merge(&mut self, other: MessageTree) {
        for (segment, node) in other.0 {
            self.0.insert(segment, node);
        }
    }

    /// Merges `tree` into the group stored under `namespace`.
    ///
    /// A missing namespace is created; a message string stored under the
    /// namespace key is replaced by the group.
    pub fn merge_namespace(&mut self, namespace: &str, tree: MessageTree) {
        match self.0.entry(namespace.to_string()) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                MessageNode::Tree(existing) => existing.merge(tree),
                text @ MessageNode::Text(_) => *text = MessageNode::Tree(tree),
            },
            Entry::Vacant(vacant) => {
                vacant.insert(MessageNode::Tree(tree));
            },
        }
    }

    /// Returns the dotted keys of every message string, depth first.
    pub fn leaf_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_leaf_keys(None, &mut keys);
        keys
    }

    fn collect_leaf_keys(&self, prefix: Option<&str>, keys: &mut Vec<String>) {
        for (segment, node) in &self.0 {
            let key = match prefix {
                Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{segment}"),
                None => segment.clone(),
            };
            match node {
                MessageNode::Text(_) => keys.push(key),
                MessageNode::Tree(tree) => tree.collect_leaf_keys(Some(&key), keys),
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageTree
where
    K: Into<String>,
    V: Into<MessageNode>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
