//! Tolerant, read-only views over a configuration tree.
//!
//! A [`ConfigNode`] borrows a mapping and never fails on lookup: absent keys
//! give `None` from [`ConfigNode::get`] and an empty (falsy) node from
//! [`ConfigNode::at`], so chains like
//! `cfg.at("audio").at("engines").at("edge_tts").get_f64("speed")` degrade to
//! `None` instead of erroring.
//!
//! Keys are matched with hyphen/underscore normalization: a stored
//! `edge-tts` answers to both `edge-tts` and `edge_tts`.

use crate::error::{ConfigError, Result};
use factory_yaml::{Mapping, Node, Scalar};
use once_cell::sync::Lazy;

static EMPTY: Lazy<Mapping> = Lazy::new(Mapping::new);

/// A read-only view of one mapping in the configuration tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigNode<'a> {
    map: &'a Mapping,
}

/// A list value. Mapping elements come back as [`ConfigNode`]s, scalars as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigList<'a> {
    items: &'a [Node],
}

/// A value found in a [`ConfigNode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigValue<'a> {
    Scalar(&'a Scalar),
    List(ConfigList<'a>),
    Node(ConfigNode<'a>),
}

fn normalize(key: &str) -> String {
    key.replace('-', "_")
}

impl<'a> ConfigNode<'a> {
    pub fn new(map: &'a Mapping) -> Self {
        ConfigNode { map }
    }

    /// A node with no keys. Falsy.
    pub fn empty() -> ConfigNode<'static> {
        ConfigNode { map: &EMPTY }
    }

    /// View `node` as a config node; anything but a mapping gives an empty node.
    pub fn from_node(node: &'a Node) -> Self {
        match node {
            Node::Mapping(map) => ConfigNode::new(map),
            _ => ConfigNode { map: &EMPTY },
        }
    }

    /// Find the stored key that `key` refers to.
    ///
    /// Tried in order: exact match, `_` → `-`, `-` → `_`, then a scan
    /// comparing both sides with hyphens mapped to underscores.
    pub fn resolve_key(&self, key: &str) -> Option<&'a str> {
        self.resolve(key).map(|(k, _)| k)
    }

    fn resolve(&self, key: &str) -> Option<(&'a str, &'a Node)> {
        let map: &'a Mapping = self.map;
        if let Some((k, v)) = map.get_key_value(key) {
            return Some((k.as_str(), v));
        }
        if key.contains('_') {
            if let Some((k, v)) = map.get_key_value(key.replace('_', "-").as_str()) {
                return Some((k.as_str(), v));
            }
        }
        if key.contains('-') {
            if let Some((k, v)) = map.get_key_value(key.replace('-', "_").as_str()) {
                return Some((k.as_str(), v));
            }
        }
        let wanted = normalize(key);
        map.iter()
            .find(|(k, _)| normalize(k) == wanted)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a key. `None` when absent; use `unwrap_or` for a default.
    pub fn get(&self, key: &str) -> Option<ConfigValue<'a>> {
        self.resolve(key).map(|(_, node)| ConfigValue::wrap(node))
    }

    /// Strict lookup: an absent key is an error.
    pub fn require(&self, key: &str) -> Result<ConfigValue<'a>> {
        self.get(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.to_string(),
        })
    }

    /// Step into a child mapping. Absent keys and non-mapping values give an empty node.
    pub fn at(&self, key: &str) -> ConfigNode<'a> {
        match self.resolve(key) {
            Some((_, node)) => ConfigNode::from_node(node),
            None => ConfigNode { map: &EMPTY },
        }
    }

    /// Step through several child mappings at once.
    pub fn at_path(&self, path: &[&str]) -> ConfigNode<'a> {
        path.iter().fold(*self, |node, key| node.at(key))
    }

    /// Look up a value below this node, e.g. `["engines", "edge-tts", "speed"]`.
    ///
    /// An empty path yields this node itself.
    pub fn get_path(&self, path: &[&str]) -> Option<ConfigValue<'a>> {
        match path.split_last() {
            Some((last, parents)) => self.at_path(parents).get(last),
            None => Some(ConfigValue::Node(*self)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(|v| v.as_str())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_i64())
    }

    /// Floats, with integers widened.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_f64())
    }

    pub fn get_list(&self, key: &str) -> Option<ConfigList<'a>> {
        self.get(key).and_then(|v| v.as_list())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// A node is truthy when it has at least one key.
    pub fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    /// Stored keys, in document order.
    pub fn keys(self) -> impl Iterator<Item = &'a str> {
        self.map.keys().map(String::as_str)
    }

    pub fn values(self) -> impl Iterator<Item = ConfigValue<'a>> {
        self.map.values().map(ConfigValue::wrap)
    }

    pub fn iter(self) -> impl Iterator<Item = (&'a str, ConfigValue<'a>)> {
        self.map.iter().map(|(k, v)| (k.as_str(), ConfigValue::wrap(v)))
    }

    /// The underlying mapping.
    pub fn as_mapping(&self) -> &'a Mapping {
        self.map
    }

    /// Copy the viewed mapping out as a plain tree.
    pub fn to_map(&self) -> Mapping {
        self.map.clone()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.map
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect(),
        )
    }
}

impl Default for ConfigNode<'_> {
    fn default() -> Self {
        ConfigNode { map: &EMPTY }
    }
}

impl<'a> ConfigList<'a> {
    pub fn new(items: &'a [Node]) -> Self {
        ConfigList { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ConfigValue<'a>> {
        self.items.get(index).map(ConfigValue::wrap)
    }

    pub fn iter(self) -> impl Iterator<Item = ConfigValue<'a>> {
        self.items.iter().map(ConfigValue::wrap)
    }

    /// String elements only; other elements are skipped.
    pub fn strings(&self) -> Vec<&'a str> {
        self.items
            .iter()
            .filter_map(|n| n.as_scalar().and_then(Scalar::as_str))
            .collect()
    }

    pub fn as_slice(&self) -> &'a [Node] {
        self.items
    }

    pub fn to_vec(&self) -> Vec<Node> {
        self.items.to_vec()
    }
}

impl<'a> ConfigValue<'a> {
    /// Wrap a tree node: mappings become [`ConfigNode`]s, sequences [`ConfigList`]s.
    pub fn wrap(node: &'a Node) -> Self {
        match node {
            Node::Mapping(map) => ConfigValue::Node(ConfigNode::new(map)),
            Node::Sequence(items) => ConfigValue::List(ConfigList::new(items)),
            Node::Scalar(scalar) => ConfigValue::Scalar(scalar),
        }
    }

    pub fn as_node(&self) -> Option<ConfigNode<'a>> {
        match self {
            ConfigValue::Node(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<ConfigList<'a>> {
        match self {
            ConfigValue::List(list) => Some(*list),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&'a Scalar> {
        match self {
            ConfigValue::Scalar(scalar) => Some(*scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Scalar(Scalar::Null))
    }

    /// Unwrap back into a plain tree node.
    pub fn to_node(&self) -> Node {
        match self {
            ConfigValue::Scalar(scalar) => Node::Scalar((*scalar).clone()),
            ConfigValue::List(list) => Node::Sequence(list.to_vec()),
            ConfigValue::Node(node) => Node::Mapping(node.to_map()),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        self.to_node().to_json()
    }
}
