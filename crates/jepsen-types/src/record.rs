use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::value::{Keyword, Value};

/// Field-name tokens of the record vocabulary
pub mod keys {
    pub const TYPE: &str = "type";
    /// Operation (function) name
    pub const F: &str = "f";
    pub const PROCESS: &str = "process";
    pub const TIME: &str = "time";
    pub const VALUE: &str = "value";
    pub const ERROR: &str = "error";
}

/// Loosely typed keyword map exchanged with the harness, one per event
///
/// A key that is missing and a key that maps to `Value::Nil` are different
/// records. Ordered so iteration and serialization are deterministic; equality
/// is by content only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordMap(BTreeMap<Keyword, Value>);

impl KeywordMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value for that key
    pub fn insert(&mut self, key: impl Into<Keyword>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Chaining form of [`KeywordMap::insert`]
    pub fn with(mut self, key: impl Into<Keyword>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Keyword, Value> {
        self.0.iter()
    }
}

impl<K: Into<Keyword>, V: Into<Value>> FromIterator<(K, V)> for KeywordMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for KeywordMap {
    type Item = (Keyword, Value);
    type IntoIter = btree_map::IntoIter<Keyword, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeywordMap {
    type Item = (&'a Keyword, &'a Value);
    type IntoIter = btree_map::Iter<'a, Keyword, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_differs_from_nil() {
        let without = KeywordMap::new().with(keys::TYPE, Value::keyword("info"));
        let with_nil = without.clone().with(keys::VALUE, Value::Nil);

        assert!(!without.contains_key(keys::VALUE));
        assert_eq!(with_nil.get(keys::VALUE), Some(&Value::Nil));
        assert_ne!(without, with_nil);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = KeywordMap::new()
            .with(keys::PROCESS, 1)
            .with(keys::TIME, 3029699376i64);
        let b = KeywordMap::new()
            .with(keys::TIME, 3029699376i64)
            .with(keys::PROCESS, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_keys_accept_colon_prefix() {
        let record = KeywordMap::new().with(":f", "read");
        assert_eq!(record.get(keys::F), Some(&Value::from("read")));
    }

    #[test]
    fn test_json_uses_bare_token_names() {
        let record: KeywordMap = [(keys::PROCESS, Value::from(1))].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"process":{"int":1}}"#);

        let back: KeywordMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_json_keys_accept_colon_prefix() {
        let record: KeywordMap =
            serde_json::from_str(r#"{":type":{"keyword":"info"},":time":{"int":3}}"#).unwrap();
        assert_eq!(record.get(keys::TYPE), Some(&Value::keyword("info")));
        assert_eq!(record.get(keys::TIME), Some(&Value::Int(3)));
    }
}
