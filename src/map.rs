//! Ordered map type for HRON objects.
//!
//! [`HronMap`] is a thin wrapper around [`IndexMap`] that keeps object
//! fields in insertion order. Field order is load-bearing for HRON: the
//! schema emitter derives key lists from it, and the reconciler's field
//! cycling assigns names back in the same order, so a hash map would break
//! round trips.
//!
//! ## Examples
//!
//! ```rust
//! use hron::{HronMap, HronValue};
//!
//! let mut map = HronMap::new();
//! map.insert("name".to_string(), HronValue::from("Alice"));
//! map.insert("age".to_string(), HronValue::from(30));
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to HRON values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HronMap(IndexMap<String, crate::HronValue>);

impl HronMap {
    /// Creates an empty `HronMap`.
    #[must_use]
    pub fn new() -> Self {
        HronMap(IndexMap::new())
    }

    /// Creates an empty `HronMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        HronMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key
    /// if there was one.
    pub fn insert(&mut self, key: String, value: crate::HronValue) -> Option<crate::HronValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::HronValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::HronValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::HronValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::HronValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::HronValue>> for HronMap {
    fn from(map: HashMap<String, crate::HronValue>) -> Self {
        HronMap(map.into_iter().collect())
    }
}

impl From<HronMap> for HashMap<String, crate::HronValue> {
    fn from(map: HronMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for HronMap {
    type Item = (String, crate::HronValue);
    type IntoIter = indexmap::map::IntoIter<String, crate::HronValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HronMap {
    type Item = (&'a String, &'a crate::HronValue);
    type IntoIter = indexmap::map::Iter<'a, String, crate::HronValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::HronValue)> for HronMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::HronValue)>>(iter: T) -> Self {
        HronMap(IndexMap::from_iter(iter))
    }
}
