//! Ordered map type for eML dicts.
//!
//! This module provides [`EmlMap`], a wrapper around [`IndexMap`] that
//! maps scalar keys to values while maintaining insertion order. Because
//! the map is index-based, dict entries come back from a decode in file
//! order and are written in insertion order, so iteration order survives
//! a round trip.
//!
//! Keys are [`Scalar`]s, not strings: an eML dict may mix `int`, `float`,
//! `str` and `datetime` keys in one map, each retaining its exact type.
//!
//! ## Examples
//!
//! ```rust
//! use eml::{EmlMap, Scalar, Value};
//!
//! let mut map = EmlMap::new();
//! map.insert(Scalar::from("name"), Value::from("alice"));
//! map.insert(Scalar::Int(2), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get_str("name").and_then(|v| v.as_str()), Some("alice"));
//! ```

use crate::{Scalar, Value};
use indexmap::IndexMap;

/// An insertion-ordered map of scalar keys to eML values.
///
/// # Examples
///
/// ```rust
/// use eml::{EmlMap, Scalar, Value};
///
/// let mut map = EmlMap::new();
/// map.insert(Scalar::from("first"), Value::from(1));
/// map.insert(Scalar::from("second"), Value::from(2));
///
/// let keys: Vec<_> = map.keys().map(|k| k.literal()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmlMap(IndexMap<Scalar, Value>);

impl EmlMap {
    /// Creates an empty `EmlMap`.
    #[must_use]
    pub fn new() -> Self {
        EmlMap(IndexMap::new())
    }

    /// Creates an empty `EmlMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EmlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned
    /// and the key keeps its original position.
    pub fn insert(&mut self, key: Scalar, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Scalar) -> Option<&Value> {
        self.0.get(key)
    }

    /// Looks up a string key without building a [`Scalar`] by hand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use eml::{EmlMap, Scalar, Value};
    ///
    /// let mut map = EmlMap::new();
    /// map.insert(Scalar::from("key"), Value::from(42));
    /// assert_eq!(map.get_str("key").and_then(|v| v.as_i64()), Some(42));
    /// ```
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        self.0.get(&Scalar::Str(key.to_string()))
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &Scalar) -> bool {
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

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Scalar, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Scalar, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Scalar, Value> {
        self.0.iter()
    }
}

impl IntoIterator for EmlMap {
    type Item = (Scalar, Value);
    type IntoIter = indexmap::map::IntoIter<Scalar, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmlMap {
    type Item = (&'a Scalar, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Scalar, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Scalar, Value)> for EmlMap {
    fn from_iter<T: IntoIterator<Item = (Scalar, Value)>>(iter: T) -> Self {
        EmlMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut map = EmlMap::new();
        map.insert(Scalar::from("b"), Value::from(2));
        map.insert(Scalar::from("a"), Value::from(1));
        map.insert(Scalar::Int(3), Value::from(3));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![Scalar::from("b"), Scalar::from("a"), Scalar::Int(3)]
        );
    }

    #[test]
    fn mixed_key_kinds_coexist() {
        let mut map = EmlMap::new();
        map.insert(Scalar::Int(1), Value::from("int key"));
        map.insert(Scalar::Float(1.0), Value::from("float key"));
        map.insert(Scalar::Str("1".to_string()), Value::from("str key"));
        assert_eq!(map.len(), 3);
        assert_eq!(
            map.get(&Scalar::Float(1.0)).and_then(|v| v.as_str()),
            Some("float key")
        );
    }

    #[test]
    fn equality_is_order_independent() {
        let a: EmlMap = [
            (Scalar::from("x"), Value::from(1)),
            (Scalar::from("y"), Value::from(2)),
        ]
        .into_iter()
        .collect();
        let b: EmlMap = [
            (Scalar::from("y"), Value::from(2)),
            (Scalar::from("x"), Value::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
    }
}
