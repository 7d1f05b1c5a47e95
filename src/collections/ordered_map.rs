//! Insertion-ordered key/value map.
//!
//! This module provides [`OrderedMap`], the crate's dict type.
//!
//! # Overview
//!
//! Entries are stored densely in insertion order, and a hash index maps each
//! key to its position. Iteration, [`keys`](OrderedMap::keys),
//! [`values`](OrderedMap::values) and [`items`](OrderedMap::items) always
//! follow insertion order. Overwriting an existing key keeps its original
//! position; removing a key shifts the later entries down.
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `get`       | O(1)       |
//! | `insert`    | O(1)*      |
//! | `pop`       | O(n)       |
//! | `pop_item`  | O(1)       |
//! | iteration   | O(n)       |
//!
//! The index hasher is SipHash by default, `FxHash` with the `fxhash` feature
//! and `aHash` with the `ahash` feature.
//!
//! # Examples
//!
//! ```rust
//! use serpentine::collections::OrderedMap;
//!
//! let mut map: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
//! assert_eq!(format!("{map}"), "{a: 1, b: 2}");
//!
//! map.insert("a", 10);
//! assert_eq!(map.get("a"), Some(&10));
//! assert_eq!(map.pop_item(), Ok(("b", 2)));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::{Container, ContainerKind};
use crate::error::{Error, Result};

#[cfg(feature = "fxhash")]
type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type IndexHasher = std::collections::hash_map::RandomState;

/// A map that remembers the order in which keys were first inserted.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Hash`, `Eq` and `Clone`.
/// * `V` - The value type.
///
/// # Examples
///
/// ```rust
/// use serpentine::collections::OrderedMap;
///
/// let mut map = OrderedMap::from_keys(["x", "y"], 0);
/// *map.set_default("z", 5) += 1;
/// let items: Vec<(&&str, &i32)> = map.items().collect();
/// assert_eq!(items, vec![(&"x", &0), (&"y", &0), (&"z", &6)]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize, IndexHasher>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::with_hasher(IndexHasher::default()),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> OrderedMapIterator<'_, K, V> {
        OrderedMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Alias of [`iter`](Self::iter), named after the dict view.
    #[inline]
    pub fn items(&self) -> OrderedMapIterator<'_, K, V> {
        self.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> OrderedMapKeys<'_, K, V> {
        OrderedMapKeys {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the values in insertion order.
    #[inline]
    pub fn values(&self) -> OrderedMapValues<'_, K, V> {
        OrderedMapValues {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over mutable references to the values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    /// Returns the first inserted entry, if any.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(key, value)| (key, value))
    }

    /// Returns the most recently inserted entry, if any.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(key, value)| (key, value))
    }
}

impl<K: Hash + Eq, V> OrderedMap<K, V> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key).map(|position| &self.entries[position].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position(key).map(|position| &mut self.entries[position].1)
    }

    /// Returns the value stored under `key`, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` is not in the map.
    pub fn get_item<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.get(key)
            .ok_or_else(|| Error::not_found("OrderedMap::get_item", format!("key {key:?}")))
    }

    /// Returns the value stored under `key`, or `default` when it is absent.
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if the map contains `key`.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key` and returns its value; later entries shift down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` is not in the map.
    pub fn pop<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        let position = self
            .index
            .remove(key)
            .ok_or_else(|| Error::not_found("OrderedMap::pop", format!("key {key:?}")))?;
        let (_, value) = self.entries.remove(position);
        for (offset, (shifted, _)) in self.entries[position..].iter().enumerate() {
            if let Some(slot) = self.index.get_mut::<K>(shifted) {
                *slot = position + offset;
            }
        }
        Ok(value)
    }

    /// Removes and returns the most recently inserted entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the map is empty.
    pub fn pop_item(&mut self) -> Result<(K, V)> {
        let (key, value) = self
            .entries
            .pop()
            .ok_or_else(|| Error::not_found("OrderedMap::pop_item", "entry in empty map"))?;
        self.index.remove(&key);
        Ok((key, value))
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    /// Inserts `value` under `key`, returning the previous value.
    ///
    /// A key that is already present keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value under `key`, inserting `default` first if absent.
    pub fn set_default(&mut self, key: K, default: V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push((key, default));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Inserts every pair from `other`, overwriting values of existing keys.
    pub fn update<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    /// Creates a map with every key from `keys` bound to a copy of `value`.
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
    {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }
}

impl<K: Clone, V: Clone> OrderedMap<K, V> {
    /// Returns a shallow, independently mutable copy.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the entries of an [`OrderedMap`].
pub struct OrderedMapIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapIterator<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIterator<'_, K, V> {}
impl<K, V> FusedIterator for OrderedMapIterator<'_, K, V> {}

/// Iterator over the keys of an [`OrderedMap`].
pub struct OrderedMapKeys<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedMapKeys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapKeys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for OrderedMapKeys<'_, K, V> {}
impl<K, V> FusedIterator for OrderedMapKeys<'_, K, V> {}

/// Iterator over the values of an [`OrderedMap`].
pub struct OrderedMapValues<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for OrderedMapValues<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for OrderedMapValues<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for OrderedMapValues<'_, K, V> {}
impl<K, V> FusedIterator for OrderedMapValues<'_, K, V> {}

/// Owning iterator over the entries of an [`OrderedMap`].
pub struct OrderedMapIntoIterator<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for OrderedMapIntoIterator<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for OrderedMapIntoIterator<K, V> {}
impl<K, V> FusedIterator for OrderedMapIntoIterator<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Container for OrderedMap<K, V> {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::OrderedMap
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.update(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = OrderedMapIntoIterator<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = OrderedMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equality ignores insertion order, matching dict semantics.
impl<K: Hash + Eq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for OrderedMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedMapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut map = OrderedMap::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for OrderedMap<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq + Clone,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_preserves_order() {
        let map: OrderedMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":2,"a":1}"#);
    }

    #[rstest]
    fn test_deserialize_preserves_order() {
        let map: OrderedMap<String, i32> = serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
