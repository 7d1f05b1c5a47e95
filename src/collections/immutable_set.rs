//! Frozen, insertion-ordered set.
//!
//! [`ImmutableSet`] is the crate's frozenset. Its members are fixed at
//! construction and iterated in first-insertion order. Set algebra returns new
//! sets; the receiver is never modified. Equality and hashing ignore order, so
//! a set can itself be a key of an [`OrderedMap`] or a member of another set.
//!
//! # Examples
//!
//! ```rust
//! use serpentine::collections::ImmutableSet;
//!
//! let left: ImmutableSet<i32> = [1, 2, 3].into_iter().collect();
//! let right: ImmutableSet<i32> = [3, 4].into_iter().collect();
//!
//! assert_eq!(format!("{}", left.union(&right)), "frozenset({1, 2, 3, 4})");
//! assert_eq!(format!("{}", left.intersection(&right)), "frozenset({3})");
//! assert!(left.difference(&right).is_disjoint(&right));
//! ```

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use super::{Container, ContainerKind, OrderedMap, OrderedMapKeys, ReferenceCounter, write_joined};

/// A set of unique values, frozen after construction.
///
/// Cloning shares the underlying storage.
pub struct ImmutableSet<T> {
    members: ReferenceCounter<OrderedMap<T, ()>>,
}

impl<T> ImmutableSet<T> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            members: ReferenceCounter::new(OrderedMap::new()),
        }
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns an iterator over the members in first-insertion order.
    #[inline]
    pub fn iter(&self) -> OrderedMapKeys<'_, T, ()> {
        self.members.keys()
    }
}

impl<T: Hash + Eq> ImmutableSet<T> {
    /// Returns `true` if `value` is a member.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains_key(value)
    }

    /// Returns `true` if every member of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|value| other.contains(value))
    }

    /// Returns `true` if every member of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if the sets share no member.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|value| !other.contains(value))
    }
}

impl<T: Hash + Eq + Clone> ImmutableSet<T> {
    /// Members of either set; members of `self` come first.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Members of both sets, in the order of `self`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|value| other.contains(value))
            .cloned()
            .collect()
    }

    /// Members of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|value| !other.contains(value))
            .cloned()
            .collect()
    }

    /// Members of exactly one of the sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let forward = self.iter().filter(|value| !other.contains(value));
        let backward = other.iter().filter(|value| !self.contains(value));
        forward.chain(backward).cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Container for ImmutableSet<T> {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::ImmutableSet
    }

    #[inline]
    fn len(&self) -> usize {
        self.members.len()
    }
}

impl<T> Clone for ImmutableSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<T> Default for ImmutableSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for ImmutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let members: OrderedMap<T, ()> = iter.into_iter().map(|value| (value, ())).collect();
        Self {
            members: ReferenceCounter::new(members),
        }
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedMapKeys<'a, T, ()>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for ImmutableSet<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.members, &other.members)
            || (self.len() == other.len() && self.is_subset(other))
    }
}

impl<T: Hash + Eq> Eq for ImmutableSet<T> {}

/// Combines per-member hashes with a commutative sum so that sets with the
/// same members hash identically whatever their insertion order.
impl<T: Hash> Hash for ImmutableSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = self
            .iter()
            .map(|value| {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            })
            .fold(0_u64, u64::wrapping_add);
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(formatter, "frozenset()");
        }
        write!(formatter, "frozenset({{")?;
        write_joined(formatter, self.iter())?;
        write!(formatter, "}})")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSet<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSet<T>
where
    T: serde::Deserialize<'de> + Hash + Eq + Clone,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let members: Vec<T> = Vec::deserialize(deserializer)?;
        Ok(members.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(values: &[i32]) -> ImmutableSet<i32> {
        values.iter().copied().collect()
    }

    fn hash_of(value: &ImmutableSet<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn test_duplicates_are_collapsed_in_first_insertion_order() {
        let members = set(&[3, 1, 3, 2, 1]);
        let order: Vec<i32> = members.iter().copied().collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[rstest]
    #[case(&[], "frozenset()")]
    #[case(&[1], "frozenset({1})")]
    #[case(&[1, 2], "frozenset({1, 2})")]
    fn test_display(#[case] values: &[i32], #[case] expected: &str) {
        assert_eq!(format!("{}", set(values)), expected);
    }

    #[rstest]
    fn test_set_algebra() {
        let left = set(&[1, 2, 3]);
        let right = set(&[2, 3, 4]);
        assert_eq!(left.union(&right), set(&[1, 2, 3, 4]));
        assert_eq!(left.intersection(&right), set(&[2, 3]));
        assert_eq!(left.difference(&right), set(&[1]));
        assert_eq!(left.symmetric_difference(&right), set(&[1, 4]));
    }

    #[rstest]
    fn test_algebra_does_not_touch_operands() {
        let left = set(&[1, 2]);
        let right = set(&[2, 3]);
        let _ = left.union(&right);
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
    }

    #[rstest]
    fn test_subset_relations() {
        let small = set(&[1, 2]);
        let large = set(&[1, 2, 3]);
        assert!(small.is_subset(&large));
        assert!(large.is_superset(&small));
        assert!(!large.is_subset(&small));
        assert!(small.is_disjoint(&set(&[7, 8])));
        assert!(!small.is_disjoint(&large));
    }

    #[rstest]
    fn test_equality_and_hash_ignore_order() {
        let forward = set(&[1, 2, 3]);
        let backward = set(&[3, 2, 1]);
        assert_eq!(forward, backward);
        assert_eq!(hash_of(&forward), hash_of(&backward));
    }

    #[rstest]
    fn test_set_of_sets() {
        let nested: ImmutableSet<ImmutableSet<i32>> =
            [set(&[1, 2]), set(&[2, 1]), set(&[3])].into_iter().collect();
        assert_eq!(nested.len(), 2);
    }

    #[rstest]
    fn test_container_kind_is_frozen() {
        let members = set(&[1]);
        assert_eq!(members.kind(), ContainerKind::ImmutableSet);
        assert!(members.is_frozen());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let members: ImmutableSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(serde_json::to_string(&members).unwrap(), "[2,1]");
    }

    #[rstest]
    fn test_deserialize_collapses_duplicates() {
        let members: ImmutableSet<i32> = serde_json::from_str("[1,1,2]").unwrap();
        assert_eq!(members.len(), 2);
    }
}
