//! Sequence frozen at construction.
//!
//! This module provides [`ImmutableSequence`], the crate's tuple type. The
//! elements live in a shared, reference-counted slice, so cloning is O(1)
//! and every clone observes the same contents forever.
//!
//! Equality, ordering and hashing are element-wise, which makes
//! `ImmutableSequence` usable as a map key and as a sort key.
//!
//! # Examples
//!
//! ```rust
//! use serpentine::collections::{ImmutableSequence, Sequence};
//!
//! let tuple: ImmutableSequence<i32> = [1, 2, 3].into_iter().collect();
//! assert_eq!(tuple.count(&2), 1);
//! assert_eq!(format!("{tuple}"), "(1, 2, 3)");
//!
//! // Thawing produces an independent mutable copy
//! let mut list: Sequence<i32> = tuple.thaw();
//! list.append(4);
//! assert_eq!(tuple.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{
    resolve_index, write_joined, Container, ContainerKind, ReferenceCounter, Sequence,
    SequenceProtocol,
};
use crate::error::{Error, Result};

/// An ordered sequence that cannot change after construction.
///
/// # Type Parameters
///
/// * `T` - The element type.
///
/// # Examples
///
/// ```rust
/// use serpentine::collections::ImmutableSequence;
///
/// let left = ImmutableSequence::from(vec![1, 2]);
/// let right = ImmutableSequence::from(vec![1, 3]);
/// assert!(left < right);
/// assert_eq!(format!("{}", ImmutableSequence::from(vec![7])), "(7,)");
/// ```
pub struct ImmutableSequence<T> {
    elements: ReferenceCounter<[T]>,
}

impl<T> ImmutableSequence<T> {
    /// Creates a new empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`; negative indices count
    /// from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = resolve_index("ImmutableSequence::get", index, self.elements.len())?;
        Ok(&self.elements[position])
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns `true` if both sequences share the same storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
    }
}

impl<T: Clone> ImmutableSequence<T> {
    /// Returns a mutable [`Sequence`] holding copies of the elements.
    #[inline]
    pub fn thaw(&self) -> Sequence<T> {
        Sequence::from(self)
    }

    /// Returns a new sequence with the elements of `self` followed by those
    /// of `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T: PartialEq> ImmutableSequence<T> {
    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.elements.iter().filter(|element| *element == value).count()
    }

    /// Returns `true` if an element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    pub fn index(&self, value: &T) -> Result<usize>
    where
        T: fmt::Debug,
    {
        self.elements
            .iter()
            .position(|element| element == value)
            .ok_or_else(|| Error::not_found("ImmutableSequence::index", format!("{value:?}")))
    }
}

// =============================================================================
// Protocol Implementations
// =============================================================================

impl<T> Container for ImmutableSequence<T> {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::ImmutableSequence
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}

const fn immutable(operation: &'static str) -> Error {
    Error::Immutable {
        kind: ContainerKind::ImmutableSequence,
        operation,
    }
}

impl<T> SequenceProtocol<T> for ImmutableSequence<T> {
    fn get_item(&self, index: isize) -> Result<&T> {
        self.get(index)
    }

    fn set_item(&mut self, _index: isize, _value: T) -> Result<()> {
        Err(immutable("set_item"))
    }

    fn append_item(&mut self, _value: T) -> Result<()> {
        Err(immutable("append_item"))
    }

    fn delete_item(&mut self, _index: isize) -> Result<T> {
        Err(immutable("delete_item"))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for ImmutableSequence<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for ImmutableSequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ImmutableSequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }
}

impl<T> From<Sequence<T>> for ImmutableSequence<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.freeze()
    }
}

impl<T> FromIterator<T> for ImmutableSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::from(elements)
    }
}

impl<T: Clone> IntoIterator for ImmutableSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.to_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ImmutableSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> AsRef<[T]> for ImmutableSequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: PartialEq> PartialEq for ImmutableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for ImmutableSequence<T> {}

impl<T: PartialOrd> PartialOrd for ImmutableSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.elements[..].partial_cmp(&other.elements[..])
    }
}

impl<T: Ord> Ord for ImmutableSequence<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.elements[..].cmp(&other.elements[..])
    }
}

impl<T: Hash> Hash for ImmutableSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements[..].hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("(")?;
        for (position, element) in self.elements.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            fmt::Debug::fmt(element, formatter)?;
        }
        if self.elements.len() == 1 {
            formatter.write_str(",")?;
        }
        formatter.write_str(")")
    }
}

impl<T: fmt::Display> fmt::Display for ImmutableSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        write_joined(formatter, self.elements.iter())?;
        if self.elements.len() == 1 {
            write!(formatter, ",")?;
        }
        write!(formatter, ")")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ImmutableSequence<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.elements.iter() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for ImmutableSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from(elements))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case(vec![], "()")]
    #[case(vec![1], "(1,)")]
    #[case(vec![1, 2, 3], "(1, 2, 3)")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        assert_eq!(format!("{}", ImmutableSequence::from(elements)), expected);
    }

    #[rstest]
    #[case(vec![], "()")]
    #[case(vec!["a"], "(\"a\",)")]
    #[case(vec!["a", "b"], "(\"a\", \"b\")")]
    fn test_debug(#[case] elements: Vec<&str>, #[case] expected: &str) {
        assert_eq!(format!("{:?}", ImmutableSequence::from(elements)), expected);
    }

    #[rstest]
    fn test_clone_shares_storage() {
        let tuple = ImmutableSequence::from(vec![1, 2, 3]);
        let clone = tuple.clone();
        assert!(tuple.ptr_eq(&clone));
        assert_eq!(tuple, clone);
    }

    #[rstest]
    fn test_get_negative_index() {
        let tuple = ImmutableSequence::from(vec!['x', 'y']);
        assert_eq!(tuple.get(-1), Ok(&'y'));
        assert!(matches!(tuple.get(2), Err(Error::OutOfRange { .. })));
    }

    #[rstest]
    fn test_count_and_index() {
        let tuple = ImmutableSequence::from(vec![1, 2, 1, 1]);
        assert_eq!(tuple.count(&1), 3);
        assert_eq!(tuple.index(&2), Ok(1));
        assert!(matches!(tuple.index(&9), Err(Error::NotFound { .. })));
    }

    #[rstest]
    fn test_element_wise_ordering() {
        let short = ImmutableSequence::from(vec![1, 2]);
        let long = ImmutableSequence::from(vec![1, 2, 0]);
        let bigger = ImmutableSequence::from(vec![2]);
        assert!(short < long);
        assert!(long < bigger);
    }

    #[rstest]
    fn test_hash_usable_as_set_member() {
        let mut set = HashSet::new();
        set.insert(ImmutableSequence::from(vec![1, 2]));
        assert!(set.contains(&ImmutableSequence::from(vec![1, 2])));
        assert!(!set.contains(&ImmutableSequence::from(vec![2, 1])));
    }

    #[rstest]
    fn test_mutation_through_protocol_is_rejected() {
        let mut tuple = ImmutableSequence::from(vec![1, 2]);
        assert!(tuple.is_frozen());
        assert_eq!(
            tuple.set_item(0, 5),
            Err(Error::Immutable {
                kind: ContainerKind::ImmutableSequence,
                operation: "set_item",
            })
        );
        assert!(tuple.append_item(3).is_err());
        assert!(tuple.delete_item(0).is_err());
        assert_eq!(tuple.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_thaw_round_trip() {
        let sequence = Sequence::from(vec![4, 5, 6]);
        let frozen = ImmutableSequence::from(sequence.clone());
        assert_eq!(frozen.thaw(), sequence);
    }

    #[rstest]
    fn test_concat() {
        let left = ImmutableSequence::from(vec![1]);
        let right = ImmutableSequence::from(vec![2, 3]);
        assert_eq!(left.concat(&right).as_slice(), &[1, 2, 3]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_as_sequence() {
        let tuple = ImmutableSequence::from(vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&tuple).unwrap(), "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_round_trip() {
        let tuple: ImmutableSequence<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(tuple.as_slice(), &["a".to_string(), "b".to_string()]);
    }
}
