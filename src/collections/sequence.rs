//! Mutable, growable sequence.
//!
//! This module provides [`Sequence`], the crate's list type. It is a thin,
//! explicitly constructed wrapper around `Vec<T>` that adds the scripting
//! language's list contract: negative indexing, value-based `remove`/`index`,
//! clamped `insert`, and fallible `pop`.
//!
//! # Examples
//!
//! ```rust
//! use serpentine::collections::Sequence;
//!
//! let mut sequence = Sequence::new();
//! sequence.append(3);
//! sequence.append(1);
//! sequence.append(2);
//! sequence.sort();
//! assert_eq!(sequence.as_slice(), &[1, 2, 3]);
//!
//! assert_eq!(sequence.pop(), Ok(3));
//! assert_eq!(format!("{sequence}"), "[1, 2]");
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use super::{
    clamp_insertion_index, resolve_index, write_joined, Container, ContainerKind, ImmutableSequence,
    SequenceProtocol,
};
use crate::error::{Error, Result};

/// A mutable, growable, insertion-ordered sequence.
///
/// # Type Parameters
///
/// * `T` - The element type.
///
/// # Examples
///
/// ```rust
/// use serpentine::collections::Sequence;
///
/// let mut sequence: Sequence<&str> = ["a", "b"].into_iter().collect();
/// sequence.insert(0, "z");
/// assert_eq!(sequence.as_slice(), &["z", "a", "b"]);
/// assert_eq!(sequence.index(&"b"), Ok(2));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates a new empty sequence.
    #[inline]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a reference to the element at `index`; negative indices count
    /// from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = resolve_index("Sequence::get", index, self.elements.len())?;
        Ok(&self.elements[position])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let position = resolve_index("Sequence::get_mut", index, self.elements.len())?;
        Ok(&mut self.elements[position])
    }

    /// Replaces the element at `index`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let position = resolve_index("Sequence::set", index, self.elements.len())?;
        Ok(std::mem::replace(&mut self.elements[position], value))
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

    /// Appends an element to the end.
    #[inline]
    pub fn append(&mut self, value: T) {
        self.elements.push(value);
    }

    /// Inserts `value` before `index`.
    ///
    /// Out-of-range indices are clamped, so inserting at a huge index appends
    /// and inserting at a very negative index prepends.
    pub fn insert(&mut self, index: isize, value: T) {
        let position = clamp_insertion_index(index, self.elements.len());
        self.elements.insert(position, value);
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the sequence is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop().ok_or(Error::OutOfRange {
            function: "Sequence::pop",
            index: -1,
            length: 0,
        })
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        let position = resolve_index("Sequence::pop_at", index, self.elements.len())?;
        Ok(self.elements.remove(position))
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Reverses the sequence in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.elements.reverse();
    }

    /// Sorts in place by the key `key` extracts; the sort is stable.
    ///
    /// When `reverse` is `true` the order is descending, and elements with
    /// equal keys still keep their original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serpentine::collections::Sequence;
    ///
    /// let mut words = Sequence::from(vec!["bb", "a", "cc", "d"]);
    /// words.sort_by_key(|word| word.len(), true);
    /// assert_eq!(words.as_slice(), &["bb", "cc", "a", "d"]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.elements.sort_by(|left, right| {
            let ordering = key(left).cmp(&key(right));
            if reverse { ordering.reverse() } else { ordering }
        });
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the sequence and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Freezes the sequence into an [`ImmutableSequence`] with the same
    /// elements in the same order.
    #[inline]
    pub fn freeze(self) -> ImmutableSequence<T> {
        ImmutableSequence::from(self.elements)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a shallow, independently mutable copy.
    #[inline]
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<T: PartialEq> Sequence<T> {
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
        self.index_within(value, 0, self.elements.len())
    }

    /// Returns the position of the first element equal to `value` in
    /// `start..stop`. Bounds past the end are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element in the window matches.
    pub fn index_within(&self, value: &T, start: usize, stop: usize) -> Result<usize>
    where
        T: fmt::Debug,
    {
        let stop = stop.min(self.elements.len());
        let start = start.min(stop);
        self.elements[start..stop]
            .iter()
            .position(|element| element == value)
            .map(|offset| start + offset)
            .ok_or_else(|| Error::not_found("Sequence::index", format!("{value:?}")))
    }

    /// Removes the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element matches.
    pub fn remove(&mut self, value: &T) -> Result<()>
    where
        T: fmt::Debug,
    {
        let position = self
            .elements
            .iter()
            .position(|element| element == value)
            .ok_or_else(|| Error::not_found("Sequence::remove", format!("{value:?}")))?;
        self.elements.remove(position);
        Ok(())
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts the sequence in ascending order; the sort is stable.
    #[inline]
    pub fn sort(&mut self) {
        self.elements.sort();
    }

    /// Sorts the sequence in descending order; equal elements keep their
    /// relative order.
    #[inline]
    pub fn sort_descending(&mut self) {
        self.elements.sort_by(|left, right| right.cmp(left));
    }
}

// =============================================================================
// Protocol Implementations
// =============================================================================

impl<T> Container for Sequence<T> {
    #[inline]
    fn kind(&self) -> ContainerKind {
        ContainerKind::Sequence
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> SequenceProtocol<T> for Sequence<T> {
    fn get_item(&self, index: isize) -> Result<&T> {
        self.get(index)
    }

    fn set_item(&mut self, index: isize, value: T) -> Result<()> {
        self.set(index, value).map(drop)
    }

    fn append_item(&mut self, value: T) -> Result<()> {
        self.append(value);
        Ok(())
    }

    fn delete_item(&mut self, index: isize) -> Result<T> {
        self.pop_at(index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    #[inline]
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T: Clone> From<&ImmutableSequence<T>> for Sequence<T> {
    #[inline]
    fn from(sequence: &ImmutableSequence<T>) -> Self {
        Self {
            elements: sequence.as_slice().to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        write_joined(formatter, &self.elements)?;
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
