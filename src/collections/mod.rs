//! Ordered and immutable container adapters.
//!
//! This module provides the container types of the scripting language's
//! built-ins as dedicated Rust types. Nothing is bolted onto `Vec` or
//! `HashMap`; every container is constructed explicitly:
//!
//! - [`Sequence`]: Mutable, growable, indexable sequence (list)
//! - [`ImmutableSequence`]: Sequence frozen at construction (tuple)
//! - [`OrderedMap`]: Insertion-ordered key/value map (dict)
//! - [`ImmutableSet`]: Insertion-ordered set frozen at construction (frozenset)
//!
//! Two traits let generic code treat containers uniformly:
//!
//! - [`Container`]: Reports the [`ContainerKind`] tag and the length
//! - [`SequenceProtocol`]: Index-based access and fallible mutation, where
//!   frozen containers answer mutation with [`Error::Immutable`](crate::Error::Immutable)
//!
//! # Examples
//!
//! ## `Sequence` and `ImmutableSequence`
//!
//! ```rust
//! use serpentine::collections::{ImmutableSequence, Sequence};
//!
//! let mut sequence: Sequence<i32> = (1..=3).collect();
//! sequence.append(4);
//! assert_eq!(sequence.get(-1), Ok(&4));
//!
//! let frozen: ImmutableSequence<i32> = sequence.freeze();
//! assert_eq!(format!("{frozen}"), "(1, 2, 3, 4)");
//! ```
//!
//! ## `OrderedMap`
//!
//! ```rust
//! use serpentine::collections::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//! let keys: Vec<&&str> = map.keys().collect();
//! assert_eq!(keys, vec![&"b", &"a"]);
//! ```
//!
//! ## Generic mutation through `SequenceProtocol`
//!
//! ```rust
//! use serpentine::collections::{ImmutableSequence, Sequence, SequenceProtocol};
//! use serpentine::Error;
//!
//! fn bump_first<S: SequenceProtocol<i32>>(sequence: &mut S) -> serpentine::Result<()> {
//!     let first = *sequence.get_item(0)?;
//!     sequence.set_item(0, first + 1)
//! }
//!
//! let mut list = Sequence::from(vec![1, 2]);
//! assert!(bump_first(&mut list).is_ok());
//!
//! let mut tuple = ImmutableSequence::from(vec![1, 2]);
//! assert!(matches!(bump_first(&mut tuple), Err(Error::Immutable { .. })));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type used by the frozen containers.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod immutable_sequence;
mod immutable_set;
mod ordered_map;
mod sequence;

pub use crate::error::ContainerKind;
pub use immutable_sequence::ImmutableSequence;
pub use immutable_set::ImmutableSet;
pub use ordered_map::OrderedMap;
pub use ordered_map::OrderedMapIntoIterator;
pub use ordered_map::OrderedMapIterator;
pub use ordered_map::OrderedMapKeys;
pub use ordered_map::OrderedMapValues;
pub use sequence::Sequence;

use crate::error::{Error, Result};

// =============================================================================
// Container Protocols
// =============================================================================

/// Common capability of every container in this module.
pub trait Container {
    /// Returns the tag identifying this container's kind.
    fn kind(&self) -> ContainerKind;

    /// Returns the number of elements (or entries) in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the container rejects mutation.
    fn is_frozen(&self) -> bool {
        !self.kind().is_mutable()
    }
}

/// Index-based access shared by [`Sequence`] and [`ImmutableSequence`].
///
/// Indices follow the scripting language's convention: negative values count
/// from the end, so `-1` is the last element. Mutating methods on a frozen
/// container fail with [`Error::Immutable`] before the index is examined.
pub trait SequenceProtocol<T>: Container {
    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index` does not resolve to an element.
    fn get_item(&self, index: isize) -> Result<&T>;

    /// Replaces the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Immutable`] for frozen containers and
    /// [`Error::OutOfRange`] if `index` does not resolve to an element.
    fn set_item(&mut self, index: isize, value: T) -> Result<()>;

    /// Appends an element to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Immutable`] for frozen containers.
    fn append_item(&mut self, value: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Immutable`] for frozen containers and
    /// [`Error::OutOfRange`] if `index` does not resolve to an element.
    fn delete_item(&mut self, index: isize) -> Result<T>;
}

/// Resolves a possibly negative index against `length`.
pub(crate) fn resolve_index(function: &'static str, index: isize, length: usize) -> Result<usize> {
    let resolved = if index < 0 {
        length.checked_sub(index.unsigned_abs())
    } else {
        usize::try_from(index).ok()
    };
    resolved
        .filter(|&position| position < length)
        .ok_or(Error::OutOfRange {
            function,
            index,
            length,
        })
}

/// Clamps a possibly negative insertion point into `0..=length`.
pub(crate) fn clamp_insertion_index(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        usize::try_from(index).map_or(length, |position| position.min(length))
    }
}

/// Writes `items` separated by `", "`.
pub(crate) fn write_joined<'a, T, I>(formatter: &mut std::fmt::Formatter<'_>, items: I) -> std::fmt::Result
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{item}")?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
