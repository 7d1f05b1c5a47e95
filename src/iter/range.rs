//! Arithmetic progressions: `range`, `count` and `enumerate`.

use std::iter::FusedIterator;
use std::ops::Add;

use crate::error::{Error, Result};

// =============================================================================
// range
// =============================================================================

/// A finite arithmetic progression with an exclusive upper (or lower) bound.
///
/// Created by [`range`] and [`range_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    current: i64,
    step: i64,
    remaining: u64,
}

impl Range {
    /// Returns the number of values not yet produced.
    #[inline]
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// Yields `start, start + step, ...` while the value stays before `stop`.
///
/// A negative `step` counts down and stops once the value is no longer
/// greater than `stop`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::range;
///
/// let evens: Vec<i64> = range(0, 10, 2).unwrap().collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
///
/// let countdown: Vec<i64> = range(3, 0, -1).unwrap().collect();
/// assert_eq!(countdown, vec![3, 2, 1]);
///
/// assert!(range(0, 1, 0).is_err());
/// ```
pub fn range(start: i64, stop: i64, step: i64) -> Result<Range> {
    if step == 0 {
        return Err(Error::invalid_argument("range", "step must not be zero"));
    }
    let (low, high, stride) = if step > 0 {
        (i128::from(start), i128::from(stop), i128::from(step))
    } else {
        (i128::from(stop), i128::from(start), -i128::from(step))
    };
    let length = if low < high {
        (high - low - 1) / stride + 1
    } else {
        0
    };
    Ok(Range {
        current: start,
        step,
        remaining: u64::try_from(length).unwrap_or(u64::MAX),
    })
}

/// Yields `0, 1, ..., stop - 1`.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::range_to;
///
/// assert_eq!(range_to(3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(range_to(-1).count(), 0);
/// ```
pub fn range_to(stop: i64) -> Range {
    Range {
        current: 0,
        step: 1,
        remaining: u64::try_from(stop).unwrap_or(0),
    }
}

impl Iterator for Range {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.current;
        self.remaining -= 1;
        self.current = self.current.wrapping_add(self.step);
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Range {}

// =============================================================================
// count
// =============================================================================

/// An infinite arithmetic progression. Created by [`count`].
#[derive(Debug, Clone)]
pub struct Count<T> {
    current: T,
    step: T,
    started: bool,
}

/// Yields `start, start + step, start + 2 * step, ...` forever.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::count;
///
/// let odds: Vec<i32> = count(1, 2).take(4).collect();
/// assert_eq!(odds, vec![1, 3, 5, 7]);
///
/// let halves: Vec<f64> = count(0.0, 0.5).take(3).collect();
/// assert_eq!(halves, vec![0.0, 0.5, 1.0]);
/// ```
pub const fn count<T>(start: T, step: T) -> Count<T>
where
    T: Clone + Add<Output = T>,
{
    Count {
        current: start,
        step,
        started: false,
    }
}

impl<T> Iterator for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // The successor is computed on demand so the last representable value
        // can still be yielded.
        if self.started {
            self.current = self.current.clone() + self.step.clone();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Count<T> where T: Clone + Add<Output = T> {}

// =============================================================================
// enumerate
// =============================================================================

/// Pairs each element with a running index. Created by [`enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    source: I,
    index: i64,
    step: i64,
}

/// Yields `(start, a), (start + step, b), ...` for the elements `a, b, ...`.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::enumerate;
///
/// let numbered: Vec<(i64, char)> = enumerate("ab".chars(), 1, 1).collect();
/// assert_eq!(numbered, vec![(1, 'a'), (2, 'b')]);
/// ```
pub fn enumerate<I>(iterable: I, start: i64, step: i64) -> Enumerate<I::IntoIter>
where
    I: IntoIterator,
{
    Enumerate {
        source: iterable.into_iter(),
        index: start,
        step,
    }
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = (i64, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.source.next()?;
        let index = self.index;
        self.index = self.index.wrapping_add(self.step);
        Some((index, item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for Enumerate<I> {}
