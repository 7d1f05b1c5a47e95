//! Independent cursors over one source.
//!
//! [`tee`] splits a source into cursors that each see the full sequence. The
//! cursors share a buffer: an element is pulled from the source when the
//! cursor furthest ahead first asks for it, and it is dropped from the buffer
//! once every live cursor has moved past it. Memory use is therefore bounded
//! by the distance between the fastest and the slowest live cursor.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::rc::Rc;

use tracing::trace;

struct TeeBuffer<I: Iterator> {
    source: Fuse<I>,
    buffer: VecDeque<I::Item>,
    /// Absolute position of `buffer[0]` in the source sequence.
    base: usize,
    /// Absolute position of each cursor; `None` marks a released slot.
    cursors: Vec<Option<usize>>,
}

impl<I> TeeBuffer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    fn next_for(&mut self, slot: usize) -> Option<I::Item> {
        let position = self.cursors.get(slot).copied().flatten()?;
        let offset = position - self.base;
        let value = if let Some(buffered) = self.buffer.get(offset) {
            buffered.clone()
        } else {
            let pulled = self.source.next()?;
            self.buffer.push_back(pulled.clone());
            pulled
        };
        self.cursors[slot] = Some(position + 1);
        if position == self.base {
            self.trim();
        }
        Some(value)
    }

    fn remaining_for(&self, slot: usize) -> (usize, Option<usize>) {
        let Some(position) = self.cursors.get(slot).copied().flatten() else {
            return (0, Some(0));
        };
        let buffered = self.base + self.buffer.len() - position;
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I: Iterator> TeeBuffer<I> {
    fn trim(&mut self) {
        let end = self.base + self.buffer.len();
        let slowest = self.cursors.iter().flatten().copied().min().unwrap_or(end);
        let surplus = slowest - self.base;
        self.buffer.drain(..surplus);
        self.base = slowest;
    }

    fn register(&mut self, position: usize) -> usize {
        if let Some(slot) = self.cursors.iter().position(Option::is_none) {
            self.cursors[slot] = Some(position);
            slot
        } else {
            self.cursors.push(Some(position));
            self.cursors.len() - 1
        }
    }
}

/// One of the cursors created by [`tee`].
///
/// Cloning a `Tee` creates a new cursor at the same position. Dropping a
/// `Tee` releases the elements only it was still waiting to read.
pub struct Tee<I: Iterator> {
    shared: Rc<RefCell<TeeBuffer<I>>>,
    slot: usize,
}

static_assertions::assert_not_impl_any!(Tee<std::vec::IntoIter<i32>>: Send, Sync);

/// Returns `n` independent cursors over `iterable`.
///
/// Every cursor yields the complete sequence in order, however the reads
/// of the cursors interleave. `n == 0` returns no cursors and never touches
/// the source.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::tee;
///
/// let mut cursors = tee(1..=3, 2);
/// let second = cursors.pop().unwrap();
/// let first = cursors.pop().unwrap();
///
/// assert_eq!(first.collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn tee<I>(iterable: I, n: usize) -> Vec<Tee<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    trace!(cursors = n, "splitting source with tee");
    let shared = Rc::new(RefCell::new(TeeBuffer {
        source: iterable.into_iter().fuse(),
        buffer: VecDeque::new(),
        base: 0,
        cursors: vec![Some(0); n],
    }));
    (0..n)
        .map(|slot| Tee {
            shared: Rc::clone(&shared),
            slot,
        })
        .collect()
}

impl<I> Tee<I>
where
    I: Iterator,
{
    /// Returns the number of elements currently held in the shared buffer.
    pub fn buffered(&self) -> usize {
        self.shared.borrow().buffer.len()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.shared.borrow_mut().next_for(self.slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shared.borrow().remaining_for(self.slot)
    }
}

impl<I> FusedIterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Tee<I> {
    fn clone(&self) -> Self {
        let mut shared = self.shared.borrow_mut();
        let position = shared
            .cursors
            .get(self.slot)
            .copied()
            .flatten()
            .unwrap_or(shared.base);
        let slot = shared.register(position);
        drop(shared);
        Self {
            shared: Rc::clone(&self.shared),
            slot,
        }
    }
}

impl<I: Iterator> Drop for Tee<I> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            if let Some(cursor) = shared.cursors.get_mut(self.slot) {
                *cursor = None;
            }
            shared.trim();
        }
    }
}

impl<I: Iterator> fmt::Debug for Tee<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("Tee");
        debug.field("slot", &self.slot);
        if let Ok(shared) = self.shared.try_borrow() {
            let position = shared.cursors.get(self.slot).copied().flatten();
            debug
                .field("position", &position)
                .field("buffered", &shared.buffer.len());
        }
        debug.finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pair<I>(iterable: I) -> (Tee<I::IntoIter>, Tee<I::IntoIter>)
    where
        I: IntoIterator,
        I::Item: Clone,
    {
        let mut cursors = tee(iterable, 2);
        let second = cursors.pop().unwrap();
        let first = cursors.pop().unwrap();
        (first, second)
    }

    #[rstest]
    fn test_debug_shows_cursor_position_and_buffer() {
        let (mut first, second) = pair("ABC".chars());
        assert_eq!(first.next(), Some('A'));
        assert_eq!(
            format!("{first:?}"),
            "Tee { slot: 0, position: Some(1), buffered: 1, .. }"
        );
        assert_eq!(
            format!("{second:?}"),
            "Tee { slot: 1, position: Some(0), buffered: 1, .. }"
        );
    }

    #[rstest]
    fn test_first_drained_then_second() {
        let (first, second) = pair("ABC".chars());
        assert_eq!(first.collect::<String>(), "ABC");
        assert_eq!(second.collect::<String>(), "ABC");
    }

    #[rstest]
    fn test_interleaved_reads() {
        let (mut first, mut second) = pair(0..4);
        assert_eq!(first.next(), Some(0));
        assert_eq!(first.next(), Some(1));
        assert_eq!(second.next(), Some(0));
        assert_eq!(first.next(), Some(2));
        assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.collect::<Vec<_>>(), vec![3]);
    }

    #[rstest]
    fn test_source_is_pulled_once_per_element() {
        let pulls = std::cell::Cell::new(0);
        let source = (0..3).inspect(|_| pulls.set(pulls.get() + 1));
        let (first, second) = pair(source);
        assert_eq!(first.count(), 3);
        assert_eq!(second.count(), 3);
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    fn test_buffer_holds_only_the_gap() {
        let (mut first, mut second) = pair(0..10);
        for _ in 0..4 {
            first.next();
        }
        assert_eq!(first.buffered(), 4);
        second.next();
        second.next();
        assert_eq!(first.buffered(), 2);
        drop(second);
        assert_eq!(first.buffered(), 0);
    }

    #[rstest]
    fn test_clone_starts_at_same_position() {
        let mut cursors = tee(0..5, 1);
        let mut original = cursors.pop().unwrap();
        original.next();
        original.next();
        let copy = original.clone();
        assert_eq!(copy.collect::<Vec<_>>(), vec![2, 3, 4]);
        assert_eq!(original.collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_zero_cursors() {
        assert!(tee(0..3, 0).is_empty());
    }

    #[rstest]
    fn test_size_hint_includes_buffer() {
        let (mut first, second) = pair(vec![1, 2, 3]);
        first.next();
        assert_eq!(first.size_hint(), (2, Some(2)));
        assert_eq!(second.size_hint(), (3, Some(3)));
    }
}
