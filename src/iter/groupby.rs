//! Run-length grouping over a shared source.
//!
//! [`GroupBy`] and the [`Group`] views it yields all pull from one source
//! through shared state. A generation counter ties each `Group` to the outer
//! step that produced it.
//!
//! # Truncation hazard
//!
//! Advancing the outer [`GroupBy`] invalidates every `Group` it handed out
//! earlier: a stale `Group` yields nothing more, even if it was never read.
//! Collect a group before moving on when its elements are needed later.
//!
//! ```rust
//! use serpentine::iter::groupby;
//!
//! let mut groups = groupby("AABB".chars());
//! let (_, first) = groups.next().unwrap();
//! let (_, second) = groups.next().unwrap();
//! assert_eq!(first.count(), 0);
//! assert_eq!(second.collect::<String>(), "BB");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use tracing::trace;

/// Key function used by [`groupby`]: every element is its own key.
pub type IdentityKey<T> = fn(&T) -> T;

struct GroupState<I: Iterator, K, F> {
    source: I,
    key_function: F,
    current: Option<(K, I::Item)>,
    target: Option<K>,
    generation: u64,
    exhausted: bool,
}

impl<I, K, F> GroupState<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    fn pull(&mut self) {
        self.current = self.source.next().map(|value| ((self.key_function)(&value), value));
        if self.current.is_none() {
            self.exhausted = true;
        }
    }

    fn at_target(&self) -> bool {
        matches!(
            (&self.current, &self.target),
            (Some((key, _)), Some(target)) if key == target
        )
    }
}

/// Iterator over `(key, group)` runs of consecutive equal keys.
///
/// Created by [`groupby`] and [`groupby_key`]. See the
/// [module documentation](self) for the truncation hazard.
pub struct GroupBy<I: Iterator, K, F> {
    state: Rc<RefCell<GroupState<I, K, F>>>,
}

/// The elements of one run, yielded alongside its key by [`GroupBy`].
///
/// A `Group` stops yielding as soon as the `GroupBy` that produced it advances.
pub struct Group<I: Iterator, K, F> {
    state: Rc<RefCell<GroupState<I, K, F>>>,
    key: K,
    generation: u64,
}

static_assertions::assert_not_impl_any!(
    GroupBy<std::vec::IntoIter<i32>, i32, IdentityKey<i32>>: Send, Sync
);
static_assertions::assert_not_impl_any!(
    Group<std::vec::IntoIter<i32>, i32, IdentityKey<i32>>: Send, Sync
);

/// Groups consecutive equal elements; each element is its own key.
///
/// Non-adjacent equal elements form separate groups.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::groupby;
///
/// let keys: String = groupby("AAAABBBCCDAABBB".chars()).map(|(key, _)| key).collect();
/// assert_eq!(keys, "ABCDAB");
/// ```
pub fn groupby<I>(iterable: I) -> GroupBy<I::IntoIter, I::Item, IdentityKey<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone + PartialEq,
{
    groupby_key(iterable, <I::Item as Clone>::clone as IdentityKey<I::Item>)
}

/// Groups consecutive elements for which `key_function` returns equal keys.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::groupby_key;
///
/// let runs: Vec<(bool, Vec<i32>)> = groupby_key([2, 4, 1, 3, 6], |value: &i32| value % 2 == 0)
///     .map(|(even, group)| (even, group.collect()))
///     .collect();
/// assert_eq!(
///     runs,
///     vec![(true, vec![2, 4]), (false, vec![1, 3]), (true, vec![6])]
/// );
/// ```
pub fn groupby_key<I, K, F>(iterable: I, key_function: F) -> GroupBy<I::IntoIter, K, F>
where
    I: IntoIterator,
    K: Clone + PartialEq,
    F: FnMut(&I::Item) -> K,
{
    GroupBy {
        state: Rc::new(RefCell::new(GroupState {
            source: iterable.into_iter(),
            key_function,
            current: None,
            target: None,
            generation: 0,
            exhausted: false,
        })),
    }
}

impl<I, K, F> Iterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: Clone + PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Group<I, K, F>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        if state.current.is_none() {
            if state.exhausted {
                return None;
            }
            state.pull();
        }
        while state.at_target() {
            state.pull();
        }
        let key = state.current.as_ref().map(|(key, _)| key.clone())?;
        state.target = Some(key.clone());
        let generation = state.generation;
        drop(state);
        Some((
            key.clone(),
            Group {
                state: Rc::clone(&self.state),
                key,
                generation,
            },
        ))
    }
}

impl<I, K, F> FusedIterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: Clone + PartialEq,
    F: FnMut(&I::Item) -> K,
{
}

impl<I, K, F> Iterator for Group<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = self.state.borrow_mut();
        if state.generation != self.generation {
            trace!(
                group = self.generation,
                current = state.generation,
                "group is stale after the outer cursor advanced"
            );
            return None;
        }
        match state.current.take() {
            Some((key, value)) if key == self.key => {
                state.pull();
                Some(value)
            }
            other => {
                state.current = other;
                None
            }
        }
    }
}

impl<I, K, F> FusedIterator for Group<I, K, F>
where
    I: Iterator,
    K: PartialEq,
    F: FnMut(&I::Item) -> K,
{
}

impl<I: Iterator, K: fmt::Debug, F> fmt::Debug for GroupBy<I, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("GroupBy");
        if let Ok(state) = self.state.try_borrow() {
            debug
                .field("target", &state.target)
                .field("generation", &state.generation)
                .field("exhausted", &state.exhausted);
        }
        debug.finish_non_exhaustive()
    }
}

impl<I: Iterator, K: fmt::Debug, F> fmt::Debug for Group<I, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stale = self
            .state
            .try_borrow()
            .is_ok_and(|state| state.generation != self.generation);
        formatter
            .debug_struct("Group")
            .field("key", &self.key)
            .field("generation", &self.generation)
            .field("stale", &stale)
            .finish_non_exhaustive()
    }
}
