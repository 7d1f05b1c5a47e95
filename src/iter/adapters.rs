//! Single-source and multi-source lazy adapters.

use std::iter::FusedIterator;

use super::truthy::Truthy;

// =============================================================================
// accumulate
// =============================================================================

/// Running fold. Created by [`accumulate`] and [`accumulate_from`].
#[derive(Debug, Clone)]
pub struct Accumulate<I: Iterator, F> {
    source: I,
    total: Option<I::Item>,
    function: F,
    pending_initial: bool,
}

/// Yields the running results of `function`, starting with the first element.
///
/// An empty source yields nothing.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::accumulate;
///
/// let sums: Vec<i32> = accumulate(1..=5, |total, item| total + item).collect();
/// assert_eq!(sums, vec![1, 3, 6, 10, 15]);
///
/// let maxima: Vec<i32> = accumulate([3, 1, 4, 1, 5], i32::max).collect();
/// assert_eq!(maxima, vec![3, 3, 4, 4, 5]);
/// ```
pub fn accumulate<I, F>(iterable: I, function: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate {
        source: iterable.into_iter(),
        total: None,
        function,
        pending_initial: false,
    }
}

/// Like [`accumulate`], but yields `initial` first and folds from it.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::accumulate_from;
///
/// let sums: Vec<i32> = accumulate_from([1, 2], 100, |total, item| total + item).collect();
/// assert_eq!(sums, vec![100, 101, 103]);
/// ```
pub fn accumulate_from<I, F>(iterable: I, initial: I::Item, function: F) -> Accumulate<I::IntoIter, F>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    Accumulate {
        source: iterable.into_iter(),
        total: Some(initial),
        function,
        pending_initial: true,
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending_initial {
            self.pending_initial = false;
            return self.total.clone();
        }
        let item = self.source.next()?;
        let total = match self.total.take() {
            Some(total) => (self.function)(total, item),
            None => item,
        };
        self.total = Some(total.clone());
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.pending_initial);
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|upper| upper.checked_add(extra)),
        )
    }
}

// =============================================================================
// chain
// =============================================================================

/// Concatenation of several sources. Created by [`chain`].
pub struct Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    sources: O,
    current: Option<<O::Item as IntoIterator>::IntoIter>,
}

/// Yields every element of the first iterable, then of the second, and so on.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::chain;
///
/// let letters: String = chain(["ab".chars(), "".chars(), "c".chars()]).collect();
/// assert_eq!(letters, "abc");
/// ```
pub fn chain<I>(iterables: I) -> Chain<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Chain {
        sources: iterables.into_iter(),
        current: None,
    }
}

impl<O> Iterator for Chain<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            self.current = Some(self.sources.next()?.into_iter());
        }
    }
}

// =============================================================================
// compress
// =============================================================================

/// Elements of `data` whose selector is truthy. Created by [`compress`].
#[derive(Debug, Clone)]
pub struct Compress<D, S> {
    data: D,
    selectors: S,
}

/// Yields the elements of `data` whose matching selector is truthy, stopping
/// when either input runs out.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::compress;
///
/// let kept: String = compress("ABCDEF".chars(), [1, 0, 1, 0, 1, 1]).collect();
/// assert_eq!(kept, "ACEF");
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::IntoIter, S::IntoIter>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Truthy,
{
    Compress {
        data: data.into_iter(),
        selectors: selectors.into_iter(),
    }
}

impl<D, S> Iterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
    type Item = D::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.data.next()?;
            if self.selectors.next()?.is_truthy() {
                return Some(item);
            }
        }
    }
}

// =============================================================================
// cycle
// =============================================================================

/// Endless replay of a source. Created by [`cycle`].
#[derive(Debug, Clone)]
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    saved: Vec<I::Item>,
    replay: usize,
}

/// Yields the elements of `iterable`, saving them, then replays the saved
/// copy forever. An empty source yields nothing.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::cycle;
///
/// let letters: String = cycle("ABC".chars()).take(7).collect();
/// assert_eq!(letters, "ABCABCA");
/// ```
pub fn cycle<I>(iterable: I) -> Cycle<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Cycle {
        source: Some(iterable.into_iter()),
        saved: Vec::new(),
        replay: 0,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.as_mut() {
            if let Some(item) = source.next() {
                self.saved.push(item.clone());
                return Some(item);
            }
            self.source = None;
        }
        let item = self.saved.get(self.replay)?.clone();
        self.replay = (self.replay + 1) % self.saved.len();
        Some(item)
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// dropwhile / takewhile / filterfalse
// =============================================================================

/// Skips a leading run. Created by [`dropwhile`].
#[derive(Debug, Clone)]
pub struct DropWhile<I, P> {
    source: I,
    predicate: P,
    dropping: bool,
}

/// Skips elements while `predicate` holds, then yields every remaining
/// element unconditionally.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::dropwhile;
///
/// let rest: Vec<i32> = dropwhile(|&x: &i32| x < 5, [1, 4, 6, 4, 1]).collect();
/// assert_eq!(rest, vec![6, 4, 1]);
/// ```
pub fn dropwhile<I, P>(predicate: P, iterable: I) -> DropWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    DropWhile {
        source: iterable.into_iter(),
        predicate,
        dropping: true,
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.dropping {
            loop {
                let item = self.source.next()?;
                if !(self.predicate)(&item) {
                    self.dropping = false;
                    return Some(item);
                }
            }
        }
        self.source.next()
    }
}

/// Yields a leading run. Created by [`takewhile`].
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    source: I,
    predicate: P,
    done: bool,
}

/// Yields elements while `predicate` holds and stops at the first failure.
/// The failing element is consumed.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::takewhile;
///
/// let head: Vec<i32> = takewhile(|&x: &i32| x < 5, [1, 4, 6, 4, 1]).collect();
/// assert_eq!(head, vec![1, 4]);
/// ```
pub fn takewhile<I, P>(predicate: P, iterable: I) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile {
        source: iterable.into_iter(),
        predicate,
        done: false,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.source.next()?;
        if (self.predicate)(&item) {
            Some(item)
        } else {
            self.done = true;
            None
        }
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// Predicate type used by [`filterfalse_falsy`].
pub type FalsyPredicate<T> = fn(&T) -> bool;

/// Elements rejected by a predicate. Created by [`filterfalse`] and
/// [`filterfalse_falsy`].
#[derive(Debug, Clone)]
pub struct FilterFalse<I, P> {
    source: I,
    predicate: P,
}

/// Yields the elements for which `predicate` is false.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::filterfalse;
///
/// let even: Vec<i32> = filterfalse(|x: &i32| x % 2 == 1, 0..10).collect();
/// assert_eq!(even, vec![0, 2, 4, 6, 8]);
/// ```
pub fn filterfalse<I, P>(predicate: P, iterable: I) -> FilterFalse<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    FilterFalse {
        source: iterable.into_iter(),
        predicate,
    }
}

/// Yields the falsy elements.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::filterfalse_falsy;
///
/// let blanks: Vec<&str> = filterfalse_falsy(["a", "", "b", ""]).collect();
/// assert_eq!(blanks, vec!["", ""]);
/// ```
pub fn filterfalse_falsy<I>(iterable: I) -> FilterFalse<I::IntoIter, FalsyPredicate<I::Item>>
where
    I: IntoIterator,
    I::Item: Truthy,
{
    filterfalse(<I::Item as Truthy>::is_truthy as FalsyPredicate<I::Item>, iterable)
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.source.next()?;
            if !(self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
{
}

// =============================================================================
// pairwise
// =============================================================================

/// Overlapping consecutive pairs. Created by [`pairwise`].
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    source: I,
    previous: Option<I::Item>,
}

/// Yields `(a, b), (b, c), ...`. Fewer than two elements yield nothing.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::pairwise;
///
/// let pairs: Vec<String> = pairwise("ABCD".chars())
///     .map(|(left, right)| format!("{left}{right}"))
///     .collect();
/// assert_eq!(pairs, vec!["AB", "BC", "CD"]);
/// ```
pub fn pairwise<I>(iterable: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        source: iterable.into_iter(),
        previous: None,
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.previous.is_none() {
            self.previous = Some(self.source.next()?);
        }
        let current = self.source.next()?;
        let previous = self.previous.replace(current.clone())?;
        Some((previous, current))
    }
}

// =============================================================================
// repeat
// =============================================================================

/// The same value over and over. Created by [`repeat`] and [`repeat_times`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

/// Yields clones of `value` forever.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::repeat;
///
/// assert_eq!(repeat(7).take(3).collect::<Vec<_>>(), vec![7, 7, 7]);
/// ```
pub const fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat {
        value,
        remaining: None,
    }
}

/// Yields `times` clones of `value`.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::repeat_times;
///
/// assert_eq!(repeat_times(10, 3).collect::<Vec<_>>(), vec![10, 10, 10]);
/// ```
pub const fn repeat_times<T: Clone>(value: T, times: usize) -> Repeat<T> {
    Repeat {
        value,
        remaining: Some(times),
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining.as_mut() {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                Some(self.value.clone())
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}

// =============================================================================
// starmap
// =============================================================================

/// Calling a function with a tuple spread into its arguments.
///
/// Implemented for every `FnMut` of one to six arguments, taking the matching
/// tuple.
pub trait Spread<Arguments> {
    /// The function's return type.
    type Output;

    /// Calls the function with the tuple's fields as arguments.
    fn spread(&mut self, arguments: Arguments) -> Self::Output;
}

macro_rules! impl_spread {
    ($($argument:ident $value:ident),+) => {
        impl<Function, Return, $($argument),+> Spread<($($argument,)+)> for Function
        where
            Function: FnMut($($argument),+) -> Return,
        {
            type Output = Return;

            #[inline]
            fn spread(&mut self, ($($value,)+): ($($argument,)+)) -> Return {
                self($($value),+)
            }
        }
    };
}

impl_spread!(A a);
impl_spread!(A a, B b);
impl_spread!(A a, B b, C c);
impl_spread!(A a, B b, C c, D d);
impl_spread!(A a, B b, C c, D d, E e);
impl_spread!(A a, B b, C c, D d, E e, F f);

/// Function applications over argument tuples. Created by [`starmap`].
#[derive(Debug, Clone)]
pub struct Starmap<I, F> {
    source: I,
    function: F,
}

/// Yields `function(*arguments)` for each argument tuple of `iterable`.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::starmap;
///
/// let powers: Vec<i64> = starmap(|base: i64, exponent: u32| base.pow(exponent), [(2_i64, 5_u32), (3, 2), (10, 3)])
///     .collect();
/// assert_eq!(powers, vec![32, 9, 1000]);
/// ```
pub fn starmap<I, F>(function: F, iterable: I) -> Starmap<I::IntoIter, F>
where
    I: IntoIterator,
    F: Spread<I::Item>,
{
    Starmap {
        source: iterable.into_iter(),
        function,
    }
}

impl<I, F> Iterator for Starmap<I, F>
where
    I: Iterator,
    F: Spread<I::Item>,
{
    type Item = F::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let arguments = self.source.next()?;
        Some(self.function.spread(arguments))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

// =============================================================================
// zip_longest
// =============================================================================

/// Lock-step iteration padded to the longest source. Created by
/// [`zip_longest`].
#[derive(Debug, Clone)]
pub struct ZipLongest<I, T> {
    sources: Vec<Option<I>>,
    fill: T,
}

/// Yields one row per position until every source is exhausted; exhausted
/// sources contribute `fill`.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::zip_longest;
///
/// let rows: Vec<String> = zip_longest('-', ["ABCD".chars(), "xy".chars()])
///     .map(|row| row.into_iter().collect())
///     .collect();
/// assert_eq!(rows, vec!["Ax", "By", "C-", "D-"]);
/// ```
pub fn zip_longest<I, T>(fill: T, iterables: I) -> ZipLongest<<I::Item as IntoIterator>::IntoIter, T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
    T: Clone,
{
    ZipLongest {
        sources: iterables
            .into_iter()
            .map(|iterable| Some(iterable.into_iter()))
            .collect(),
        fill,
    }
}

impl<I, T> Iterator for ZipLongest<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut live = false;
        let row: Vec<T> = self
            .sources
            .iter_mut()
            .map(|slot| {
                match slot.as_mut().and_then(Iterator::next) {
                    Some(item) => {
                        live = true;
                        item
                    }
                    None => {
                        *slot = None;
                        self.fill.clone()
                    }
                }
            })
            .collect();
        live.then_some(row)
    }
}

impl<I, T> FusedIterator for ZipLongest<I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
}
