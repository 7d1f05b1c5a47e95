//! Positional slicing of a lazy sequence.

use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// Iterator over selected positions of a source. Created by [`islice`] and
/// [`islice_to`].
#[derive(Debug, Clone)]
pub struct Islice<I> {
    source: Option<I>,
    consumed: usize,
    wanted: usize,
    stop: Option<usize>,
    step: usize,
}

/// Yields the elements at positions `start, start + step, ...` that lie before
/// `stop` (`None` means until the source ends).
///
/// The source is read sequentially: skipped elements are consumed and
/// discarded. After the last selected element, the elements before `stop` are
/// consumed as well, so a source passed by reference is left positioned at
/// `stop`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `step` is zero.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::islice;
///
/// let picked: String = islice("ABCDEFG".chars(), 2, None, 2).unwrap().collect();
/// assert_eq!(picked, "CEG");
///
/// let mut source = 0..10;
/// let head: Vec<i32> = islice(&mut source, 0, Some(3), 2).unwrap().collect();
/// assert_eq!(head, vec![0, 2]);
/// assert_eq!(source.next(), Some(3));
/// ```
pub fn islice<I>(iterable: I, start: usize, stop: Option<usize>, step: usize) -> Result<Islice<I::IntoIter>>
where
    I: IntoIterator,
{
    if step == 0 {
        return Err(Error::invalid_argument("islice", "step must be a positive integer"));
    }
    Ok(Islice {
        source: Some(iterable.into_iter()),
        consumed: 0,
        wanted: start,
        stop,
        step,
    })
}

/// Yields the first `stop` elements.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::islice_to;
///
/// assert_eq!(islice_to("ABCDEFG".chars(), 2).collect::<String>(), "AB");
/// ```
pub fn islice_to<I>(iterable: I, stop: usize) -> Islice<I::IntoIter>
where
    I: IntoIterator,
{
    Islice {
        source: Some(iterable.into_iter()),
        consumed: 0,
        wanted: 0,
        stop: Some(stop),
        step: 1,
    }
}

impl<I: Iterator> Islice<I> {
    fn finish(&mut self) -> Option<I::Item> {
        self.source = None;
        None
    }
}

impl<I: Iterator> Iterator for Islice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(source) = self.source.as_mut() else {
            return None;
        };
        while self.consumed < self.wanted {
            if source.next().is_none() {
                return self.finish();
            }
            self.consumed += 1;
        }
        if self.stop.is_some_and(|stop| self.consumed >= stop) {
            return self.finish();
        }
        let Some(item) = source.next() else {
            return self.finish();
        };
        self.consumed += 1;
        let following = self.wanted.saturating_add(self.step);
        self.wanted = match self.stop {
            Some(stop) if following > stop => stop,
            _ => following,
        };
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(source) = self.source.as_ref() else {
            return (0, Some(0));
        };
        let (_, upper) = source.size_hint();
        let upper = match (upper, self.stop) {
            (Some(upper), Some(stop)) => Some(upper.min(stop.saturating_sub(self.consumed))),
            (Some(upper), None) => Some(upper),
            (None, Some(stop)) => Some(stop.saturating_sub(self.consumed)),
            (None, None) => None,
        };
        (0, upper)
    }
}

impl<I: Iterator> FusedIterator for Islice<I> {}
