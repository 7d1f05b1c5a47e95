//! The "advance or signal exhaustion" bridge over [`Iterator`].

use crate::error::{Error, Result};

/// Pull-based access to a lazy sequence with an explicit exhaustion signal.
///
/// `Iterator::next` reports the end of a sequence with `None`. This trait
/// turns that into a value the caller has to deal with: [`advance`] fails with
/// [`Error::Exhausted`], and [`advance_or`] substitutes a caller-supplied
/// default. Every [`Iterator`] implements it.
///
/// [`advance`]: LazySequence::advance
/// [`advance_or`]: LazySequence::advance_or
///
/// # Examples
///
/// ```rust
/// use serpentine::Error;
/// use serpentine::iter::LazySequence;
///
/// let mut digits = [1, 2].into_iter();
/// assert_eq!(digits.advance(), Ok(1));
/// assert_eq!(digits.advance_or(0), 2);
/// assert_eq!(digits.advance_or(0), 0);
/// assert_eq!(digits.advance(), Err(Error::Exhausted));
/// ```
pub trait LazySequence: Iterator {
    /// Produces the next element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Exhausted`] if the sequence has no more elements.
    #[inline]
    fn advance(&mut self) -> Result<Self::Item> {
        self.next().ok_or(Error::Exhausted)
    }

    /// Produces the next element, or `default` once the sequence is exhausted.
    #[inline]
    fn advance_or(&mut self, default: Self::Item) -> Self::Item {
        self.next().unwrap_or(default)
    }
}

impl<I: Iterator + ?Sized> LazySequence for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_advance_yields_until_exhausted() {
        let mut source = vec!["a", "b"].into_iter();
        assert_eq!(source.advance(), Ok("a"));
        assert_eq!(source.advance(), Ok("b"));
        assert_eq!(source.advance(), Err(Error::Exhausted));
    }

    #[rstest]
    fn test_advance_or_returns_default_repeatedly() {
        let mut source = std::iter::empty::<i32>();
        assert_eq!(source.advance_or(7), 7);
        assert_eq!(source.advance_or(8), 8);
    }

    #[rstest]
    fn test_works_through_trait_object() {
        let mut boxed: Box<dyn Iterator<Item = i32>> = Box::new(0..1);
        assert_eq!(boxed.advance(), Ok(0));
        assert!(boxed.advance().is_err());
    }
}
