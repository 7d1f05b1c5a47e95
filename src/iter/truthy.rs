//! Truthiness as a capability.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use crate::collections::{Container, ImmutableSequence, ImmutableSet, OrderedMap, Sequence};

/// Values that can be tested for truth the way the scripting language does.
///
/// Zero numbers, empty strings, empty containers, `false` and `None` are
/// falsy; everything else is truthy. An `Option` defers to its content.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::Truthy;
///
/// assert!(1_i32.is_truthy());
/// assert!(!0.0_f64.is_truthy());
/// assert!(!"".is_truthy());
/// assert!(Some("x").is_truthy());
/// assert!(!Vec::<i32>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

/// A character is a one-character string, which is never empty.
impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> Truthy for [T; N] {
    #[inline]
    fn is_truthy(&self) -> bool {
        N != 0
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for VecDeque<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> Truthy for HashMap<K, V, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Truthy for HashSet<T, S> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> Truthy for BTreeMap<K, V> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy + ?Sized> Truthy for Box<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

macro_rules! impl_truthy_for_containers {
    ($($container:ident<$($parameter:ident),+>),* $(,)?) => {
        $(
            impl<$($parameter),+> Truthy for $container<$($parameter),+> {
                #[inline]
                fn is_truthy(&self) -> bool {
                    !Container::is_empty(self)
                }
            }
        )*
    };
}

impl_truthy_for_containers!(
    Sequence<T>,
    ImmutableSequence<T>,
    OrderedMap<K, V>,
    ImmutableSet<T>,
);

/// Returns `true` if every element is truthy (vacuously true when empty).
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::all;
///
/// assert!(all([1, 2, 3]));
/// assert!(!all(["a", ""]));
/// assert!(all(Vec::<bool>::new()));
/// ```
pub fn all<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: Truthy,
{
    iterable.into_iter().all(|item| item.is_truthy())
}

/// Returns `true` if at least one element is truthy.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::any;
///
/// assert!(any([0, 0, 3]));
/// assert!(!any([None::<i32>, Some(0)]));
/// ```
pub fn any<I>(iterable: I) -> bool
where
    I: IntoIterator,
    I::Item: Truthy,
{
    iterable.into_iter().any(|item| item.is_truthy())
}
