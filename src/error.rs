//! Error types shared by every module of the crate.
//!
//! All failures are reported synchronously to the immediate caller as an
//! [`Error`]. Nothing in this crate retries or recovers internally; the only
//! fallback values are the ones a caller supplies explicitly (for example
//! [`LazySequence::advance_or`](crate::iter::LazySequence::advance_or)).

use std::fmt;

/// Identifies one of the crate's container types.
///
/// This is the closed set of container shapes the crate knows about. Code
/// that needs to branch on "what kind of container is this" matches on the tag
/// instead of performing runtime type inspection.
///
/// # Examples
///
/// ```rust
/// use serpentine::error::ContainerKind;
///
/// assert!(ContainerKind::Sequence.is_mutable());
/// assert!(!ContainerKind::ImmutableSequence.is_mutable());
/// assert_eq!(ContainerKind::OrderedMap.name(), "OrderedMap");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// A mutable, growable sequence (list).
    Sequence,
    /// A sequence frozen at construction (tuple).
    ImmutableSequence,
    /// An insertion-ordered key/value map (dict).
    OrderedMap,
    /// A set frozen at construction (frozenset).
    ImmutableSet,
}

impl ContainerKind {
    /// Returns `true` if containers of this kind accept mutation.
    #[inline]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::Sequence | Self::OrderedMap)
    }

    /// Returns the type name used in error messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sequence => "Sequence",
            Self::ImmutableSequence => "ImmutableSequence",
            Self::OrderedMap => "OrderedMap",
            Self::ImmutableSet => "ImmutableSet",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Represents every failure the crate can report.
///
/// # Examples
///
/// ```rust
/// use serpentine::Error;
///
/// let error = Error::OutOfRange {
///     function: "Sequence::pop",
///     index: 5,
///     length: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "Sequence::pop: index 5 out of range for length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument has the wrong shape or value (zero step, empty range, ...).
    InvalidArgument {
        /// The operation that rejected the argument.
        function: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
    /// An index lies outside the bounds of a container.
    OutOfRange {
        /// The operation that performed the lookup.
        function: &'static str,
        /// The requested index, before negative-index resolution.
        index: isize,
        /// The length of the container at the time of the lookup.
        length: usize,
    },
    /// A lazy sequence was advanced past its end without a default.
    Exhausted,
    /// A frozen container was asked to mutate.
    Immutable {
        /// The kind of container that refused.
        kind: ContainerKind,
        /// The mutating operation that was attempted.
        operation: &'static str,
    },
    /// A value or key lookup found nothing.
    NotFound {
        /// The operation that performed the lookup.
        function: &'static str,
        /// A rendering of what was looked for.
        detail: String,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub(crate) fn invalid_argument(function: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::NotFound`].
    pub(crate) fn not_found(function: &'static str, detail: impl Into<String>) -> Self {
        Self::NotFound {
            function,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { function, reason } => {
                write!(formatter, "{function}: invalid argument: {reason}")
            }
            Self::OutOfRange {
                function,
                index,
                length,
            } => write!(
                formatter,
                "{function}: index {index} out of range for length {length}"
            ),
            Self::Exhausted => write!(formatter, "lazy sequence exhausted"),
            Self::Immutable { kind, operation } => {
                write!(formatter, "{kind}::{operation}: {kind} is immutable")
            }
            Self::NotFound { function, detail } => {
                write!(formatter, "{function}: {detail} not found")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized [`Result`](std::result::Result) for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_argument_display() {
        let error = Error::invalid_argument("range", "step must not be zero");
        assert_eq!(
            format!("{error}"),
            "range: invalid argument: step must not be zero"
        );
    }

    #[rstest]
    fn test_exhausted_display() {
        assert_eq!(format!("{}", Error::Exhausted), "lazy sequence exhausted");
    }

    #[rstest]
    fn test_immutable_display() {
        let error = Error::Immutable {
            kind: ContainerKind::ImmutableSequence,
            operation: "set_item",
        };
        assert_eq!(
            format!("{error}"),
            "ImmutableSequence::set_item: ImmutableSequence is immutable"
        );
    }

    #[rstest]
    fn test_not_found_display() {
        let error = Error::not_found("OrderedMap::pop", "key \"a\"");
        assert_eq!(format!("{error}"), "OrderedMap::pop: key \"a\" not found");
    }

    #[rstest]
    #[case(ContainerKind::Sequence, true)]
    #[case(ContainerKind::ImmutableSequence, false)]
    #[case(ContainerKind::OrderedMap, true)]
    #[case(ContainerKind::ImmutableSet, false)]
    fn test_container_kind_mutability(#[case] kind: ContainerKind, #[case] expected: bool) {
        assert_eq!(kind.is_mutable(), expected);
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&Error::Exhausted);
    }
}
