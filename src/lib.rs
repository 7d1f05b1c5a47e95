//! # serpentine
//!
//! Python-flavoured containers, lazy `itertools`-style sequences, and a
//! deterministic seeded random generator for Rust.
//!
//! ## Overview
//!
//! The crate reproduces well-known semantic contracts from a dynamic
//! scripting language's standard library with static types:
//!
//! - **Containers**: [`Sequence`](collections::Sequence) (list),
//!   [`ImmutableSequence`](collections::ImmutableSequence) (tuple),
//!   [`OrderedMap`](collections::OrderedMap) (dict) and
//!   [`ImmutableSet`](collections::ImmutableSet) (frozenset)
//! - **Lazy sequences**: `accumulate`, `chain`, `combinations`,
//!   `permutations`, `product`, `groupby`, `tee`, `islice` and the rest of the
//!   `itertools` family, each an explicit state machine implementing
//!   [`Iterator`]
//! - **Random**: [`RandomState`](random::RandomState), a seeded generator whose
//!   output sequence is fully determined by its seed
//!
//! ## Feature Flags
//!
//! - `collections`: Container types
//! - `iter`: Lazy sequences and the iterator protocol bridge
//! - `random`: Seeded pseudo-random generator
//! - `serde`: Serialization support
//! - `arc`: Share immutable container storage through `Arc` instead of `Rc`
//! - `fxhash` / `ahash`: Faster hashers for the [`OrderedMap`](collections::OrderedMap) index
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use serpentine::prelude::*;
//!
//! let pairs: Vec<Vec<char>> = combinations("ABC".chars(), 2).collect();
//! assert_eq!(pairs, vec![vec!['A', 'B'], vec!['A', 'C'], vec!['B', 'C']]);
//!
//! let mut random = RandomState::new(1).unwrap();
//! assert_eq!(random.randint(1, 10000).unwrap(), 1194);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and generator functions.
///
/// # Usage
///
/// ```rust
/// use serpentine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};

    #[cfg(feature = "collections")]
    pub use crate::collections::*;

    #[cfg(feature = "iter")]
    pub use crate::iter::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;
}

pub mod error;
pub mod strings;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "iter")]
pub mod iter;

#[cfg(feature = "random")]
pub mod random;

pub use error::{Error, Result};
