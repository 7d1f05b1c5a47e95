//! Lazy sequences in the style of the `itertools` module.
//!
//! Every generator in this module is an explicit state struct implementing
//! [`Iterator`]. Nothing is computed until the caller pulls:
//!
//! - Combinatorics: [`combinations`], [`combinations_with_replacement`],
//!   [`permutations`], [`product`]
//! - Grouping and sharing: [`groupby`], [`groupby_key`], [`tee`]
//! - Slicing and filtering: [`islice`], [`islice_to`], [`compress`],
//!   [`dropwhile`], [`takewhile`], [`filterfalse`], [`filterfalse_falsy`]
//! - Building: [`accumulate`], [`accumulate_from`], [`chain`], [`pairwise`],
//!   [`starmap`], [`zip_longest`]
//! - Infinite: [`count`], [`cycle`], [`repeat`]
//! - Built-ins: [`range`], [`range_to`], [`enumerate`], [`all`], [`any`]
//!
//! [`LazySequence`] adds the fallible "advance" operation to every iterator,
//! and [`Truthy`] captures the scripting language's notion of truthiness.
//!
//! # Examples
//!
//! ## Combinatorics
//!
//! ```rust
//! use serpentine::iter::{permutations, product};
//!
//! let arrangements: Vec<Vec<i32>> = permutations(0..3, None).collect();
//! assert_eq!(arrangements.len(), 6);
//! assert_eq!(arrangements[1], vec![0, 2, 1]);
//!
//! let grid: Vec<Vec<char>> = product(1, ["AB".chars(), "xy".chars()]).collect();
//! assert_eq!(grid[1], vec!['A', 'y']);
//! ```
//!
//! ## Grouping
//!
//! ```rust
//! use serpentine::iter::groupby;
//!
//! let runs: Vec<(char, usize)> = groupby("AAAABBBCCD".chars())
//!     .map(|(key, group)| (key, group.count()))
//!     .collect();
//! assert_eq!(runs, vec![('A', 4), ('B', 3), ('C', 2), ('D', 1)]);
//! ```
//!
//! ## Advancing explicitly
//!
//! ```rust
//! use serpentine::Error;
//! use serpentine::iter::{LazySequence, repeat_times};
//!
//! let mut twice = repeat_times('x', 2);
//! assert_eq!(twice.advance(), Ok('x'));
//! assert_eq!(twice.advance(), Ok('x'));
//! assert_eq!(twice.advance(), Err(Error::Exhausted));
//! assert_eq!(twice.advance_or('-'), '-');
//! ```

mod adapters;
mod combinatorics;
mod groupby;
mod islice;
mod protocol;
mod range;
mod tee;
mod truthy;

pub use adapters::Accumulate;
pub use adapters::Chain;
pub use adapters::Compress;
pub use adapters::Cycle;
pub use adapters::DropWhile;
pub use adapters::FalsyPredicate;
pub use adapters::FilterFalse;
pub use adapters::Pairwise;
pub use adapters::Repeat;
pub use adapters::Spread;
pub use adapters::Starmap;
pub use adapters::TakeWhile;
pub use adapters::ZipLongest;
pub use adapters::accumulate;
pub use adapters::accumulate_from;
pub use adapters::chain;
pub use adapters::compress;
pub use adapters::cycle;
pub use adapters::dropwhile;
pub use adapters::filterfalse;
pub use adapters::filterfalse_falsy;
pub use adapters::pairwise;
pub use adapters::repeat;
pub use adapters::repeat_times;
pub use adapters::starmap;
pub use adapters::takewhile;
pub use adapters::zip_longest;
pub use combinatorics::Combinations;
pub use combinatorics::CombinationsWithReplacement;
pub use combinatorics::Permutations;
pub use combinatorics::Product;
pub use combinatorics::combinations;
pub use combinatorics::combinations_with_replacement;
pub use combinatorics::permutations;
pub use combinatorics::product;
pub use groupby::Group;
pub use groupby::GroupBy;
pub use groupby::IdentityKey;
pub use groupby::groupby;
pub use groupby::groupby_key;
pub use islice::Islice;
pub use islice::islice;
pub use islice::islice_to;
pub use protocol::LazySequence;
pub use range::Count;
pub use range::Enumerate;
pub use range::Range;
pub use range::count;
pub use range::enumerate;
pub use range::range;
pub use range::range_to;
pub use tee::Tee;
pub use tee::tee;
pub use truthy::Truthy;
pub use truthy::all;
pub use truthy::any;
