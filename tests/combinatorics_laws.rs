#![cfg(feature = "iter")]
//! Property-based tests for the combinatorial generators.
//!
//! ## Laws
//!
//! 1. **Counting**: `combinations(P, r)` yields `C(n, r)` tuples,
//!    `permutations(P, r)` yields `n! / (n - r)!`,
//!    `combinations_with_replacement(P, r)` yields `C(n + r - 1, r)` and
//!    `product(k, pools)` yields the product of the pool sizes raised to `k`
//! 2. **Ordering**: index tuples come out in strictly increasing
//!    lexicographic order
//! 3. **Uniqueness**: no index tuple is produced twice

use proptest::prelude::*;
use rstest::rstest;
use serpentine::iter::{combinations, combinations_with_replacement, permutations, product};

fn binomial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    (0..r).fold(1, |accumulator, i| accumulator * (n - i) / (i + 1))
}

fn falling_factorial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    (n - r + 1..=n).product()
}

fn is_strictly_increasing(tuples: &[Vec<usize>]) -> bool {
    tuples.windows(2).all(|pair| pair[0] < pair[1])
}

proptest! {
    #[test]
    fn prop_combinations_count(n in 0usize..9, r in 0usize..10) {
        prop_assert_eq!(combinations(0..n, r).count(), binomial(n, r));
    }

    #[test]
    fn prop_combinations_are_sorted_and_lexicographic(n in 0usize..8, r in 0usize..8) {
        let tuples: Vec<Vec<usize>> = combinations(0..n, r).collect();
        for tuple in &tuples {
            prop_assert!(tuple.windows(2).all(|pair| pair[0] < pair[1]));
        }
        prop_assert!(is_strictly_increasing(&tuples));
    }

    #[test]
    fn prop_combinations_with_replacement_count(n in 0usize..7, r in 0usize..6) {
        let expected = if n == 0 {
            usize::from(r == 0)
        } else {
            binomial(n + r - 1, r)
        };
        prop_assert_eq!(combinations_with_replacement(0..n, r).count(), expected);
    }

    #[test]
    fn prop_combinations_with_replacement_are_lexicographic(n in 0usize..6, r in 0usize..5) {
        let tuples: Vec<Vec<usize>> = combinations_with_replacement(0..n, r).collect();
        prop_assert!(is_strictly_increasing(&tuples));
    }

    #[test]
    fn prop_permutations_count(n in 0usize..7, r in 0usize..8) {
        prop_assert_eq!(permutations(0..n, Some(r)).count(), falling_factorial(n, r));
    }

    #[test]
    fn prop_permutations_are_unique_and_lexicographic(n in 0usize..6, r in 0usize..6) {
        let tuples: Vec<Vec<usize>> = permutations(0..n, Some(r)).collect();
        for tuple in &tuples {
            let mut sorted = tuple.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), tuple.len());
        }
        prop_assert!(is_strictly_increasing(&tuples));
    }

    #[test]
    fn prop_product_count(sizes in prop::collection::vec(0usize..4, 0..4), repeat in 0usize..3) {
        let pools: Vec<Vec<usize>> = sizes.iter().map(|&size| (0..size).collect()).collect();
        let expected = sizes.iter().product::<usize>().pow(u32::try_from(repeat).unwrap());
        prop_assert_eq!(product(repeat, pools).count(), expected);
    }

    #[test]
    fn prop_product_is_lexicographic(sizes in prop::collection::vec(1usize..4, 1..4)) {
        let pools: Vec<Vec<usize>> = sizes.iter().map(|&size| (0..size).collect()).collect();
        let tuples: Vec<Vec<usize>> = product(1, pools).collect();
        prop_assert!(is_strictly_increasing(&tuples));
    }

    #[test]
    fn prop_combinations_select_from_pool(pool in prop::collection::vec(any::<i16>(), 0..7), r in 0usize..4) {
        for tuple in combinations(pool.clone(), r) {
            prop_assert!(tuple.iter().all(|value| pool.contains(value)));
        }
    }
}

#[rstest]
fn test_combinations_match_reference_listing() {
    let tuples: Vec<String> = combinations("ABCD".chars(), 3)
        .map(|tuple| tuple.into_iter().collect())
        .collect();
    assert_eq!(tuples, ["ABC", "ABD", "ACD", "BCD"]);
}

#[rstest]
fn test_product_pools_are_materialized_once() {
    let pulls = std::cell::Cell::new(0);
    let pool = (0..3).inspect(|_| pulls.set(pulls.get() + 1));
    assert_eq!(product(2, [pool]).count(), 9);
    assert_eq!(pulls.get(), 3);
}

#[rstest]
#[case(0, 1)]
#[case(3, 4)]
#[case(3, usize::MAX)]
fn test_index_generators_longer_than_pool_yield_nothing(#[case] n: usize, #[case] r: usize) {
    assert_eq!(combinations(0..n, r).count(), 0);
    assert_eq!(permutations(0..n, Some(r)).count(), 0);
}

#[rstest]
#[case(1)]
#[case(usize::MAX)]
fn test_combinations_with_replacement_of_empty_pool_yield_nothing(#[case] r: usize) {
    assert_eq!(combinations_with_replacement(Vec::<usize>::new(), r).count(), 0);
}
