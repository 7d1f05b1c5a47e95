//! Combinatorial generators.
//!
//! Each generator materializes its input into a pool up front and then walks
//! an index array, cloning the selected pool elements into a fresh `Vec` per
//! step. Index arrays live inline in a [`SmallVec`] for the common small `r`.

use std::iter::FusedIterator;

use smallvec::{SmallVec, smallvec};

type Indices = SmallVec<[usize; 8]>;

fn select<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| pool[index].clone()).collect()
}

// =============================================================================
// combinations
// =============================================================================

/// Iterator over `r`-length subsequences. Created by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<T> {
    pool: Vec<T>,
    indices: Indices,
    first: bool,
    done: bool,
}

/// Yields every `r`-length subsequence of `iterable` whose positions are
/// strictly increasing, in lexicographic order of those positions.
///
/// Elements are treated as distinct by position, not by value. `r` larger than
/// the pool yields nothing; `r == 0` yields one empty tuple.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::combinations;
///
/// let pairs: Vec<String> = combinations("ABCD".chars(), 2)
///     .map(|pair| pair.into_iter().collect())
///     .collect();
/// assert_eq!(pairs, vec!["AB", "AC", "AD", "BC", "BD", "CD"]);
/// ```
pub fn combinations<I>(iterable: I, r: usize) -> Combinations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    let done = r > pool.len();
    Combinations {
        pool,
        indices: if done { Indices::new() } else { (0..r).collect() },
        first: true,
        done,
    }
}

impl<T: Clone> Iterator for Combinations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(select(&self.pool, &self.indices));
        }
        let n = self.pool.len();
        let r = self.indices.len();
        let Some(pivot) = (0..r).rev().find(|&i| self.indices[i] != i + n - r) else {
            self.done = true;
            return None;
        };
        self.indices[pivot] += 1;
        for j in pivot + 1..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(select(&self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for Combinations<T> {}

// =============================================================================
// combinations_with_replacement
// =============================================================================

/// Iterator over `r`-length multisets. Created by
/// [`combinations_with_replacement`].
#[derive(Debug, Clone)]
pub struct CombinationsWithReplacement<T> {
    pool: Vec<T>,
    indices: Indices,
    first: bool,
    done: bool,
}

/// Yields every `r`-length selection of `iterable` with repetition allowed,
/// positions non-decreasing, in lexicographic order.
///
/// An empty pool yields nothing unless `r == 0`, which yields one empty tuple.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::combinations_with_replacement;
///
/// let picks: Vec<String> = combinations_with_replacement("ABC".chars(), 2)
///     .map(|pick| pick.into_iter().collect())
///     .collect();
/// assert_eq!(picks, vec!["AA", "AB", "AC", "BB", "BC", "CC"]);
/// ```
pub fn combinations_with_replacement<I>(iterable: I, r: usize) -> CombinationsWithReplacement<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    let done = pool.is_empty() && r > 0;
    CombinationsWithReplacement {
        pool,
        indices: if done { Indices::new() } else { smallvec![0; r] },
        first: true,
        done,
    }
}

impl<T: Clone> Iterator for CombinationsWithReplacement<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(select(&self.pool, &self.indices));
        }
        let ceiling = self.pool.len().saturating_sub(1);
        let Some(pivot) = self.indices.iter().rposition(|&index| index != ceiling) else {
            self.done = true;
            return None;
        };
        let raised = self.indices[pivot] + 1;
        for index in &mut self.indices[pivot..] {
            *index = raised;
        }
        Some(select(&self.pool, &self.indices))
    }
}

impl<T: Clone> FusedIterator for CombinationsWithReplacement<T> {}

// =============================================================================
// permutations
// =============================================================================

/// Iterator over `r`-length arrangements. Created by [`permutations`].
#[derive(Debug, Clone)]
pub struct Permutations<T> {
    pool: Vec<T>,
    indices: Indices,
    cycles: Indices,
    r: usize,
    first: bool,
    done: bool,
}

/// Yields every `r`-length arrangement of `iterable` in lexicographic order of
/// pool positions. `None` means the full length of the pool.
///
/// `r` larger than the pool yields nothing.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::permutations;
///
/// let arrangements: Vec<String> = permutations("ABC".chars(), Some(2))
///     .map(|arrangement| arrangement.into_iter().collect())
///     .collect();
/// assert_eq!(arrangements, vec!["AB", "AC", "BA", "BC", "CA", "CB"]);
/// ```
pub fn permutations<I>(iterable: I, r: Option<usize>) -> Permutations<I::Item>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let pool: Vec<I::Item> = iterable.into_iter().collect();
    let n = pool.len();
    let r = r.unwrap_or(n);
    let done = r > n;
    let cycles = if done {
        Indices::new()
    } else {
        (n - r + 1..=n).rev().collect()
    };
    Permutations {
        pool,
        indices: (0..n).collect(),
        cycles,
        r,
        first: true,
        done,
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(select(&self.pool, &self.indices[..self.r]));
        }
        let n = self.pool.len();
        for i in (0..self.r).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return Some(select(&self.pool, &self.indices[..self.r]));
            }
        }
        self.done = true;
        None
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

// =============================================================================
// product
// =============================================================================

/// Iterator over the cartesian product of several pools. Created by
/// [`product`].
#[derive(Debug, Clone)]
pub struct Product<T> {
    pools: Vec<Vec<T>>,
    indices: Indices,
    first: bool,
    done: bool,
}

/// Yields the cartesian product of `iterables`, repeated `repeat` times, in
/// row-major order: the rightmost pool varies fastest.
///
/// Any empty pool yields nothing. No pools at all (or `repeat == 0`) yields a
/// single empty tuple.
///
/// # Examples
///
/// ```rust
/// use serpentine::iter::product;
///
/// let bits: Vec<Vec<u8>> = product(2, [[0, 1]]).collect();
/// assert_eq!(bits, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn product<I, P, T>(repeat: usize, iterables: I) -> Product<T>
where
    I: IntoIterator<Item = P>,
    P: IntoIterator<Item = T>,
    T: Clone,
{
    let base: Vec<Vec<T>> = iterables
        .into_iter()
        .map(|pool| pool.into_iter().collect())
        .collect();
    let pools: Vec<Vec<T>> = (0..repeat).flat_map(|_| base.iter().cloned()).collect();
    let done = pools.iter().any(Vec::is_empty);
    Product {
        indices: smallvec![0; pools.len()],
        pools,
        first: true,
        done,
    }
}

impl<T: Clone> Iterator for Product<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.first {
            let mut advanced = false;
            for (index, pool) in self.indices.iter_mut().zip(&self.pools).rev() {
                *index += 1;
                if *index < pool.len() {
                    advanced = true;
                    break;
                }
                *index = 0;
            }
            if !advanced {
                self.done = true;
                return None;
            }
        }
        self.first = false;
        Some(
            self.indices
                .iter()
                .zip(&self.pools)
                .map(|(&index, pool)| pool[index].clone())
                .collect(),
        )
    }
}

impl<T: Clone> FusedIterator for Product<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn strings(tuples: impl Iterator<Item = Vec<char>>) -> Vec<String> {
        tuples.map(|tuple| tuple.into_iter().collect()).collect()
    }

    #[rstest]
    fn test_combinations_of_five_choose_three() {
        let tuples: Vec<Vec<i32>> = combinations(1..=5, 3).collect();
        assert_eq!(tuples.len(), 10);
        assert_eq!(tuples[0], vec![1, 2, 3]);
        assert_eq!(tuples[9], vec![3, 4, 5]);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(4, 1)]
    #[case(5, 0)]
    fn test_combinations_edge_lengths(#[case] r: usize, #[case] expected: usize) {
        assert_eq!(combinations(0..4, r).count(), expected);
    }

    #[rstest]
    fn test_oversized_length_yields_without_allocating() {
        assert_eq!(combinations(0..3, usize::MAX).count(), 0);
        assert_eq!(combinations_with_replacement(Vec::<i32>::new(), usize::MAX).count(), 0);
        assert_eq!(permutations(0..3, Some(usize::MAX)).count(), 0);
    }

    #[rstest]
    fn test_combinations_keep_positional_duplicates() {
        let tuples: Vec<Vec<i32>> = combinations([1, 1, 2], 2).collect();
        assert_eq!(tuples, vec![vec![1, 1], vec![1, 2], vec![1, 2]]);
    }

    #[rstest]
    fn test_combinations_with_replacement_counts() {
        assert_eq!(combinations_with_replacement(0..3, 3).count(), 10);
        assert_eq!(combinations_with_replacement(0..3, 0).count(), 1);
        assert_eq!(combinations_with_replacement(0..0, 2).count(), 0);
        assert_eq!(combinations_with_replacement(0..0, 0).count(), 1);
    }

    #[rstest]
    fn test_combinations_with_replacement_is_non_decreasing() {
        for tuple in combinations_with_replacement(0..4, 3) {
            assert!(tuple.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[rstest]
    fn test_permutations_of_four_take_two() {
        let tuples = strings(permutations("ABCD".chars(), Some(2)));
        assert_eq!(tuples.len(), 12);
        assert_eq!(&tuples[..4], ["AB", "AC", "AD", "BA"]);
        assert_eq!(tuples[11], "DC");
    }

    #[rstest]
    fn test_permutations_full_length() {
        let tuples: Vec<Vec<i32>> = permutations(0..3, None).collect();
        assert_eq!(
            tuples,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[rstest]
    #[case(Some(0), 1)]
    #[case(Some(4), 0)]
    #[case(None, 6)]
    fn test_permutations_edge_lengths(#[case] r: Option<usize>, #[case] expected: usize) {
        assert_eq!(permutations(0..3, r).count(), expected);
    }

    #[rstest]
    fn test_permutations_of_empty_pool() {
        let tuples: Vec<Vec<i32>> = permutations(Vec::new(), None).collect();
        assert_eq!(tuples, vec![Vec::<i32>::new()]);
    }

    #[rstest]
    fn test_product_is_row_major() {
        let tuples = strings(product(1, ["ABCDE".chars(), "xy".chars()]));
        assert_eq!(
            tuples,
            ["Ax", "Ay", "Bx", "By", "Cx", "Cy", "Dx", "Dy", "Ex", "Ey"]
        );
    }

    #[rstest]
    fn test_product_with_repeat() {
        let tuples: Vec<Vec<i32>> = product(3, [vec![0, 1]]).collect();
        assert_eq!(tuples.len(), 8);
        assert_eq!(tuples[0], vec![0, 0, 0]);
        assert_eq!(tuples[5], vec![1, 0, 1]);
        assert_eq!(tuples[7], vec![1, 1, 1]);
    }

    #[rstest]
    fn test_product_with_empty_pool_yields_nothing() {
        assert_eq!(product(1, [vec![1, 2], vec![]]).count(), 0);
    }

    #[rstest]
    fn test_product_without_pools_yields_one_empty_tuple() {
        let tuples: Vec<Vec<i32>> = product(1, Vec::<Vec<i32>>::new()).collect();
        assert_eq!(tuples, vec![Vec::<i32>::new()]);
        assert_eq!(product(0, [vec![1, 2]]).count(), 1);
    }
}
