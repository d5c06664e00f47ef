//! Selections of `n` elements from a pool: combinations, permutations, and
//! their repeated variants.
//!
//! One cursor type, [`Arrangements`], drives all four families through the
//! shared [`Counter`]; the family is picked by a [`SuccessorRule`] type
//! parameter. Every bucket lists pool elements in the order of the chosen
//! indices, and buckets come out in lexicographic index order.

use crate::core::traits::{Remove, Sequence};
use crate::foundation::types::Bucket;
use crate::generators::counter::{Counter, SuccessorRule};
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use tracing::{debug, trace};

// ============================================================================
// Successor rules
// ============================================================================

/// Strictly increasing index selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationRule;

impl SuccessorRule for CombinationRule {
    const NAME: &'static str = "combination";

    fn bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        if width > pool {
            return None;
        }
        Some(((0..width).collect(), (pool - width..pool).collect()))
    }

    fn advance(indices: &mut [usize], pool: usize) {
        let width = indices.len();
        // Position i can hold at most pool - width + i.
        let Some(i) = (0..width).rev().find(|&i| indices[i] < pool - width + i) else {
            return;
        };
        indices[i] += 1;
        for j in i + 1..width {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

/// Ordered selections of distinct indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermutationRule;

impl SuccessorRule for PermutationRule {
    const NAME: &'static str = "permutation";

    fn bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        if width > pool {
            return None;
        }
        Some(((0..width).collect(), (pool - width..pool).rev().collect()))
    }

    fn advance(indices: &mut [usize], pool: usize) {
        let width = indices.len();
        let mut used = vec![false; pool];
        for &index in indices.iter() {
            used[index] = true;
        }

        for i in (0..width).rev() {
            used[indices[i]] = false;
            let Some(next) = (indices[i] + 1..pool).find(|&v| !used[v]) else {
                continue;
            };
            indices[i] = next;
            used[next] = true;

            let mut free = (0..pool).filter(|&v| !used[v]);
            for slot in &mut indices[i + 1..] {
                // width <= pool, so enough unused indices remain.
                if let Some(v) = free.next() {
                    *slot = v;
                }
            }
            return;
        }
    }
}

/// Non-decreasing index selections; elements may repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatedCombinationRule;

impl SuccessorRule for RepeatedCombinationRule {
    const NAME: &'static str = "repeated_combination";

    fn bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        repeated_bounds(pool, width)
    }

    fn advance(indices: &mut [usize], pool: usize) {
        let Some(i) = indices.iter().rposition(|&v| v + 1 < pool) else {
            return;
        };
        indices[i] += 1;
        let floor = indices[i];
        for slot in &mut indices[i + 1..] {
            *slot = floor;
        }
    }
}

/// Unconstrained index tuples; elements may repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatedPermutationRule;

impl SuccessorRule for RepeatedPermutationRule {
    const NAME: &'static str = "repeated_permutation";

    fn bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)> {
        repeated_bounds(pool, width)
    }

    fn advance(indices: &mut [usize], pool: usize) {
        let Some(i) = indices.iter().rposition(|&v| v + 1 < pool) else {
            return;
        };
        indices[i] += 1;
        for slot in &mut indices[i + 1..] {
            *slot = 0;
        }
    }
}

fn repeated_bounds(pool: usize, width: usize) -> Option<(Vec<usize>, Vec<usize>)> {
    if width == 0 {
        return Some((Vec::new(), Vec::new()));
    }
    if pool == 0 {
        return None;
    }
    Some((vec![0; width], vec![pool - 1; width]))
}

// ============================================================================
// Cursor
// ============================================================================

/// Generator cursor over an owned pool.
#[derive(Clone)]
pub struct Arrangements<T, R> {
    pool: Vec<T>,
    counter: Counter,
    rule: PhantomData<fn() -> R>,
}

/// Cursor yielding strictly increasing selections.
pub type Combinations<T> = Arrangements<T, CombinationRule>;
/// Cursor yielding ordered selections of distinct elements.
pub type Permutations<T> = Arrangements<T, PermutationRule>;
/// Cursor yielding non-decreasing selections with repetition.
pub type RepeatedCombinations<T> = Arrangements<T, RepeatedCombinationRule>;
/// Cursor yielding every tuple over the pool.
pub type RepeatedPermutations<T> = Arrangements<T, RepeatedPermutationRule>;

impl<T, R: SuccessorRule> Arrangements<T, R> {
    /// Creates a cursor choosing `width` elements from `pool`.
    ///
    /// A width of zero yields one empty bucket. A negative width yields
    /// nothing, as does a width the rule can't satisfy.
    pub fn new(pool: Vec<T>, width: isize) -> Self {
        let counter = usize::try_from(width)
            .ok()
            .and_then(|width| R::bounds(pool.len(), width))
            .map_or_else(Counter::exhausted, |(start, end)| Counter::new(start, end));

        debug!(
            generator = R::NAME,
            pool = pool.len(),
            width,
            exhausted = !counter.has_more(),
            "built generator cursor"
        );

        Self {
            pool,
            counter,
            rule: PhantomData,
        }
    }

    /// Returns the pool elements are drawn from.
    pub fn pool(&self) -> &[T] {
        &self.pool
    }
}

impl<T: Clone, R: SuccessorRule> Iterator for Arrangements<T, R> {
    type Item = Bucket<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pool = &self.pool;
        let bucket = self.counter.step(
            |indices| indices.iter().map(|&i| pool[i].clone()).collect(),
            |indices| R::advance(indices, pool.len()),
        )?;

        if !self.counter.has_more() {
            trace!(generator = R::NAME, "reached end sentinel");
        }
        Some(bucket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.counter.has_more() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<T: Clone, R: SuccessorRule> FusedIterator for Arrangements<T, R> {}

impl<T, R> Remove for Arrangements<T, R> {}

impl<T: fmt::Debug, R: SuccessorRule> fmt::Debug for Arrangements<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrangements")
            .field("rule", &R::NAME)
            .field("pool", &self.pool)
            .field("counter", &self.counter)
            .finish()
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Re-iterable generator over a source sequence.
///
/// Each cursor collects one pass of the source into its pool, so a one-shot
/// source produces a real pool only once.
#[derive(Clone)]
pub struct Arrange<S, R> {
    source: S,
    width: isize,
    rule: PhantomData<fn() -> R>,
}

/// Factory for [`Combinations`].
pub type Combination<S> = Arrange<S, CombinationRule>;
/// Factory for [`Permutations`].
pub type Permutation<S> = Arrange<S, PermutationRule>;
/// Factory for [`RepeatedCombinations`].
pub type RepeatedCombination<S> = Arrange<S, RepeatedCombinationRule>;
/// Factory for [`RepeatedPermutations`].
pub type RepeatedPermutation<S> = Arrange<S, RepeatedPermutationRule>;

impl<S: Sequence, R: SuccessorRule> Arrange<S, R> {
    /// Creates the generator. Width handling follows [`Arrangements::new`].
    pub const fn new(source: S, width: isize) -> Self {
        Self {
            source,
            width,
            rule: PhantomData,
        }
    }

    /// Returns the requested width.
    pub const fn width(&self) -> isize {
        self.width
    }
}

impl<S, R> Sequence for Arrange<S, R>
where
    S: Sequence,
    S::Item: Clone,
    R: SuccessorRule,
{
    type Item = Bucket<S::Item>;
    type Cursor = Arrangements<S::Item, R>;

    fn cursor(&self) -> Self::Cursor {
        Arrangements::new(self.source.cursor().collect(), self.width)
    }
}

impl<S: fmt::Debug, R: SuccessorRule> fmt::Debug for Arrange<S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrange")
            .field("rule", &R::NAME)
            .field("source", &self.source)
            .field("width", &self.width)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::one_shot;
    use crate::foundation::error::Error;

    fn all<R: SuccessorRule>(pool: &[i32], width: isize) -> Vec<Vec<i32>> {
        Arrangements::<i32, R>::new(pool.to_vec(), width).collect()
    }

    #[test]
    fn test_combinations() {
        assert_eq!(
            all::<CombinationRule>(&[1, 2, 3], 2),
            vec![vec![1, 2], vec![1, 3], vec![2, 3]]
        );
        assert_eq!(all::<CombinationRule>(&[1, 2, 3, 4], 4), vec![vec![1, 2, 3, 4]]);
        assert_eq!(all::<CombinationRule>(&[1, 2, 3, 4, 5], 3).len(), 10);
    }

    #[test]
    fn test_permutations() {
        assert_eq!(
            all::<PermutationRule>(&[1, 2, 3], 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![2, 1],
                vec![2, 3],
                vec![3, 1],
                vec![3, 2]
            ]
        );
        assert_eq!(
            all::<PermutationRule>(&[1, 2, 3], 3),
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1]
            ]
        );
        assert_eq!(all::<PermutationRule>(&[1, 2, 3, 4], 2).len(), 12);
    }

    #[test]
    fn test_repeated_combinations() {
        assert_eq!(
            all::<RepeatedCombinationRule>(&[1, 2, 3], 2),
            vec![
                vec![1, 1],
                vec![1, 2],
                vec![1, 3],
                vec![2, 2],
                vec![2, 3],
                vec![3, 3]
            ]
        );
        // Width may exceed the pool when repetition is allowed.
        assert_eq!(
            all::<RepeatedCombinationRule>(&[1, 2], 3),
            vec![vec![1, 1, 1], vec![1, 1, 2], vec![1, 2, 2], vec![2, 2, 2]]
        );
    }

    #[test]
    fn test_repeated_permutations() {
        assert_eq!(
            all::<RepeatedPermutationRule>(&[1, 2], 2),
            vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]]
        );
        assert_eq!(all::<RepeatedPermutationRule>(&[1, 2, 3], 3).len(), 27);
    }

    #[test]
    fn test_zero_width_yields_one_empty_bucket() {
        let empty: Vec<Vec<i32>> = vec![vec![]];
        assert_eq!(all::<CombinationRule>(&[1, 2], 0), empty);
        assert_eq!(all::<PermutationRule>(&[1, 2], 0), empty);
        assert_eq!(all::<RepeatedCombinationRule>(&[1, 2], 0), empty);
        assert_eq!(all::<RepeatedPermutationRule>(&[], 0), empty);
        assert_eq!(all::<CombinationRule>(&[], 0), empty);
    }

    #[test]
    fn test_degenerate_widths_yield_nothing() {
        assert!(all::<CombinationRule>(&[1, 2], -1).is_empty());
        assert!(all::<PermutationRule>(&[1, 2], -3).is_empty());
        assert!(all::<RepeatedPermutationRule>(&[1, 2], -1).is_empty());
        assert!(all::<CombinationRule>(&[1, 2], 3).is_empty());
        assert!(all::<PermutationRule>(&[1, 2], 3).is_empty());
        assert!(all::<RepeatedCombinationRule>(&[], 2).is_empty());
    }

    #[test]
    fn test_cursor_stays_exhausted() {
        let mut cursor = Combinations::new(vec![1, 2], 2);
        assert_eq!(cursor.next(), Some(vec![1, 2]));
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_factory_is_reiterable() {
        let data = [1, 2, 3];
        let pairs = Combination::new(&data[..], 2);
        assert_eq!(pairs.cursor().count(), 3);
        assert_eq!(pairs.cursor().count(), 3);

        let once = Permutation::new(one_shot(vec![1, 2]), 2);
        assert_eq!(once.cursor().count(), 2);
        // The second pass sees an empty pool.
        assert_eq!(once.cursor().count(), 0);
    }

    #[test]
    fn test_remove_is_unsupported() {
        let mut cursor = Permutations::new(vec![1, 2], 1);
        cursor.next();
        assert!(matches!(cursor.remove(), Err(Error::Unsupported { .. })));
    }
}
