//! Cartesian product over a primary sequence and any number of others.

use crate::core::traits::{Remove, Sequence};
use crate::foundation::types::Bucket;
use crate::generators::counter::Counter;
use core::iter::FusedIterator;
use tracing::{debug, trace};

/// Every tuple taking one element from each input, rightmost input varying
/// fastest.
///
/// An empty input makes the product empty.
#[derive(Debug, Clone)]
pub struct Product<S, O> {
    primary: S,
    others: Vec<O>,
}

impl<S, O> Product<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    /// Creates the generator.
    pub fn new(primary: S, others: Vec<O>) -> Self {
        Self { primary, others }
    }
}

impl<S, O> Sequence for Product<S, O>
where
    S: Sequence,
    S::Item: Clone,
    O: Sequence<Item = S::Item>,
{
    type Item = Bucket<S::Item>;
    type Cursor = ProductIter<S::Item>;

    fn cursor(&self) -> Self::Cursor {
        let mut pools = Vec::with_capacity(self.others.len() + 1);
        pools.push(self.primary.cursor().collect());
        pools.extend(self.others.iter().map(|other| other.cursor().collect()));
        ProductIter::new(pools)
    }
}

/// Odometer cursor for [`Product`].
#[derive(Debug, Clone)]
pub struct ProductIter<T> {
    pools: Vec<Vec<T>>,
    counter: Counter,
}

impl<T> ProductIter<T> {
    /// Creates a cursor over materialized pools.
    ///
    /// With no pools at all the product is the single empty tuple.
    pub fn new(pools: Vec<Vec<T>>) -> Self {
        let counter = if pools.iter().any(Vec::is_empty) {
            Counter::exhausted()
        } else {
            Counter::new(vec![0; pools.len()], pools.iter().map(|pool| pool.len() - 1).collect())
        };

        debug!(
            generator = "product",
            pools = pools.len(),
            exhausted = !counter.has_more(),
            "built generator cursor"
        );

        Self { pools, counter }
    }

    /// Tuples left to yield, or `None` if the count overflows `usize`.
    fn remaining(&self) -> Option<usize> {
        if !self.counter.has_more() {
            return Some(0);
        }

        let mut total = 1_usize;
        let mut rank = 0_usize;
        for (pool, &index) in self.pools.iter().zip(self.counter.indices()) {
            total = total.checked_mul(pool.len())?;
            rank = rank.checked_mul(pool.len())?.checked_add(index)?;
        }
        Some(total - rank)
    }
}

fn odometer<T>(indices: &mut [usize], pools: &[Vec<T>]) {
    for (index, pool) in indices.iter_mut().zip(pools).rev() {
        *index += 1;
        if *index < pool.len() {
            return;
        }
        *index = 0;
    }
}

impl<T: Clone> Iterator for ProductIter<T> {
    type Item = Bucket<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pools = &self.pools;
        let tuple = self.counter.step(
            |indices| {
                indices
                    .iter()
                    .zip(pools)
                    .map(|(&i, pool)| pool[i].clone())
                    .collect()
            },
            |indices| odometer(indices, pools),
        )?;

        if !self.counter.has_more() {
            trace!(generator = "product", "reached end sentinel");
        }
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for ProductIter<T> {}

impl<T> Remove for ProductIter<T> {}
