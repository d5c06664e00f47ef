//! Grouping combinators.
//!
//! All of them share the same edge behavior: an empty source yields no
//! buckets, a single element yields one singleton bucket, and the final
//! (possibly short) bucket is always emitted once the source runs dry.
//! Group boundaries are found through one element of look-ahead, so the
//! source is advanced only as far as needed to close the current bucket.

use crate::core::traits::{Predicate, Remove, Sequence};
use crate::foundation::peek::Peeking;
use crate::foundation::types::{Bucket, KeyedBucket};
use core::fmt;
use core::marker::PhantomData;

// ============================================================================
// Chunk
// ============================================================================

/// Runs of consecutive elements whose keys compare equal.
pub struct Chunk<S, F, K> {
    source: S,
    key: F,
    _key: PhantomData<fn() -> K>,
}

impl<S, F, K> Chunk<S, F, K> {
    /// Creates the combinator.
    pub const fn new(source: S, key: F) -> Self {
        Self {
            source,
            key,
            _key: PhantomData,
        }
    }
}

impl<S: Clone, F: Clone, K> Clone for Chunk<S, F, K> {
    fn clone(&self) -> Self {
        Self::new(self.source.clone(), self.key.clone())
    }
}

impl<S, F, K> Sequence for Chunk<S, F, K>
where
    S: Sequence,
    F: FnMut(&S::Item) -> K + Clone,
    K: PartialEq,
{
    type Item = KeyedBucket<K, S::Item>;
    type Cursor = ChunkIter<S::Cursor, F, K>;

    fn cursor(&self) -> Self::Cursor {
        ChunkIter::new(self.source.cursor(), self.key.clone())
    }
}

impl<S: fmt::Debug, F, K> fmt::Debug for Chunk<S, F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chunk").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`Chunk`].
///
/// The key computed for the element that closed a run is kept and reused as
/// the key of the next run, so the key function runs once per element.
pub struct ChunkIter<I: Iterator, F, K> {
    iter: Peeking<I>,
    key: F,
    next_key: Option<K>,
}

impl<I, F, K> ChunkIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    /// Wraps a cursor directly.
    pub const fn new(iter: I, key: F) -> Self {
        Self {
            iter: Peeking::new(iter),
            key,
            next_key: None,
        }
    }
}

impl<I, F, K> Iterator for ChunkIter<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = KeyedBucket<K, I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let key = match self.next_key.take() {
            Some(key) => key,
            None => (self.key)(&first),
        };
        let mut bucket = vec![first];

        loop {
            let candidate = match self.iter.peek_opt() {
                Some(item) => (self.key)(item),
                None => break,
            };
            if candidate != key {
                self.next_key = Some(candidate);
                break;
            }
            match self.iter.next() {
                Some(item) => bucket.push(item),
                None => break,
            }
        }

        Some((key, bucket))
    }
}

impl<I: Iterator, F, K> Remove for ChunkIter<I, F, K> {}

// ============================================================================
// ChunkWhile / SliceWhen
// ============================================================================

/// Runs split by an adjacency predicate over consecutive raw elements.
///
/// `chunk_while` keeps extending a run while `pred(prev, next)` holds;
/// `slice_when` is its dual and splits exactly where `pred` holds.
#[derive(Clone)]
pub struct Adjacent<S, P> {
    source: S,
    pred: P,
    split_when: bool,
}

/// Runs that continue while the adjacency predicate holds.
pub type ChunkWhile<S, P> = Adjacent<S, P>;

/// Runs that end where the adjacency predicate holds.
pub type SliceWhen<S, P> = Adjacent<S, P>;

impl<S, P> Adjacent<S, P> {
    /// Groups while `pred(prev, next)` is true.
    pub const fn chunk_while(source: S, pred: P) -> Self {
        Self {
            source,
            pred,
            split_when: false,
        }
    }

    /// Splits wherever `pred(prev, next)` is true.
    pub const fn slice_when(source: S, pred: P) -> Self {
        Self {
            source,
            pred,
            split_when: true,
        }
    }
}

impl<S, P> Sequence for Adjacent<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item, &S::Item) -> bool + Clone,
{
    type Item = Bucket<S::Item>;
    type Cursor = AdjacentIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        AdjacentIter {
            iter: Peeking::new(self.source.cursor()),
            pred: self.pred.clone(),
            split_when: self.split_when,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Adjacent<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adjacent")
            .field("source", &self.source)
            .field("split_when", &self.split_when)
            .finish_non_exhaustive()
    }
}

/// Cursor for [`Adjacent`].
pub struct AdjacentIter<I: Iterator, P> {
    iter: Peeking<I>,
    pred: P,
    split_when: bool,
}

impl<I, P> AdjacentIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    /// Wraps a cursor directly, grouping like `chunk_while`.
    pub const fn chunk_while(iter: I, pred: P) -> Self {
        Self {
            iter: Peeking::new(iter),
            pred,
            split_when: false,
        }
    }

    /// Wraps a cursor directly, grouping like `slice_when`.
    pub const fn slice_when(iter: I, pred: P) -> Self {
        Self {
            iter: Peeking::new(iter),
            pred,
            split_when: true,
        }
    }
}

impl<I, P> Iterator for AdjacentIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Bucket<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let mut bucket = vec![first];

        loop {
            let joins = match (bucket.last(), self.iter.peek_opt()) {
                (Some(prev), Some(next)) => (self.pred)(prev, next) != self.split_when,
                _ => false,
            };
            if !joins {
                break;
            }
            match self.iter.next() {
                Some(item) => bucket.push(item),
                None => break,
            }
        }

        Some(bucket)
    }
}

impl<I: Iterator, P> Remove for AdjacentIter<I, P> {}

// ============================================================================
// SliceBefore / SliceAfter
// ============================================================================

/// Buckets that start at every element matching a trigger.
///
/// The first element always opens the first bucket, trigger or not.
#[derive(Clone)]
pub struct SliceBefore<S, P> {
    source: S,
    trigger: P,
}

impl<S, P> SliceBefore<S, P> {
    /// Creates the combinator; `trigger` is a closure or a
    /// [`Pattern`](crate::foundation::pattern::Pattern).
    pub const fn new(source: S, trigger: P) -> Self {
        Self { source, trigger }
    }
}

impl<S, P> Sequence for SliceBefore<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = Bucket<S::Item>;
    type Cursor = SliceBeforeIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SliceBeforeIter::new(self.source.cursor(), self.trigger.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for SliceBefore<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceBefore").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`SliceBefore`].
pub struct SliceBeforeIter<I: Iterator, P> {
    iter: Peeking<I>,
    trigger: P,
}

impl<I: Iterator, P: Predicate<I::Item>> SliceBeforeIter<I, P> {
    /// Wraps a cursor directly.
    pub const fn new(iter: I, trigger: P) -> Self {
        Self {
            iter: Peeking::new(iter),
            trigger,
        }
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for SliceBeforeIter<I, P> {
    type Item = Bucket<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;
        let mut bucket = vec![first];

        loop {
            let opens_next = match self.iter.peek_opt() {
                Some(item) => self.trigger.test(item),
                None => break,
            };
            if opens_next {
                break;
            }
            match self.iter.next() {
                Some(item) => bucket.push(item),
                None => break,
            }
        }

        Some(bucket)
    }
}

impl<I: Iterator, P> Remove for SliceBeforeIter<I, P> {}

/// Buckets that end at every element matching a trigger.
#[derive(Clone)]
pub struct SliceAfter<S, P> {
    source: S,
    trigger: P,
}

impl<S, P> SliceAfter<S, P> {
    /// Creates the combinator; `trigger` is a closure or a
    /// [`Pattern`](crate::foundation::pattern::Pattern).
    pub const fn new(source: S, trigger: P) -> Self {
        Self { source, trigger }
    }
}

impl<S, P> Sequence for SliceAfter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = Bucket<S::Item>;
    type Cursor = SliceAfterIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SliceAfterIter::new(self.source.cursor(), self.trigger.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for SliceAfter<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceAfter").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`SliceAfter`].
///
/// A bucket closes right after its triggering element, so no look-ahead is
/// needed.
pub struct SliceAfterIter<I, P> {
    iter: I,
    trigger: P,
}

impl<I: Iterator, P: Predicate<I::Item>> SliceAfterIter<I, P> {
    /// Wraps a cursor directly.
    pub const fn new(iter: I, trigger: P) -> Self {
        Self { iter, trigger }
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for SliceAfterIter<I, P> {
    type Item = Bucket<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut bucket = Vec::new();

        for item in self.iter.by_ref() {
            let closes = self.trigger.test(&item);
            bucket.push(item);
            if closes {
                return Some(bucket);
            }
        }

        if bucket.is_empty() {
            None
        } else {
            Some(bucket)
        }
    }
}

impl<I, P> Remove for SliceAfterIter<I, P> {}
