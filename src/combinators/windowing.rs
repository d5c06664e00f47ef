//! Window combinators: sliding (`each_cons`) and partitioning
//! (`each_slice`).

use crate::core::traits::{Remove, Sequence};
use crate::foundation::error::{positive, Result};
use crate::foundation::types::Bucket;
use core::iter::FusedIterator;
use std::collections::VecDeque;

// ============================================================================
// EachCons
// ============================================================================

/// Overlapping windows of exactly `n` consecutive elements.
///
/// A source of length `L >= n` yields `L - n + 1` windows; a shorter source
/// yields none.
#[derive(Debug, Clone)]
pub struct EachCons<S> {
    source: S,
    size: usize,
}

impl<S: Sequence> EachCons<S> {
    /// Creates the combinator. Window sizes below one are rejected.
    pub fn new(source: S, size: isize) -> Result<Self> {
        Ok(Self {
            source,
            size: positive(size, "window size")?,
        })
    }

    /// Returns the window size.
    pub const fn window_size(&self) -> usize {
        self.size
    }
}

impl<S> Sequence for EachCons<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Bucket<S::Item>;
    type Cursor = EachConsIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        EachConsIter::with_size(self.source.cursor(), self.size)
    }
}

/// Cursor for [`EachCons`].
///
/// Holds the `n` most recent elements. Each call emits a copy of the window,
/// then drops the oldest element and appends the next one from the source.
#[derive(Debug, Clone)]
pub struct EachConsIter<I: Iterator> {
    iter: I,
    size: usize,
    window: VecDeque<I::Item>,
    primed: bool,
}

impl<I: Iterator> EachConsIter<I> {
    /// Wraps a cursor directly.
    pub fn new(iter: I, size: isize) -> Result<Self> {
        Ok(Self::with_size(iter, positive(size, "window size")?))
    }

    fn with_size(iter: I, size: usize) -> Self {
        Self {
            iter,
            size,
            window: VecDeque::with_capacity(size),
            primed: false,
        }
    }

    fn prime(&mut self) {
        self.primed = true;
        while self.window.len() < self.size {
            match self.iter.next() {
                Some(item) => self.window.push_back(item),
                None => break,
            }
        }
    }
}

impl<I> Iterator for EachConsIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Bucket<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.prime();
        }
        if self.window.len() < self.size {
            return None;
        }

        let bucket: Bucket<I::Item> = self.window.iter().cloned().collect();

        // Slide
        self.window.pop_front();
        if let Some(item) = self.iter.next() {
            self.window.push_back(item);
        }

        Some(bucket)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.primed {
            if self.window.len() < self.size {
                return (0, Some(0));
            }
            return (lower.saturating_add(1), upper.and_then(|u| u.checked_add(1)));
        }

        let windows = |n: usize| {
            if n < self.size {
                0
            } else {
                n - self.size + 1
            }
        };
        (windows(lower), upper.map(windows))
    }
}

impl<I> FusedIterator for EachConsIter<I>
where
    I: FusedIterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Remove for EachConsIter<I> {}

// ============================================================================
// EachSlice
// ============================================================================

/// Consecutive, non-overlapping buckets of `n` elements; the last may be
/// shorter.
#[derive(Debug, Clone)]
pub struct EachSlice<S> {
    source: S,
    size: usize,
}

impl<S: Sequence> EachSlice<S> {
    /// Creates the combinator. Slice sizes below one are rejected.
    pub fn new(source: S, size: isize) -> Result<Self> {
        Ok(Self {
            source,
            size: positive(size, "slice size")?,
        })
    }

    /// Returns the slice size.
    pub const fn slice_size(&self) -> usize {
        self.size
    }
}

impl<S: Sequence> Sequence for EachSlice<S> {
    type Item = Bucket<S::Item>;
    type Cursor = EachSliceIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        EachSliceIter {
            iter: self.source.cursor(),
            size: self.size,
        }
    }
}

/// Cursor for [`EachSlice`].
#[derive(Debug, Clone)]
pub struct EachSliceIter<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> EachSliceIter<I> {
    /// Wraps a cursor directly.
    pub fn new(iter: I, size: isize) -> Result<Self> {
        Ok(Self {
            iter,
            size: positive(size, "slice size")?,
        })
    }
}

impl<I: Iterator> Iterator for EachSliceIter<I> {
    type Item = Bucket<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let bucket: Bucket<_> = self.iter.by_ref().take(self.size).collect();

        if bucket.is_empty() {
            None
        } else {
            Some(bucket)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();

        // rounded up without `n + size - 1`, which overflows on unbounded sources
        let slices = |n: usize| n / self.size + usize::from(n % self.size != 0);

        (slices(lower), upper.map(slices))
    }
}

impl<I: FusedIterator> FusedIterator for EachSliceIter<I> {}

impl<I> Remove for EachSliceIter<I> {}
