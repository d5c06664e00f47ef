//! Structural recombination: zip, cycle, reverse, flatten, and the
//! index/transform views.

use crate::core::traits::{Remove, Sequence};
use crate::foundation::error::{Error, Result};
use crate::foundation::types::Row;
use core::fmt;
use core::iter::{Fuse, FusedIterator};
use tracing::{debug, trace};

// ============================================================================
// Zip
// ============================================================================

/// Aligns secondary sequences against a primary one.
///
/// The primary governs the length. A secondary that runs out contributes
/// `None` for every remaining row, so ragged inputs are padded rather than
/// truncated.
#[derive(Debug, Clone)]
pub struct Zip<S, O> {
    primary: S,
    others: Vec<O>,
}

impl<S, O> Zip<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    /// Creates the combinator.
    pub fn new(primary: S, others: Vec<O>) -> Self {
        Self { primary, others }
    }
}

impl<S, O> Sequence for Zip<S, O>
where
    S: Sequence,
    O: Sequence<Item = S::Item>,
{
    type Item = Row<S::Item>;
    type Cursor = ZipIter<S::Cursor, O::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipIter::new(
            self.primary.cursor(),
            self.others.iter().map(Sequence::cursor).collect(),
        )
    }
}

/// Cursor for [`Zip`].
#[derive(Debug, Clone)]
pub struct ZipIter<I, J> {
    primary: I,
    others: Vec<Fuse<J>>,
}

impl<I, J> ZipIter<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    /// Wraps cursors directly.
    pub fn new(primary: I, others: Vec<J>) -> Self {
        Self {
            primary,
            others: others.into_iter().map(Iterator::fuse).collect(),
        }
    }
}

impl<I, J> Iterator for ZipIter<I, J>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    type Item = Row<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.primary.next()?;
        let mut row = Vec::with_capacity(self.others.len() + 1);
        row.push(Some(head));
        row.extend(self.others.iter_mut().map(Iterator::next));
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.primary.size_hint()
    }
}

impl<I: FusedIterator, J> FusedIterator for ZipIter<I, J> where J: Iterator<Item = I::Item> {}

impl<I, J> Remove for ZipIter<I, J> {}

// ============================================================================
// Cycle
// ============================================================================

/// Repeats a sequence, forever or a fixed number of times.
///
/// The first pass is recorded and later passes replay the record, so a
/// one-shot source cycles just as well as a re-iterable one. Cycling an
/// empty source yields nothing whatever the count.
#[derive(Debug, Clone)]
pub struct Cycle<S> {
    source: S,
    rounds: Option<usize>,
}

impl<S: Sequence> Cycle<S> {
    /// Repeats without end; bound it downstream, e.g. with `take`.
    pub fn unbounded(source: S) -> Self {
        debug!("building unbounded cycle");
        Self {
            source,
            rounds: None,
        }
    }

    /// Repeats exactly `n` times; `n <= 0` yields nothing.
    pub fn times(source: S, n: isize) -> Self {
        Self {
            source,
            rounds: Some(usize::try_from(n).unwrap_or(0)),
        }
    }
}

impl<S> Sequence for Cycle<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;
    type Cursor = CycleIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        CycleIter::with_rounds(self.source.cursor(), self.rounds)
    }
}

/// Cursor for [`Cycle`].
#[derive(Debug, Clone)]
pub struct CycleIter<I: Iterator> {
    source: Option<I>,
    seen: Vec<I::Item>,
    position: usize,
    remaining: Option<usize>,
}

impl<I: Iterator> CycleIter<I> {
    /// Wraps a cursor directly; `rounds = None` cycles forever.
    pub const fn with_rounds(iter: I, rounds: Option<usize>) -> Self {
        Self {
            source: Some(iter),
            seen: Vec::new(),
            position: 0,
            remaining: rounds,
        }
    }

    fn finish_round(&mut self) {
        if let Some(rounds) = self.remaining.as_mut() {
            *rounds = rounds.saturating_sub(1);
        }
    }
}

impl<I> Iterator for CycleIter<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        if let Some(iter) = self.source.as_mut() {
            if let Some(item) = iter.next() {
                self.seen.push(item.clone());
                return Some(item);
            }
            self.source = None;
            self.finish_round();
        }

        if self.seen.is_empty() {
            return None;
        }
        if self.position == self.seen.len() {
            self.position = 0;
            self.finish_round();
        }
        if self.remaining == Some(0) {
            return None;
        }

        let item = self.seen[self.position].clone();
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(0) => (0, Some(0)),
            None if self.source.is_none() && !self.seen.is_empty() => (usize::MAX, None),
            _ => (0, None),
        }
    }
}

impl<I: Iterator> Remove for CycleIter<I> {}

// ============================================================================
// ReverseEach
// ============================================================================

/// The source in reverse order.
///
/// Each pass materializes the source on its first access. Re-iterating a
/// spent one-shot source therefore yields nothing.
#[derive(Debug, Clone)]
pub struct ReverseEach<S> {
    source: S,
}

impl<S: Sequence> ReverseEach<S> {
    /// Creates the combinator.
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for ReverseEach<S> {
    type Item = S::Item;
    type Cursor = ReverseEachIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ReverseEachIter::new(self.source.cursor())
    }
}

/// Cursor for [`ReverseEach`].
#[derive(Debug, Clone)]
pub struct ReverseEachIter<I: Iterator> {
    source: Option<I>,
    items: Vec<I::Item>,
}

impl<I: Iterator> ReverseEachIter<I> {
    /// Wraps a cursor directly. Nothing is read until the first `next`.
    pub const fn new(iter: I) -> Self {
        Self {
            source: Some(iter),
            items: Vec::new(),
        }
    }

    fn materialize(&mut self) {
        if let Some(iter) = self.source.take() {
            self.items = iter.collect();
            trace!(len = self.items.len(), "materialized reverse_each source");
        }
    }
}

impl<I: Iterator> Iterator for ReverseEachIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.materialize();
        self.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(iter) => iter.size_hint(),
            None => (self.items.len(), Some(self.items.len())),
        }
    }
}

impl<I: Iterator> FusedIterator for ReverseEachIter<I> {}

impl<I: Iterator> Remove for ReverseEachIter<I> {}

// ============================================================================
// FlatMap / Flatten
// ============================================================================

/// Replaces each element with zero or more elements, one level deep.
#[derive(Clone)]
pub struct FlatMap<S, F> {
    source: S,
    f: F,
}

impl<S, F> FlatMap<S, F> {
    /// Creates the combinator.
    pub const fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, U> Sequence for FlatMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U + Clone,
    U: IntoIterator,
{
    type Item = U::Item;
    type Cursor = FlatMapIter<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapIter::new(self.source.cursor(), self.f.clone())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for FlatMap<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`FlatMap`].
pub struct FlatMapIter<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    current: Option<U::IntoIter>,
}

impl<I, F, U> FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    /// Wraps a cursor directly.
    pub const fn new(iter: I, f: F) -> Self {
        Self {
            iter,
            f,
            current: None,
        }
    }
}

impl<I, F, U> Iterator for FlatMapIter<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.current = None;
            }
            let expanded = (self.f)(self.iter.next()?);
            self.current = Some(expanded.into_iter());
        }
    }
}

impl<I, F, U: IntoIterator> Remove for FlatMapIter<I, F, U> {}

/// Flattens a sequence of optional slots one level.
///
/// `Some(value)` is expanded through `f`, each produced element emitted as
/// `Some`; an absent slot passes through as a single `None` instead of being
/// expanded.
#[derive(Clone)]
pub struct Flatten<S, F> {
    source: S,
    f: F,
}

impl<S, F> Flatten<S, F> {
    /// Creates the combinator.
    pub const fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, T, F, U> Sequence for Flatten<S, F>
where
    S: Sequence<Item = Option<T>>,
    F: FnMut(T) -> U + Clone,
    U: IntoIterator,
{
    type Item = Option<U::Item>;
    type Cursor = FlattenIter<S::Cursor, F, U>;

    fn cursor(&self) -> Self::Cursor {
        FlattenIter::new(self.source.cursor(), self.f.clone())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Flatten<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`Flatten`].
pub struct FlattenIter<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    current: Option<U::IntoIter>,
}

impl<I, T, F, U> FlattenIter<I, F, U>
where
    I: Iterator<Item = Option<T>>,
    F: FnMut(T) -> U,
    U: IntoIterator,
{
    /// Wraps a cursor directly.
    pub const fn new(iter: I, f: F) -> Self {
        Self {
            iter,
            f,
            current: None,
        }
    }
}

impl<I, T, F, U> Iterator for FlattenIter<I, F, U>
where
    I: Iterator<Item = Option<T>>,
    F: FnMut(T) -> U,
    U: IntoIterator,
{
    type Item = Option<U::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next() {
                    return Some(Some(item));
                }
                self.current = None;
            }
            match self.iter.next()? {
                None => return Some(None),
                Some(value) => self.current = Some((self.f)(value).into_iter()),
            }
        }
    }
}

impl<I, F, U: IntoIterator> Remove for FlattenIter<I, F, U> {}

// ============================================================================
// Transform / EachWithIndex
// ============================================================================

/// A lazy, re-iterable map.
#[derive(Clone)]
pub struct Transform<S, F> {
    source: S,
    f: F,
}

impl<S, F> Transform<S, F> {
    /// Creates the combinator.
    pub const fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, B> Sequence for Transform<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = core::iter::Map<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        self.source.cursor().map(self.f.clone())
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Transform<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Pairs every element with its zero-based position.
#[derive(Debug, Clone)]
pub struct EachWithIndex<S> {
    source: S,
}

impl<S: Sequence> EachWithIndex<S> {
    /// Creates the combinator.
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: Sequence> Sequence for EachWithIndex<S> {
    type Item = (S::Item, usize);
    type Cursor = EachWithIndexIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        EachWithIndexIter::new(self.source.cursor())
    }
}

/// Cursor for [`EachWithIndex`].
#[derive(Debug, Clone)]
pub struct EachWithIndexIter<I> {
    iter: I,
    index: usize,
    yielded: bool,
}

impl<I: Iterator> EachWithIndexIter<I> {
    /// Wraps a cursor directly.
    pub const fn new(iter: I) -> Self {
        Self {
            iter,
            index: 0,
            yielded: false,
        }
    }
}

impl<I: Iterator> Iterator for EachWithIndexIter<I> {
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        self.yielded = true;
        Some((item, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for EachWithIndexIter<I> {}
impl<I: FusedIterator> FusedIterator for EachWithIndexIter<I> {}

impl<I: Remove> Remove for EachWithIndexIter<I> {
    fn remove(&mut self) -> Result<()> {
        // the inner cursor may have been advanced before it was wrapped
        if !self.yielded {
            return Err(Error::IllegalState("remove called before next or twice in a row"));
        }
        self.iter.remove()?;
        // later elements shift down one slot
        self.index -= 1;
        self.yielded = false;
        Ok(())
    }
}
