//! Bounding and filtering combinators.
//!
//! These are views over their source: they never synthesize elements, so
//! every cursor here forwards [`Remove::remove`] to the cursor it wraps.
//! The `*While` variants decide continuation through a [`Peeking`] cursor
//! and refuse removal while a look-ahead element is buffered.

use crate::core::traits::{Predicate, Remove, Sequence};
use crate::foundation::error::{non_negative, positive, Result};
use crate::foundation::pattern::Pattern;
use crate::foundation::peek::Peeking;
use core::fmt;
use core::iter::FusedIterator;

// ============================================================================
// Take / DropFirst
// ============================================================================

/// The first `n` elements of a sequence.
#[derive(Debug, Clone)]
pub struct Take<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> Take<S> {
    /// Creates the combinator. Negative counts are rejected.
    pub fn new(source: S, n: isize) -> Result<Self> {
        Ok(Self {
            source,
            n: non_negative(n, "take count")?,
        })
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Cursor = TakeIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeIter {
            iter: self.source.cursor(),
            remaining: self.n,
        }
    }
}

/// Cursor for [`Take`].
#[derive(Debug, Clone)]
pub struct TakeIter<I> {
    iter: I,
    remaining: usize,
}

impl<I: Iterator> TakeIter<I> {
    /// Wraps a cursor directly.
    pub fn new(iter: I, n: isize) -> Result<Self> {
        Ok(Self {
            iter,
            remaining: non_negative(n, "take count")?,
        })
    }
}

impl<I: Iterator> Iterator for TakeIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let item = self.iter.next();
        if item.is_none() {
            self.remaining = 0;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let upper = upper.map_or(self.remaining, |u| u.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for TakeIter<I> where I: FusedIterator {}

impl<I: Remove> Remove for TakeIter<I> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

/// Everything after the first `n` elements of a sequence.
#[derive(Debug, Clone)]
pub struct DropFirst<S> {
    source: S,
    n: usize,
}

impl<S: Sequence> DropFirst<S> {
    /// Creates the combinator. Negative counts are rejected.
    pub fn new(source: S, n: isize) -> Result<Self> {
        Ok(Self {
            source,
            n: non_negative(n, "drop count")?,
        })
    }
}

impl<S: Sequence> Sequence for DropFirst<S> {
    type Item = S::Item;
    type Cursor = DropFirstIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        DropFirstIter {
            iter: self.source.cursor(),
            pending: self.n,
        }
    }
}

/// Cursor for [`DropFirst`]. The skipped prefix is consumed lazily on the
/// first call to `next`.
#[derive(Debug, Clone)]
pub struct DropFirstIter<I> {
    iter: I,
    pending: usize,
}

impl<I: Iterator> DropFirstIter<I> {
    /// Wraps a cursor directly.
    pub fn new(iter: I, n: isize) -> Result<Self> {
        Ok(Self {
            iter,
            pending: non_negative(n, "drop count")?,
        })
    }
}

impl<I: Iterator> Iterator for DropFirstIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.iter.next().is_none() {
                self.pending = 0;
                return None;
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.pending),
            upper.map(|u| u.saturating_sub(self.pending)),
        )
    }
}

impl<I: Remove> Remove for DropFirstIter<I> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

// ============================================================================
// TakeWhile / DropWhile
// ============================================================================

/// The longest prefix whose elements all satisfy a predicate.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    source: S,
    pred: P,
}

impl<S, P> TakeWhile<S, P> {
    /// Creates the combinator.
    pub const fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = TakeWhileIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileIter::new(self.source.cursor(), self.pred.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for TakeWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeWhile").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`TakeWhile`].
///
/// The first failing element is peeked, never consumed.
pub struct TakeWhileIter<I: Iterator, P> {
    iter: Peeking<I>,
    pred: P,
    done: bool,
}

impl<I: Iterator, P: Predicate<I::Item>> TakeWhileIter<I, P> {
    /// Wraps a cursor directly.
    pub const fn new(iter: I, pred: P) -> Self {
        Self {
            iter: Peeking::new(iter),
            pred,
            done: false,
        }
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for TakeWhileIter<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let keep = match self.iter.peek_opt() {
            Some(item) => self.pred.test(item),
            None => false,
        };
        if keep {
            self.iter.next()
        } else {
            self.done = true;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I: Iterator + Remove, P> Remove for TakeWhileIter<I, P> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

/// Everything from the first element that fails a predicate onwards.
#[derive(Clone)]
pub struct DropWhile<S, P> {
    source: S,
    pred: P,
}

impl<S, P> DropWhile<S, P> {
    /// Creates the combinator.
    pub const fn new(source: S, pred: P) -> Self {
        Self { source, pred }
    }
}

impl<S, P> Sequence for DropWhile<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = DropWhileIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        DropWhileIter::new(self.source.cursor(), self.pred.clone())
    }
}

impl<S: fmt::Debug, P> fmt::Debug for DropWhile<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropWhile").field("source", &self.source).finish_non_exhaustive()
    }
}

/// Cursor for [`DropWhile`].
pub struct DropWhileIter<I: Iterator, P> {
    iter: Peeking<I>,
    pred: P,
    dropping: bool,
}

impl<I: Iterator, P: Predicate<I::Item>> DropWhileIter<I, P> {
    /// Wraps a cursor directly.
    pub const fn new(iter: I, pred: P) -> Self {
        Self {
            iter: Peeking::new(iter),
            pred,
            dropping: true,
        }
    }
}

impl<I: Iterator, P: Predicate<I::Item>> Iterator for DropWhileIter<I, P> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.dropping {
            self.dropping = false;
            loop {
                let skip = match self.iter.peek_opt() {
                    Some(item) => self.pred.test(item),
                    None => false,
                };
                if !skip {
                    break;
                }
                self.iter.next();
            }
        }
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        if self.dropping {
            (0, upper)
        } else {
            (lower, upper)
        }
    }
}

impl<I: Iterator + Remove, P> Remove for DropWhileIter<I, P> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

// ============================================================================
// Step
// ============================================================================

/// Every `n`-th element, starting with the first.
#[derive(Debug, Clone)]
pub struct Step<S> {
    source: S,
    step: usize,
}

impl<S: Sequence> Step<S> {
    /// Creates the combinator. Steps below one are rejected.
    pub fn new(source: S, step: isize) -> Result<Self> {
        Ok(Self {
            source,
            step: positive(step, "step")?,
        })
    }
}

impl<S: Sequence> Sequence for Step<S> {
    type Item = S::Item;
    type Cursor = StepIter<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        StepIter {
            iter: self.source.cursor(),
            step: self.step,
            started: false,
        }
    }
}

/// Cursor for [`Step`].
///
/// Unlike a stride that skips eagerly after each yield, the gap before an
/// element is consumed only when that element is requested.
#[derive(Debug, Clone)]
pub struct StepIter<I> {
    iter: I,
    step: usize,
    started: bool,
}

impl<I: Iterator> StepIter<I> {
    /// Wraps a cursor directly.
    pub fn new(iter: I, step: isize) -> Result<Self> {
        Ok(Self {
            iter,
            step: positive(step, "step")?,
            started: false,
        })
    }
}

impl<I: Iterator> Iterator for StepIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            for _ in 1..self.step {
                self.iter.next()?;
            }
        }
        self.started = true;
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let strided = |n: usize| {
            if self.started {
                n / self.step
            } else {
                n / self.step + usize::from(n % self.step != 0)
            }
        };
        (strided(lower), upper.map(strided))
    }
}

impl<I: Iterator + FusedIterator> FusedIterator for StepIter<I> {}

impl<I: Remove> Remove for StepIter<I> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

// ============================================================================
// FindAll / Reject
// ============================================================================

/// Elements that satisfy (`find_all`) or fail (`reject`) a predicate.
#[derive(Clone)]
pub struct Select<S, P> {
    source: S,
    pred: P,
    retain: bool,
}

impl<S, P> Select<S, P> {
    /// Keeps elements satisfying `pred`.
    pub const fn find_all(source: S, pred: P) -> Self {
        Self {
            source,
            pred,
            retain: true,
        }
    }

    /// Keeps elements failing `pred`.
    pub const fn reject(source: S, pred: P) -> Self {
        Self {
            source,
            pred,
            retain: false,
        }
    }
}

impl<S, P> Sequence for Select<S, P>
where
    S: Sequence,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type Cursor = SelectIter<S::Cursor, P>;

    fn cursor(&self) -> Self::Cursor {
        SelectIter {
            iter: self.source.cursor(),
            pred: self.pred.clone(),
            retain: self.retain,
        }
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Select<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("source", &self.source)
            .field("retain", &self.retain)
            .finish_non_exhaustive()
    }
}

/// Cursor for [`Select`].
pub struct SelectIter<I, P> {
    iter: I,
    pred: P,
    retain: bool,
}

impl<I, P> SelectIter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    /// Wraps a cursor directly; `retain` picks find-all over reject.
    pub const fn new(iter: I, pred: P, retain: bool) -> Self {
        Self { iter, pred, retain }
    }
}

impl<I, P> Iterator for SelectIter<I, P>
where
    I: Iterator,
    P: Predicate<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.pred.test(&item) == self.retain {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: Remove, P> Remove for SelectIter<I, P> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}

// ============================================================================
// Grep / GrepV
// ============================================================================

/// Elements whose string form matches (or, inverted, doesn't match) a
/// pattern, passed through a transform before emission.
#[derive(Clone)]
pub struct Grep<S, F> {
    source: S,
    pattern: Pattern,
    invert: bool,
    transform: F,
}

impl<S: Sequence> Grep<S, fn(S::Item) -> S::Item> {
    /// Emits matching elements unchanged.
    pub fn new(source: S, pattern: &str, invert: bool) -> Result<Self> {
        let identity: fn(S::Item) -> S::Item = core::convert::identity;
        Grep::with_transform(source, pattern, invert, identity)
    }
}

impl<S, F> Grep<S, F> {
    /// Emits matching elements through `transform`.
    pub fn with_transform(source: S, pattern: &str, invert: bool, transform: F) -> Result<Self> {
        Ok(Self {
            source,
            pattern: Pattern::new(pattern)?,
            invert,
            transform,
        })
    }

    /// Returns the compiled pattern.
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl<S, F, B> Sequence for Grep<S, F>
where
    S: Sequence,
    S::Item: fmt::Display,
    F: FnMut(S::Item) -> B + Clone,
{
    type Item = B;
    type Cursor = GrepIter<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        GrepIter {
            iter: self.source.cursor(),
            pattern: self.pattern.clone(),
            invert: self.invert,
            transform: self.transform.clone(),
        }
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Grep<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grep")
            .field("source", &self.source)
            .field("pattern", &self.pattern)
            .field("invert", &self.invert)
            .finish_non_exhaustive()
    }
}

/// Cursor for [`Grep`].
pub struct GrepIter<I, F> {
    iter: I,
    pattern: Pattern,
    invert: bool,
    transform: F,
}

impl<I, F, B> GrepIter<I, F>
where
    I: Iterator,
    I::Item: fmt::Display,
    F: FnMut(I::Item) -> B,
{
    /// Wraps a cursor directly.
    pub const fn new(iter: I, pattern: Pattern, invert: bool, transform: F) -> Self {
        Self {
            iter,
            pattern,
            invert,
            transform,
        }
    }
}

impl<I, F, B> Iterator for GrepIter<I, F>
where
    I: Iterator,
    I::Item: fmt::Display,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.iter.next()?;
            if self.pattern.matches(&item) != self.invert {
                return Some((self.transform)(item));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I: Remove, F> Remove for GrepIter<I, F> {
    fn remove(&mut self) -> Result<()> {
        self.iter.remove()
    }
}
