//! Ranges driven by a successor function.
//!
//! The range owns only its bounds. The order comes from `PartialOrd` and the
//! stepping from either the [`Successor`] trait or a caller-supplied
//! function.

use crate::core::traits::{Remove, Sequence};
use crate::foundation::error::{Error, Result};
use crate::foundation::types::Successor;
use core::fmt;
use core::iter::FusedIterator;

/// The successor function used by [`SuccessorRange::new`].
pub type NaturalSuccessor<T> = fn(&T) -> Option<T>;

/// `start`, `successor(start)`, ... while the value is `<= end`.
///
/// Empty when `start > end`. A successor returning `None` also ends the
/// range.
#[derive(Clone)]
pub struct SuccessorRange<T, F> {
    start: T,
    end: T,
    successor: F,
}

impl<T: Successor> SuccessorRange<T, NaturalSuccessor<T>> {
    /// Builds an inclusive range stepping with [`Successor::successor`].
    pub fn new(start: T, end: T) -> Self {
        Self {
            start,
            end,
            successor: T::successor,
        }
    }
}

impl<T, F> SuccessorRange<T, F>
where
    T: PartialOrd + Clone,
    F: FnMut(&T) -> Option<T>,
{
    /// Builds an inclusive range with a custom successor.
    pub const fn with(start: T, end: T, successor: F) -> Self {
        Self {
            start,
            end,
            successor,
        }
    }

    /// Starts a builder; every part must be supplied before `build`.
    pub const fn builder() -> RangeBuilder<T, F> {
        RangeBuilder::new()
    }

    /// Returns the lower bound.
    pub const fn start(&self) -> &T {
        &self.start
    }

    /// Returns the inclusive upper bound.
    pub const fn end(&self) -> &T {
        &self.end
    }

    /// Returns whether the range yields nothing.
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl<T, F> Sequence for SuccessorRange<T, F>
where
    T: PartialOrd + Clone,
    F: FnMut(&T) -> Option<T> + Clone,
{
    type Item = T;
    type Cursor = SuccessorRangeIter<T, F>;

    fn cursor(&self) -> Self::Cursor {
        SuccessorRangeIter {
            next: Some(self.start.clone()),
            end: self.end.clone(),
            successor: self.successor.clone(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SuccessorRange<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessorRange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// Builds an inclusive range over a [`Successor`] type.
pub fn range<T: Successor>(start: T, end: T) -> SuccessorRange<T, NaturalSuccessor<T>> {
    SuccessorRange::new(start, end)
}

/// Cursor for [`SuccessorRange`].
#[derive(Clone)]
pub struct SuccessorRangeIter<T, F> {
    next: Option<T>,
    end: T,
    successor: F,
}

impl<T, F> Iterator for SuccessorRangeIter<T, F>
where
    T: PartialOrd,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if current > self.end {
            return None;
        }
        self.next = (self.successor)(&current);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.next {
            Some(value) if *value <= self.end => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<T: PartialOrd, F: FnMut(&T) -> Option<T>> FusedIterator for SuccessorRangeIter<T, F> {}

impl<T, F> Remove for SuccessorRangeIter<T, F> {}

impl<T: fmt::Debug, F> fmt::Debug for SuccessorRangeIter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuccessorRangeIter")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SuccessorRange`].
pub struct RangeBuilder<T, F> {
    start: Option<T>,
    end: Option<T>,
    successor: Option<F>,
}

impl<T, F> RangeBuilder<T, F>
where
    T: PartialOrd + Clone,
    F: FnMut(&T) -> Option<T>,
{
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
            successor: None,
        }
    }

    /// Sets the first value.
    #[must_use]
    pub fn start(mut self, start: T) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use]
    pub fn end(mut self, end: T) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the successor function.
    #[must_use]
    pub fn successor(mut self, successor: F) -> Self {
        self.successor = Some(successor);
        self
    }

    /// Builds the range, reporting the first missing part.
    pub fn build(self) -> Result<SuccessorRange<T, F>> {
        Ok(SuccessorRange {
            start: self.start.ok_or(Error::MissingArgument("start"))?,
            end: self.end.ok_or(Error::MissingArgument("end"))?,
            successor: self.successor.ok_or(Error::MissingArgument("successor"))?,
        })
    }
}

impl<T, F> Default for RangeBuilder<T, F>
where
    T: PartialOrd + Clone,
    F: FnMut(&T) -> Option<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for RangeBuilder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeBuilder")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("successor", &self.successor.is_some())
            .finish()
    }
}
