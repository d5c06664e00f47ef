//! One-element look-ahead over any cursor.
//!
//! Every combinator that has to decide whether the *next* element belongs to
//! the current group (or passes a predicate) before consuming it is built on
//! [`Peeking`].

use crate::core::traits::Remove;
use crate::foundation::error::{Error, Result};
use core::iter::FusedIterator;

/// A cursor that buffers at most one look-ahead element.
///
/// `peeked` is `None` when nothing is buffered and `Some(slot)` once the
/// source has been asked for its next element; `Some(None)` records that the
/// source reported exhaustion.
#[derive(Debug, Clone)]
pub struct Peeking<I: Iterator> {
    iter: I,
    peeked: Option<Option<I::Item>>,
}

impl<I: Iterator> Peeking<I> {
    /// Wraps a source cursor.
    pub const fn new(iter: I) -> Self {
        Self { iter, peeked: None }
    }

    /// Returns whether another element is available.
    pub fn has_next(&mut self) -> bool {
        self.peek_opt().is_some()
    }

    /// Returns the next element without consuming it.
    pub fn peek_opt(&mut self) -> Option<&I::Item> {
        let iter = &mut self.iter;
        self.peeked.get_or_insert_with(|| iter.next()).as_ref()
    }

    /// Returns the next element without consuming it, failing when the
    /// cursor is exhausted.
    pub fn peek(&mut self) -> Result<&I::Item> {
        self.peek_opt().ok_or(Error::Exhausted)
    }

    /// Consumes the next element, failing when the cursor is exhausted.
    pub fn next_item(&mut self) -> Result<I::Item> {
        self.next().ok_or(Error::Exhausted)
    }

    /// Consumes the next element only if it satisfies `pred`.
    pub fn next_if(&mut self, pred: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.next() {
            Some(item) if pred(&item) => Some(item),
            other => {
                self.peeked = Some(other);
                None
            }
        }
    }

    /// Returns whether a look-ahead slot is currently buffered.
    pub const fn is_buffered(&self) -> bool {
        self.peeked.is_some()
    }
}

impl<I: Iterator> Iterator for Peeking<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(slot) => slot,
            None => self.iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = match self.peeked {
            Some(None) => return (0, Some(0)),
            Some(Some(_)) => 1,
            None => 0,
        };
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|u| u.checked_add(buffered)),
        )
    }
}

impl<I: FusedIterator> FusedIterator for Peeking<I> {}

impl<I: Iterator + Remove> Remove for Peeking<I> {
    fn remove(&mut self) -> Result<()> {
        if self.peeked.is_some() {
            return Err(Error::IllegalState("cannot remove while a peeked element is buffered"));
        }
        self.iter.remove()
    }
}
