//! Core traits defining the fundamental abstractions of seqweave core.
//!
//! A [`Sequence`] is a re-iterable factory: every call to
//! [`Sequence::cursor`] starts a fresh pass over the original source. A
//! cursor is an ordinary [`Iterator`]. The two meet in [`OneShot`], a factory
//! whose cursors all drain one shared iterator, so re-iterating it observes
//! the exhausted state.

use crate::foundation::error::{Error, Result};
use crate::foundation::pattern::Pattern;
use core::cell::RefCell;
use core::fmt;
use core::iter::{Cloned, FusedIterator};
use std::rc::Rc;

// ============================================================================
// Sequences
// ============================================================================

/// A re-iterable source of elements.
pub trait Sequence {
    /// The element type.
    type Item;

    /// The cursor type produced for each pass.
    type Cursor: Iterator<Item = Self::Item>;

    /// Starts a new pass over the sequence.
    fn cursor(&self) -> Self::Cursor;
}

impl<'a, T: Clone> Sequence for &'a [T] {
    type Item = T;
    type Cursor = Cloned<core::slice::Iter<'a, T>>;

    fn cursor(&self) -> Self::Cursor {
        self.iter().cloned()
    }
}

impl<'a, T: Clone> Sequence for &'a Vec<T> {
    type Item = T;
    type Cursor = Cloned<core::slice::Iter<'a, T>>;

    fn cursor(&self) -> Self::Cursor {
        self.iter().cloned()
    }
}

impl<'a, T: Clone, const N: usize> Sequence for &'a [T; N] {
    type Item = T;
    type Cursor = Cloned<core::slice::Iter<'a, T>>;

    fn cursor(&self) -> Self::Cursor {
        self.iter().cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor = std::vec::IntoIter<T>;

    fn cursor(&self) -> Self::Cursor {
        self.clone().into_iter()
    }
}

/// A sequence backed by a single-use iterator.
///
/// Cloning a `OneShot` shares the iterator, it doesn't duplicate it.
pub struct OneShot<I> {
    inner: Rc<RefCell<I>>,
}

impl<I> OneShot<I> {
    /// Wraps a single-use iterator.
    pub fn new(iter: I) -> Self {
        Self {
            inner: Rc::new(RefCell::new(iter)),
        }
    }
}

impl<I> Clone for OneShot<I> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<I> fmt::Debug for OneShot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneShot").finish_non_exhaustive()
    }
}

impl<I: Iterator> Sequence for OneShot<I> {
    type Item = I::Item;
    type Cursor = SharedCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        SharedCursor {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Cursor over the iterator shared by a [`OneShot`].
pub struct SharedCursor<I> {
    inner: Rc<RefCell<I>>,
}

impl<I: Iterator> Iterator for SharedCursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.borrow_mut().next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.borrow().size_hint()
    }
}

impl<I> fmt::Debug for SharedCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCursor").finish_non_exhaustive()
    }
}

/// Wraps a single-use iterator as a [`Sequence`].
pub fn one_shot<I: IntoIterator>(iter: I) -> OneShot<I::IntoIter> {
    OneShot::new(iter.into_iter())
}

// ============================================================================
// Removal
// ============================================================================

/// Cursors that can delete the element they last returned from the
/// underlying collection.
///
/// The default answers [`Error::Unsupported`]; combinators whose output is
/// synthesized rather than a view of their source keep that default.
pub trait Remove {
    /// Removes the element most recently returned by `next`.
    fn remove(&mut self) -> Result<()> {
        Err(Error::unsupported_remove(core::any::type_name::<Self>()))
    }
}

/// A removal-capable cursor over a borrowed `Vec`.
#[derive(Debug)]
pub struct VecCursor<'a, T> {
    vec: &'a mut Vec<T>,
    position: usize,
    last: Option<usize>,
}

impl<'a, T> VecCursor<'a, T> {
    /// Starts a cursor at the front of `vec`.
    pub fn new(vec: &'a mut Vec<T>) -> Self {
        Self {
            vec,
            position: 0,
            last: None,
        }
    }
}

impl<'a, T: Clone> Iterator for VecCursor<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.vec.get(self.position)?.clone();
        self.last = Some(self.position);
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vec.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<'a, T: Clone> ExactSizeIterator for VecCursor<'a, T> {}
impl<'a, T: Clone> FusedIterator for VecCursor<'a, T> {}

impl<'a, T> Remove for VecCursor<'a, T> {
    fn remove(&mut self) -> Result<()> {
        let index = self
            .last
            .take()
            .ok_or(Error::IllegalState("remove called before next or twice in a row"))?;
        self.vec.remove(index);
        self.position = index;
        Ok(())
    }
}

// ============================================================================
// Callbacks
// ============================================================================

/// A unary predicate over borrowed elements.
///
/// Implemented by every `FnMut(&T) -> bool` closure and by [`Pattern`],
/// which tests the element's string form.
pub trait Predicate<T: ?Sized> {
    /// Tests one element.
    fn test(&mut self, item: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

impl<T: fmt::Display + ?Sized> Predicate<T> for Pattern {
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self.matches(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sequence_is_reiterable() {
        let data = [1, 2, 3];
        let seq = &data[..];
        assert_eq!(seq.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_one_shot_observes_exhaustion() {
        let seq = one_shot(vec![1, 2, 3]);
        assert_eq!(seq.cursor().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(seq.cursor().count(), 0);
    }

    #[test]
    fn test_one_shot_cursors_share_state() {
        let seq = one_shot(1..=4);
        let mut first = seq.cursor();
        let mut second = seq.clone().cursor();
        assert_eq!(first.next(), Some(1));
        assert_eq!(second.next(), Some(2));
        assert_eq!(first.next(), Some(3));
    }

    #[test]
    fn test_vec_cursor_remove() {
        let mut data = vec!['a', 'b', 'c'];
        {
            let mut cursor = VecCursor::new(&mut data);
            assert!(matches!(cursor.remove(), Err(Error::IllegalState(_))));
            assert_eq!(cursor.next(), Some('a'));
            assert_eq!(cursor.next(), Some('b'));
            assert_eq!(cursor.remove(), Ok(()));
            assert!(matches!(cursor.remove(), Err(Error::IllegalState(_))));
            assert_eq!(cursor.next(), Some('c'));
            assert_eq!(cursor.next(), None);
        }
        assert_eq!(data, vec!['a', 'c']);
    }

    #[test]
    fn test_predicate_shapes() {
        let mut even = |x: &i32| x % 2 == 0;
        assert!(even.test(&4));
        let mut pattern = Pattern::new("^4").unwrap();
        assert!(Predicate::<i32>::test(&mut pattern, &42));
        assert!(!Predicate::<i32>::test(&mut pattern, &24));
    }
}
