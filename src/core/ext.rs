//! Method-style access to every combinator and generator.
//!
//! Each method consumes the receiver and returns a re-iterable factory, so
//! chains read left to right. Borrowed sources (`&[T]`, `&Vec<T>`) stay
//! usable after the chain is built.

use crate::combinators::bounding::{DropFirst, DropWhile, Grep, Select, Step, Take, TakeWhile};
use crate::combinators::grouping::{Adjacent, Chunk, ChunkWhile, SliceAfter, SliceBefore, SliceWhen};
use crate::combinators::structural::{Cycle, EachWithIndex, FlatMap, Flatten, ReverseEach, Transform, Zip};
use crate::combinators::windowing::{EachCons, EachSlice};
use crate::core::traits::{one_shot, OneShot, Sequence};
use crate::foundation::error::Result;
use crate::foundation::pattern::Pattern;
use crate::foundation::peek::Peeking;
use crate::generators::arrangement::{Combination, Permutation, RepeatedCombination, RepeatedPermutation};
use crate::generators::product::Product;
use core::fmt::Display;

/// Identity transform used by the plain `grep` forms.
pub type Unchanged<T> = fn(T) -> T;

/// Extension methods for [`Sequence`].
pub trait SequenceExt: Sequence + Sized {
    /// Collects one pass into a vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.cursor().collect()
    }

    /// Opens a cursor with one-element lookahead.
    fn peeking(&self) -> Peeking<Self::Cursor> {
        Peeking::new(self.cursor())
    }

    /// The first `n` elements. Negative `n` is rejected.
    fn take(self, n: isize) -> Result<Take<Self>> {
        Take::new(self, n)
    }

    /// Everything after the first `n` elements. Negative `n` is rejected.
    fn drop_first(self, n: isize) -> Result<DropFirst<Self>> {
        DropFirst::new(self, n)
    }

    /// The longest prefix satisfying `pred`.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, pred)
    }

    /// Everything from the first element failing `pred` onward.
    fn drop_while<P>(self, pred: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        DropWhile::new(self, pred)
    }

    /// Every `n`th element starting with the first.
    fn step(self, n: isize) -> Result<Step<Self>> {
        Step::new(self, n)
    }

    /// Elements satisfying `pred`.
    fn find_all<P>(self, pred: P) -> Select<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Select::find_all(self, pred)
    }

    /// Elements failing `pred`.
    fn reject<P>(self, pred: P) -> Select<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Select::reject(self, pred)
    }

    /// Elements whose string form matches `pattern`.
    fn grep(self, pattern: &str) -> Result<Grep<Self, Unchanged<Self::Item>>>
    where
        Self::Item: Display,
    {
        Grep::new(self, pattern, false)
    }

    /// Elements whose string form doesn't match `pattern`.
    fn grep_v(self, pattern: &str) -> Result<Grep<Self, Unchanged<Self::Item>>>
    where
        Self::Item: Display,
    {
        Grep::new(self, pattern, true)
    }

    /// Matching elements, each passed through `f`.
    fn grep_map<F, B>(self, pattern: &str, f: F) -> Result<Grep<Self, F>>
    where
        Self::Item: Display,
        F: FnMut(Self::Item) -> B,
    {
        Grep::with_transform(self, pattern, false, f)
    }

    /// Non-matching elements, each passed through `f`.
    fn grep_v_map<F, B>(self, pattern: &str, f: F) -> Result<Grep<Self, F>>
    where
        Self::Item: Display,
        F: FnMut(Self::Item) -> B,
    {
        Grep::with_transform(self, pattern, true, f)
    }

    /// Overlapping windows of `n` elements.
    fn each_cons(self, n: isize) -> Result<EachCons<Self>> {
        EachCons::new(self, n)
    }

    /// Consecutive buckets of `n` elements.
    fn each_slice(self, n: isize) -> Result<EachSlice<Self>> {
        EachSlice::new(self, n)
    }

    /// Runs of elements sharing a key, emitted as `(key, bucket)`.
    fn chunk<F, K>(self, key: F) -> Chunk<Self, F, K>
    where
        F: FnMut(&Self::Item) -> K,
        K: PartialEq,
    {
        Chunk::new(self, key)
    }

    /// Runs where `pred(prev, next)` holds between neighbors.
    fn chunk_while<P>(self, pred: P) -> ChunkWhile<Self, P>
    where
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Adjacent::chunk_while(self, pred)
    }

    /// Runs split wherever `pred(prev, next)` holds.
    fn slice_when<P>(self, pred: P) -> SliceWhen<Self, P>
    where
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        Adjacent::slice_when(self, pred)
    }

    /// Buckets opened by every element satisfying `trigger`.
    fn slice_before<P>(self, trigger: P) -> SliceBefore<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SliceBefore::new(self, trigger)
    }

    /// Buckets opened by every element matching `pattern`.
    fn slice_before_pattern(self, pattern: &str) -> Result<SliceBefore<Self, Pattern>>
    where
        Self::Item: Display,
    {
        Ok(SliceBefore::new(self, Pattern::new(pattern)?))
    }

    /// Buckets closed by every element satisfying `trigger`.
    fn slice_after<P>(self, trigger: P) -> SliceAfter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SliceAfter::new(self, trigger)
    }

    /// Buckets closed by every element matching `pattern`.
    fn slice_after_pattern(self, pattern: &str) -> Result<SliceAfter<Self, Pattern>>
    where
        Self::Item: Display,
    {
        Ok(SliceAfter::new(self, Pattern::new(pattern)?))
    }

    /// Rows aligning `others` against this sequence, padded with `None`.
    fn zip<O>(self, others: Vec<O>) -> Zip<Self, O>
    where
        O: Sequence<Item = Self::Item>,
    {
        Zip::new(self, others)
    }

    /// Repeats forever.
    fn cycle(self) -> Cycle<Self> {
        Cycle::unbounded(self)
    }

    /// Repeats `n` times; `n <= 0` yields nothing.
    fn cycle_times(self, n: isize) -> Cycle<Self> {
        Cycle::times(self, n)
    }

    /// Yields the elements last to first.
    fn reverse_each(self) -> ReverseEach<Self> {
        ReverseEach::new(self)
    }

    /// Expands every element through `f`.
    fn flat_map<F, U>(self, f: F) -> FlatMap<Self, F>
    where
        F: FnMut(Self::Item) -> U,
        U: IntoIterator,
    {
        FlatMap::new(self, f)
    }

    /// Expands present slots through `f`; absent slots pass through.
    fn flatten<T, F, U>(self, f: F) -> Flatten<Self, F>
    where
        Self: Sequence<Item = Option<T>>,
        F: FnMut(T) -> U,
        U: IntoIterator,
    {
        Flatten::new(self, f)
    }

    /// Maps every element through `f`.
    fn transform<F, B>(self, f: F) -> Transform<Self, F>
    where
        F: FnMut(Self::Item) -> B,
    {
        Transform::new(self, f)
    }

    /// Pairs every element with its position.
    fn each_with_index(self) -> EachWithIndex<Self> {
        EachWithIndex::new(self)
    }

    /// Strictly increasing selections of `n` elements.
    fn combination(self, n: isize) -> Combination<Self> {
        Combination::new(self, n)
    }

    /// Ordered selections of `n` distinct elements.
    fn permutation(self, n: isize) -> Permutation<Self> {
        Permutation::new(self, n)
    }

    /// Non-decreasing selections of `n` elements with repetition.
    fn repeated_combination(self, n: isize) -> RepeatedCombination<Self> {
        RepeatedCombination::new(self, n)
    }

    /// Every `n`-tuple over the elements.
    fn repeated_permutation(self, n: isize) -> RepeatedPermutation<Self> {
        RepeatedPermutation::new(self, n)
    }

    /// Cartesian product with `others`.
    fn product<O>(self, others: Vec<O>) -> Product<Self, O>
    where
        O: Sequence<Item = Self::Item>,
    {
        Product::new(self, others)
    }
}

impl<S: Sequence> SequenceExt for S {}

/// Extension methods for plain cursors.
pub trait CursorExt: Iterator + Sized {
    /// Adds one-element lookahead.
    fn peeking(self) -> Peeking<Self> {
        Peeking::new(self)
    }

    /// Wraps the cursor as a single-use [`Sequence`] so it can feed
    /// combinators. Later passes observe the exhausted cursor.
    fn one_shot(self) -> OneShot<Self> {
        one_shot(self)
    }
}

impl<I: Iterator> CursorExt for I {}
