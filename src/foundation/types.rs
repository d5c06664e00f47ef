//! Core type definitions for seqweave core.

/// One emitted, independently owned group of elements.
///
/// Buckets never share storage with each other or with their source, so a
/// caller mutating one yielded bucket can't affect any other.
pub type Bucket<T> = Vec<T>;

/// A bucket tagged with the key that grouped it.
pub type KeyedBucket<K, T> = (K, Bucket<T>);

/// A zipped row: the primary element followed by one slot per secondary
/// source, `None` marking an exhausted one.
pub type Row<T> = Vec<Option<T>>;

/// Types with a "next value" under their own total order.
///
/// `successor` returns `None` when no greater value exists, which ends any
/// range walking the type.
pub trait Successor: PartialOrd + Clone {
    /// Returns the value immediately after `self`.
    fn successor(&self) -> Option<Self>;
}

macro_rules! impl_successor_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Successor for $ty {
                #[inline]
                fn successor(&self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_successor_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Successor for char {
    fn successor(&self) -> Option<Self> {
        match *self {
            // skip the surrogate block
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(u32::from(c) + 1),
        }
    }
}
