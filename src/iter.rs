use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

use crate::Word;
use crate::intrin::active;

/// Iterator over the indices of the set bits of a word, from least to most
/// significant.
///
/// Holds the not yet visited bits by value. Every step yields the index of
/// the lowest remaining set bit and clears it, so indices are strictly
/// increasing and each set bit is visited exactly once. Two iterators are
/// equal if their remaining bits are equal; the exhausted state is the
/// remaining value `0`, which is also the [`Default`].
///
/// Created by [`set_bits`], [`SetBits::new`] or
/// [`BitOps::set_bits`](crate::BitOps::set_bits).
///
/// # Examples
/// ```
/// use light_bitops::SetBits;
///
/// let mut iter = SetBits::new(0b1011_0100u8);
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.remaining(), 0b1011_0000);
/// assert_eq!(iter.collect::<Vec<_>>(), [4, 5, 7]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SetBits<T: Word> {
    remaining: T,
}

impl<T: Word> SetBits<T> {
    /// Creates an iterator over the set bits of `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { remaining: value }
    }

    /// Returns the bits that have not been visited yet.
    #[inline]
    pub fn remaining(&self) -> T {
        self.remaining
    }

    /// Returns `true` once every set bit has been yielded.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == T::ZERO
    }
}

/// Returns an iterator over the indices of the set bits of `value`.
///
/// # Examples
/// ```
/// use light_bitops::set_bits;
///
/// let indices: Vec<u32> = set_bits(180u32).collect();
/// assert_eq!(indices, [2, 4, 5, 7]);
/// assert_eq!(set_bits(0u64).next(), None);
/// ```
#[inline]
pub fn set_bits<T: Word>(value: T) -> SetBits<T> {
    SetBits::new(value)
}

impl<T: Word> Iterator for SetBits<T> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let idx = active::ctz(self.remaining);
        self.remaining = self.remaining & self.remaining.wrapping_sub(T::ONE); // unset LSB
        Some(idx)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = active::popcnt(self.remaining) as usize;
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len()
    }
}

impl<T: Word> ExactSizeIterator for SetBits<T> {}

impl<T: Word> FusedIterator for SetBits<T> {}

impl<T: Word> Debug for SetBits<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "SetBits({:#0width$b})", self.remaining, width = T::BITS as usize + 2)
    }
}
