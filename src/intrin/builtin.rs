//! Compiler built-in strategy.

use crate::field::runtime_assert_nonzero;
use crate::{ByteSwap, Word};

/// Rotates right by `amount` modulo the word width.
#[inline]
pub fn ror<T: Word>(value: T, amount: u32) -> T {
    value.rotate_right(amount)
}

/// Rotates left by `amount` modulo the word width.
#[inline]
pub fn rol<T: Word>(value: T, amount: u32) -> T {
    value.rotate_left(amount)
}

/// Reverses the byte order.
///
/// ```compile_fail
/// use light_bitops::intrin::builtin;
///
/// let _ = builtin::bswap(0x12u8);
/// ```
#[inline]
pub fn bswap<T: ByteSwap>(value: T) -> T {
    value.swap_bytes()
}

/// Counts leading zeros.
///
/// # Panics
/// Panics in debug builds if the value is zero.
#[inline]
pub fn clz<T: Word>(value: T) -> u32 {
    runtime_assert_nonzero(value);
    value.leading_zeros()
}

/// Counts trailing zeros.
///
/// # Panics
/// Panics in debug builds if the value is zero.
#[inline]
pub fn ctz<T: Word>(value: T) -> u32 {
    runtime_assert_nonzero(value);
    value.trailing_zeros()
}

/// Counts set bits.
#[inline]
pub fn popcnt<T: Word>(value: T) -> u32 {
    value.count_ones()
}
