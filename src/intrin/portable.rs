//! Portable strategy.
//!
//! Every operation widens the word to its zero-extended 64-bit pattern or
//! works on the unsigned pattern of the same width, so one formula serves
//! all widths.

use crate::field::runtime_assert_nonzero;
use crate::{ByteSwap, Word};

const DEBRUIJN: u64 = 0x03f7_9d71_b4cb_0a89;
const DEBRUIJN_INDEX: [u8; 64] = debruijn_index();

const fn debruijn_index() -> [u8; 64] {
    let mut table = [u8::MAX; 64];
    let mut bit = 0;
    while bit < 64 {
        let slot = ((1u64 << bit).wrapping_mul(DEBRUIJN) >> 58) as usize;
        assert!(table[slot] == u8::MAX, "DEBRUIJN is not a de Bruijn sequence");
        table[slot] = bit as u8;
        bit += 1;
    }
    table
}

/// Rotates right by `amount` modulo the word width.
///
/// Only the low `log2(T::BITS)` bits of `amount` are significant.
#[inline]
pub fn ror<T: Word>(value: T, amount: u32) -> T {
    let mask = T::BITS - 1;
    let amount = amount & mask;
    let bits = value.to_unsigned();
    T::from_unsigned(bits.wrapping_shr(amount) | bits.wrapping_shl(amount.wrapping_neg() & mask))
}

/// Rotates left by `amount` modulo the word width.
///
/// Only the low `log2(T::BITS)` bits of `amount` are significant.
#[inline]
pub fn rol<T: Word>(value: T, amount: u32) -> T {
    let mask = T::BITS - 1;
    let amount = amount & mask;
    let bits = value.to_unsigned();
    T::from_unsigned(bits.wrapping_shl(amount) | bits.wrapping_shr(amount.wrapping_neg() & mask))
}

/// Reverses the byte order with a mask ladder.
///
/// ```compile_fail
/// use light_bitops::intrin::portable;
///
/// let _ = portable::bswap(0x12u8);
/// ```
#[inline]
pub fn bswap<T: ByteSwap>(value: T) -> T {
    let mut x = value.to_bits();
    x = ((x & 0x00FF_00FF_00FF_00FF) << 8) | ((x >> 8) & 0x00FF_00FF_00FF_00FF);
    x = ((x & 0x0000_FFFF_0000_FFFF) << 16) | ((x >> 16) & 0x0000_FFFF_0000_FFFF);
    x = (x << 32) | (x >> 32);
    // the swapped bytes of a narrow word end up in the high part
    T::from_bits(x >> (64 - T::BITS))
}

/// Counts leading zeros by binary search.
///
/// # Panics
/// Panics in debug builds if the value is zero.
#[inline]
pub fn clz<T: Word>(value: T) -> u32 {
    runtime_assert_nonzero(value);
    let mut x = value.to_bits();
    let mut n = 0;
    if x & 0xFFFF_FFFF_0000_0000 == 0 {
        n += 32;
        x <<= 32;
    }
    if x & 0xFFFF_0000_0000_0000 == 0 {
        n += 16;
        x <<= 16;
    }
    if x & 0xFF00_0000_0000_0000 == 0 {
        n += 8;
        x <<= 8;
    }
    if x & 0xF000_0000_0000_0000 == 0 {
        n += 4;
        x <<= 4;
    }
    if x & 0xC000_0000_0000_0000 == 0 {
        n += 2;
        x <<= 2;
    }
    if x & 0x8000_0000_0000_0000 == 0 {
        n += 1;
    }
    n - (64 - T::BITS)
}

/// Counts trailing zeros with a De Bruijn multiply.
///
/// # Panics
/// Panics in debug builds if the value is zero.
#[inline]
pub fn ctz<T: Word>(value: T) -> u32 {
    runtime_assert_nonzero(value);
    let x = value.to_bits();
    let lowest = x & x.wrapping_neg();
    DEBRUIJN_INDEX[(lowest.wrapping_mul(DEBRUIJN) >> 58) as usize] as u32
}

/// Counts set bits with a SWAR reduction.
#[inline]
pub fn popcnt<T: Word>(value: T) -> u32 {
    let mut x = value.to_bits();
    x -= (x >> 1) & 0x5555_5555_5555_5555;
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x + (x >> 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    (x.wrapping_mul(0x0101_0101_0101_0101) >> 56) as u32
}
