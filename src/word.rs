use core::fmt::{Binary, Debug, LowerHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width machine word: one of `u8`, `u16`, `u32`, `u64`, `i8`,
/// `i16`, `i32` or `i64`.
///
/// The trait is sealed, so every generic operation in this crate is
/// restricted to this closed set of widths. Any other type is rejected at
/// compile time:
///
/// ```compile_fail
/// use light_bitops::ones;
///
/// let _ = ones::<f32>(3);
/// ```
///
/// ```compile_fail
/// use light_bitops::ones;
///
/// let _ = ones::<u128>(3);
/// ```
///
/// The `rotate_*`, `swap_bytes`, `*_zeros` and `count_ones` methods forward
/// to the compiler built-ins of the primitive type and back the
/// [`builtin`](crate::intrin::builtin) strategy. Prefer the contract-checked
/// methods of [`BitOps`](crate::BitOps).
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Binary
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Number of bits in the word.
    const BITS: u32;
    /// Number of bytes in the word.
    const BYTES: usize;
    /// The value with no bit set.
    const ZERO: Self;
    /// The value with only bit 0 set.
    const ONE: Self;
    /// The value with every bit set.
    const ALL_ONES: Self;

    /// The unsigned word of the same width.
    type Unsigned: Word;
    /// The signed word of the same width.
    type Signed: Word;

    /// Reinterprets the bit pattern as the unsigned word of the same width.
    fn to_unsigned(self) -> Self::Unsigned;
    /// Reinterprets an unsigned bit pattern of the same width as `Self`.
    fn from_unsigned(bits: Self::Unsigned) -> Self;
    /// Reinterprets the bit pattern as the signed word of the same width.
    fn to_signed(self) -> Self::Signed;
    /// Reinterprets a signed bit pattern of the same width as `Self`.
    fn from_signed(bits: Self::Signed) -> Self;
    /// Returns the bit pattern zero-extended to 64 bits.
    fn to_bits(self) -> u64;
    /// Truncates a 64-bit pattern to the width of `Self`.
    fn from_bits(bits: u64) -> Self;

    /// Shifts left, masking `amount` to the word width.
    fn wrapping_shl(self, amount: u32) -> Self;
    /// Shifts right, masking `amount` to the word width. Arithmetic for
    /// signed words, logical for unsigned ones.
    fn wrapping_shr(self, amount: u32) -> Self;
    /// Subtracts with two's complement wrap-around.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Built-in left rotation.
    fn rotate_left(self, amount: u32) -> Self;
    /// Built-in right rotation.
    fn rotate_right(self, amount: u32) -> Self;
    /// Built-in byte order reversal.
    fn swap_bytes(self) -> Self;
    /// Built-in leading zero count; returns `BITS` for zero.
    fn leading_zeros(self) -> u32;
    /// Built-in trailing zero count; returns `BITS` for zero.
    fn trailing_zeros(self) -> u32;
    /// Built-in population count.
    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($t:ty => $u:ty, $s:ty;)+) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const BYTES: usize = size_of::<$t>();
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL_ONES: Self = !0;

                type Unsigned = $u;
                type Signed = $s;

                #[inline]
                fn to_unsigned(self) -> $u {
                    self as $u
                }

                #[inline]
                fn from_unsigned(bits: $u) -> Self {
                    bits as $t
                }

                #[inline]
                fn to_signed(self) -> $s {
                    self as $s
                }

                #[inline]
                fn from_signed(bits: $s) -> Self {
                    bits as $t
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $u as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $t
                }

                #[inline]
                fn wrapping_shl(self, amount: u32) -> Self {
                    <$t>::wrapping_shl(self, amount)
                }

                #[inline]
                fn wrapping_shr(self, amount: u32) -> Self {
                    <$t>::wrapping_shr(self, amount)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn rotate_left(self, amount: u32) -> Self {
                    <$t>::rotate_left(self, amount)
                }

                #[inline]
                fn rotate_right(self, amount: u32) -> Self {
                    <$t>::rotate_right(self, amount)
                }

                #[inline]
                fn swap_bytes(self) -> Self {
                    <$t>::swap_bytes(self)
                }

                #[inline]
                fn leading_zeros(self) -> u32 {
                    <$t>::leading_zeros(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }
            }
        )+
    };
}

impl_word! {
    u8 => u8, i8;
    u16 => u16, i16;
    u32 => u32, i32;
    u64 => u64, i64;
    i8 => u8, i8;
    i16 => u16, i16;
    i32 => u32, i32;
    i64 => u64, i64;
}
