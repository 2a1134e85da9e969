use crate::field::{
    compile_assert_byte, compile_assert_field, compile_assert_nibble, compile_assert_shift,
    compile_assert_sign_size, ones_unchecked, runtime_assert_byte, runtime_assert_field, runtime_assert_nibble,
    runtime_assert_shift, runtime_assert_sign_size,
};
use crate::intrin::active;
use crate::{SetBits, Word};

/// Bit-manipulation methods for every [`Word`].
///
/// Methods taking indices or sizes as arguments check their contracts with
/// debug assertions. Their `const_` counterparts take indices and sizes as
/// const generics and reject invalid ones at compile time.
///
/// Rotations, counts and iteration go through the strategy chosen in
/// [`intrin`](crate::intrin).
///
/// # Examples
/// ```
/// use light_bitops::BitOps;
///
/// let insn = 0xE3A0_1005u32;
/// assert_eq!(insn.field(28, 4), 0xE);
/// assert_eq!(insn.const_field::<12, 4>(), 1);
/// assert_eq!(insn.popcnt(), 10);
/// ```
pub trait BitOps: Word {
    /// Returns the `size`-bit field starting at bit `index`, right aligned.
    ///
    /// # Panics
    /// Panics in debug builds if `index >= BITS` or `index + size > BITS`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0xABCDu16.field(4, 8), 0xBC);
    /// assert_eq!((-1i8).field(0, 8), -1);
    /// ```
    fn field(self, index: u32, size: u32) -> Self;

    /// Compile-time variant of [`field`](BitOps::field).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `INDEX >= BITS` or `INDEX + SIZE > BITS`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0u8.const_field::<4, 8>();
    /// ```
    fn const_field<const INDEX: u32, const SIZE: u32>(self) -> Self;

    /// Returns byte `index`, counting from the least significant byte.
    ///
    /// # Panics
    /// Panics in debug builds if `index >= BYTES`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0x1234_5678u32.byte(0), 0x78);
    /// assert_eq!(0x1234_5678u32.byte(3), 0x12);
    /// ```
    fn byte(self, index: u32) -> u8;

    /// Compile-time variant of [`byte`](BitOps::byte).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `INDEX >= BYTES`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0u16.const_byte::<2>();
    /// ```
    fn const_byte<const INDEX: u32>(self) -> u8;

    /// Returns nibble `index`, counting from the least significant nibble.
    /// The result is always in `0..=0xF`.
    ///
    /// # Panics
    /// Panics in debug builds if `index >= 2 * BYTES`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0xABu8.nibble(0), 0xB);
    /// assert_eq!(0xABu8.nibble(1), 0xA);
    /// ```
    fn nibble(self, index: u32) -> u8;

    /// Compile-time variant of [`nibble`](BitOps::nibble).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `INDEX >= 2 * BYTES`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0u8.const_nibble::<2>();
    /// ```
    fn const_nibble<const INDEX: u32>(self) -> u8;

    /// Interprets the low `size` bits as a two's complement number and
    /// sign-extends it to the full width. Bits above `size` are ignored.
    ///
    /// # Panics
    /// Panics in debug builds if `size == 0` or `size > BITS`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0b1_0110i32.sign_extend(5), -10);
    /// assert_eq!(0b0_0110i32.sign_extend(5), 6);
    /// assert_eq!(0x0FFFu16.sign_extend(12), 0xFFFF);
    /// ```
    fn sign_extend(self, size: u32) -> Self;

    /// Compile-time variant of [`sign_extend`](BitOps::sign_extend).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `SIZE == 0` or `SIZE > BITS`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0i16.const_sign_extend::<0>();
    /// ```
    fn const_sign_extend<const SIZE: u32>(self) -> Self;

    /// Shifts right treating the word as signed, filling with the sign bit.
    ///
    /// # Panics
    /// Panics in debug builds if `amount >= BITS`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0x8000_0000u32.arithmetic_shr(4), 0xF800_0000);
    /// ```
    fn arithmetic_shr(self, amount: u32) -> Self;

    /// Compile-time variant of [`arithmetic_shr`](BitOps::arithmetic_shr).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `AMOUNT >= BITS`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0i32.const_arithmetic_shr::<32>();
    /// ```
    fn const_arithmetic_shr<const AMOUNT: u32>(self) -> Self;

    /// Shifts right treating the word as unsigned, filling with zeros.
    ///
    /// # Panics
    /// Panics in debug builds if `amount >= BITS`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!((-16i8).logical_shr(4), 0x0F);
    /// ```
    fn logical_shr(self, amount: u32) -> Self;

    /// Compile-time variant of [`logical_shr`](BitOps::logical_shr).
    ///
    /// # Compiler Errors
    /// Prevents compilation if `AMOUNT >= BITS`.
    ///
    /// ```compile_fail
    /// use light_bitops::BitOps;
    ///
    /// let _ = 0u8.const_logical_shr::<8>();
    /// ```
    fn const_logical_shr<const AMOUNT: u32>(self) -> Self;

    /// Returns the most significant bit as `0` or `1`.
    fn msb(self) -> Self;

    /// Rotates right by `amount` modulo `BITS`.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(0x12u8.ror(4), 0x21);
    /// assert_eq!(0x12u8.ror(12), 0x21);
    /// ```
    fn ror(self, amount: u32) -> Self;

    /// Rotates left by `amount` modulo `BITS`.
    fn rol(self, amount: u32) -> Self;

    /// Counts the zero bits above the most significant set bit.
    ///
    /// # Panics
    /// The count is undefined for zero. Panics in debug builds if the value
    /// is zero; release builds return an unspecified number.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert_eq!(1u16.clz(), 15);
    /// ```
    fn clz(self) -> u32;

    /// Counts the zero bits below the least significant set bit.
    ///
    /// # Panics
    /// The count is undefined for zero. Panics in debug builds if the value
    /// is zero; release builds return an unspecified number.
    fn ctz(self) -> u32;

    /// Counts the set bits.
    fn popcnt(self) -> u32;

    /// Returns an iterator over the indices of the set bits.
    ///
    /// # Examples
    /// ```
    /// use light_bitops::BitOps;
    ///
    /// assert!(0b1011_0100u8.set_bits().eq([2, 4, 5, 7]));
    /// ```
    fn set_bits(self) -> SetBits<Self>;
}

impl<T: Word> BitOps for T {
    #[inline]
    fn field(self, index: u32, size: u32) -> Self {
        runtime_assert_field(T::BITS, index, size);
        self.logical_shr(index) & ones_unchecked(size)
    }

    #[inline]
    fn const_field<const INDEX: u32, const SIZE: u32>(self) -> Self {
        const { compile_assert_field(T::BITS, INDEX, SIZE) };
        self.logical_shr(INDEX) & ones_unchecked(SIZE)
    }

    #[inline]
    fn byte(self, index: u32) -> u8 {
        runtime_assert_byte(T::BYTES, index);
        self.to_bits().wrapping_shr(8 * index) as u8
    }

    #[inline]
    fn const_byte<const INDEX: u32>(self) -> u8 {
        const { compile_assert_byte(T::BYTES, INDEX) };
        self.to_bits().wrapping_shr(8 * INDEX) as u8
    }

    #[inline]
    fn nibble(self, index: u32) -> u8 {
        runtime_assert_nibble(T::BYTES, index);
        (self.to_bits().wrapping_shr(4 * index) & 0xF) as u8
    }

    #[inline]
    fn const_nibble<const INDEX: u32>(self) -> u8 {
        const { compile_assert_nibble(T::BYTES, INDEX) };
        (self.to_bits().wrapping_shr(4 * INDEX) & 0xF) as u8
    }

    #[inline]
    fn sign_extend(self, size: u32) -> Self {
        runtime_assert_sign_size(T::BITS, size);
        sign_extend_unchecked(self, size)
    }

    #[inline]
    fn const_sign_extend<const SIZE: u32>(self) -> Self {
        const { compile_assert_sign_size(T::BITS, SIZE) };
        sign_extend_unchecked(self, SIZE)
    }

    #[inline]
    fn arithmetic_shr(self, amount: u32) -> Self {
        runtime_assert_shift(T::BITS, amount);
        T::from_signed(self.to_signed().wrapping_shr(amount))
    }

    #[inline]
    fn const_arithmetic_shr<const AMOUNT: u32>(self) -> Self {
        const { compile_assert_shift(T::BITS, AMOUNT) };
        T::from_signed(self.to_signed().wrapping_shr(AMOUNT))
    }

    #[inline]
    fn logical_shr(self, amount: u32) -> Self {
        runtime_assert_shift(T::BITS, amount);
        T::from_unsigned(self.to_unsigned().wrapping_shr(amount))
    }

    #[inline]
    fn const_logical_shr<const AMOUNT: u32>(self) -> Self {
        const { compile_assert_shift(T::BITS, AMOUNT) };
        T::from_unsigned(self.to_unsigned().wrapping_shr(AMOUNT))
    }

    #[inline]
    fn msb(self) -> Self {
        self.logical_shr(T::BITS - 1)
    }

    #[inline]
    fn ror(self, amount: u32) -> Self {
        active::ror(self, amount)
    }

    #[inline]
    fn rol(self, amount: u32) -> Self {
        active::rol(self, amount)
    }

    #[inline]
    fn clz(self) -> u32 {
        active::clz(self)
    }

    #[inline]
    fn ctz(self) -> u32 {
        active::ctz(self)
    }

    #[inline]
    fn popcnt(self) -> u32 {
        active::popcnt(self)
    }

    #[inline]
    fn set_bits(self) -> SetBits<Self> {
        SetBits::new(self)
    }
}

#[inline]
fn sign_extend_unchecked<T: Word>(value: T, size: u32) -> T {
    // branchless: flip the sign bit, then subtract it back out
    let bias = T::ONE.wrapping_shl(size.wrapping_sub(1));
    let value = value & ones_unchecked(size);
    (value ^ bias).wrapping_sub(bias)
}

/// Byte order reversal, available for words of at least 16 bits.
///
/// # Compiler Errors
/// Swapping the bytes of an 8-bit word is a no-op and does not compile:
///
/// ```compile_fail
/// use light_bitops::ByteSwap;
///
/// let _ = 0x12u8.bswap();
/// ```
///
/// # Examples
/// ```
/// use light_bitops::ByteSwap;
///
/// assert_eq!(0x1234u16.bswap(), 0x3412);
/// assert_eq!(0x1234_5678u32.bswap(), 0x7856_3412);
/// ```
pub trait ByteSwap: Word {
    /// Reverses the byte order.
    fn bswap(self) -> Self;
}

macro_rules! impl_byte_swap {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ByteSwap for $t {
                #[inline]
                fn bswap(self) -> Self {
                    active::bswap(self)
                }
            }
        )+
    };
}

impl_byte_swap!(u16, u32, u64, i16, i32, i64);
