use crate::Word;

pub(crate) const fn compile_assert_size(bits: u32, size: u32) {
    assert!(size <= bits, "SIZE must not exceed the word width.");
}

pub(crate) const fn compile_assert_field(bits: u32, index: u32, size: u32) {
    assert!(index < bits, "INDEX must be less than the word width.");
    assert!(
        size <= bits - index,
        "INDEX + SIZE must not exceed the word width."
    );
}

pub(crate) const fn compile_assert_byte(bytes: usize, index: u32) {
    assert!(
        (index as usize) < bytes,
        "INDEX must be less than the word size in bytes."
    );
}

pub(crate) const fn compile_assert_nibble(bytes: usize, index: u32) {
    assert!(
        (index as usize) < 2 * bytes,
        "INDEX must be less than the word size in nibbles."
    );
}

pub(crate) const fn compile_assert_sign_size(bits: u32, size: u32) {
    assert!(size > 0, "SIZE must be greater than zero.");
    assert!(size <= bits, "SIZE must not exceed the word width.");
}

pub(crate) const fn compile_assert_shift(bits: u32, amount: u32) {
    assert!(amount < bits, "AMOUNT must be less than the word width.");
}

#[inline]
pub(crate) fn runtime_assert_size(bits: u32, size: u32) {
    debug_assert!(size <= bits, "Size {size} exceeds the word width {bits}");
}

#[inline]
pub(crate) fn runtime_assert_field(bits: u32, index: u32, size: u32) {
    debug_assert!(index < bits, "Index {index} out of bounds for {bits} bits");
    debug_assert!(
        size <= bits - index.min(bits),
        "Field {index}..{index}+{size} exceeds the word width {bits}"
    );
}

#[inline]
pub(crate) fn runtime_assert_byte(bytes: usize, index: u32) {
    debug_assert!(
        (index as usize) < bytes,
        "Byte index {index} out of bounds for {bytes} bytes"
    );
}

#[inline]
pub(crate) fn runtime_assert_nibble(bytes: usize, index: u32) {
    debug_assert!(
        (index as usize) < 2 * bytes,
        "Nibble index {index} out of bounds for {bytes} bytes"
    );
}

#[inline]
pub(crate) fn runtime_assert_sign_size(bits: u32, size: u32) {
    debug_assert!(size > 0, "Sign bit size must be greater than zero");
    debug_assert!(size <= bits, "Size {size} exceeds the word width {bits}");
}

#[inline]
pub(crate) fn runtime_assert_shift(bits: u32, amount: u32) {
    debug_assert!(
        amount < bits,
        "Shift amount {amount} out of bounds for {bits} bits"
    );
}

#[inline]
pub(crate) fn runtime_assert_nonzero<T: Word>(value: T) {
    debug_assert!(
        value != T::ZERO,
        "Zero count is undefined for a zero value"
    );
}

#[inline]
pub(crate) fn ones_unchecked<T: Word>(size: u32) -> T {
    // a shift by the full width is masked, not saturated
    if size == T::BITS {
        T::ALL_ONES
    } else {
        !T::ALL_ONES.wrapping_shl(size)
    }
}

/// Returns a word with the low `size` bits set and every other bit unset.
///
/// # Panics
/// Panics in debug builds if `size > T::BITS`.
///
/// # Examples
/// ```
/// use light_bitops::ones;
///
/// assert_eq!(ones::<u8>(3), 0b111);
/// assert_eq!(ones::<u16>(16), u16::MAX);
/// assert_eq!(ones::<i32>(0), 0);
/// ```
#[inline]
pub fn ones<T: Word>(size: u32) -> T {
    runtime_assert_size(T::BITS, size);
    ones_unchecked(size)
}

/// Compile-time variant of [`ones`].
///
/// # Compiler Errors
/// Prevents compilation if `SIZE > T::BITS`.
///
/// ```compile_fail
/// use light_bitops::const_ones;
///
/// let _ = const_ones::<u8, 9>();
/// ```
///
/// # Examples
/// ```
/// use light_bitops::const_ones;
///
/// assert_eq!(const_ones::<u32, 12>(), 0xFFF);
/// assert_eq!(const_ones::<u64, 64>(), u64::MAX);
/// ```
#[inline]
pub fn const_ones<T: Word, const SIZE: u32>() -> T {
    const { compile_assert_size(T::BITS, SIZE) };
    ones_unchecked(SIZE)
}

/// Returns [`ones(size)`](ones) shifted left by `index`, i.e. `size`
/// contiguous set bits starting at bit `index`.
///
/// # Panics
/// Panics in debug builds if `index >= T::BITS` or `index + size > T::BITS`.
///
/// # Examples
/// ```
/// use light_bitops::mask;
///
/// assert_eq!(mask::<u16>(4, 8), 0x0FF0);
/// assert_eq!(mask::<u8>(7, 1), 0x80);
/// ```
#[inline]
pub fn mask<T: Word>(index: u32, size: u32) -> T {
    runtime_assert_field(T::BITS, index, size);
    ones_unchecked::<T>(size).wrapping_shl(index)
}

/// Compile-time variant of [`mask`].
///
/// # Compiler Errors
/// Prevents compilation if `INDEX >= T::BITS` or `INDEX + SIZE > T::BITS`.
///
/// ```compile_fail
/// use light_bitops::const_mask;
///
/// let _ = const_mask::<u16, 12, 8>();
/// ```
///
/// # Examples
/// ```
/// use light_bitops::const_mask;
///
/// assert_eq!(const_mask::<u32, 8, 8>(), 0xFF00);
/// ```
#[inline]
pub fn const_mask<T: Word, const INDEX: u32, const SIZE: u32>() -> T {
    const { compile_assert_field(T::BITS, INDEX, SIZE) };
    ones_unchecked::<T>(SIZE).wrapping_shl(INDEX)
}
