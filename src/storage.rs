use crate::Word;

/// Type-level tag for a storage size of `BYTES` bytes.
///
/// Only `1`, `2`, `4` and `8` map to a word; see [`StorageType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Storage<const BYTES: usize>;

/// Maps a storage size to the integer types of exactly that size.
///
/// # Compiler Errors
/// Byte counts other than `1`, `2`, `4` or `8` have no mapping:
///
/// ```compile_fail
/// use light_bitops::UnsignedOf;
///
/// let _: UnsignedOf<3> = 0;
/// ```
pub trait StorageType {
    /// The unsigned word of the tagged size.
    type Unsigned: Word;
    /// The signed word of the tagged size.
    type Signed: Word;
}

impl StorageType for Storage<1> {
    type Unsigned = u8;
    type Signed = i8;
}

impl StorageType for Storage<2> {
    type Unsigned = u16;
    type Signed = i16;
}

impl StorageType for Storage<4> {
    type Unsigned = u32;
    type Signed = i32;
}

impl StorageType for Storage<8> {
    type Unsigned = u64;
    type Signed = i64;
}

/// The unsigned word that is `BYTES` bytes wide.
///
/// # Examples
/// ```
/// use light_bitops::UnsignedOf;
///
/// let raw: UnsignedOf<2> = 0xBEEF;
/// assert_eq!(raw, 0xBEEFu16);
/// ```
pub type UnsignedOf<const BYTES: usize> = <Storage<BYTES> as StorageType>::Unsigned;

/// The signed word that is `BYTES` bytes wide.
pub type SignedOf<const BYTES: usize> = <Storage<BYTES> as StorageType>::Signed;
