//! Implementation strategies for rotate, byte-swap, zero counts and
//! population count.
//!
//! Both strategies are always compiled and produce identical results for
//! every valid input. [`BitOps`](crate::BitOps) routes through exactly one
//! of them, chosen at build time: [`builtin`] by default, [`portable`] when
//! the `portable` feature is enabled.
//!
//! The functions here carry the same contracts as their [`BitOps`](crate::BitOps)
//! counterparts: byte swaps need a [`ByteSwap`](crate::ByteSwap) word and zero
//! counts panic on zero in debug builds.

pub mod builtin;
pub mod portable;

#[cfg(not(feature = "portable"))]
pub(crate) use self::builtin as active;
#[cfg(feature = "portable")]
pub(crate) use self::portable as active;

/// An implementation strategy for the word intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compiler built-ins of the primitive integer types.
    Builtin,
    /// Shift, mask and lookup formulas that need no hardware support.
    Portable,
}

/// The strategy selected for this build.
///
/// # Examples
/// ```
/// use light_bitops::intrin::{STRATEGY, Strategy};
///
/// if cfg!(feature = "portable") {
///     assert_eq!(STRATEGY, Strategy::Portable);
/// } else {
///     assert_eq!(STRATEGY, Strategy::Builtin);
/// }
/// ```
pub const STRATEGY: Strategy = if cfg!(feature = "portable") {
    Strategy::Portable
} else {
    Strategy::Builtin
};
