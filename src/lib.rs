//! A minimal, width-generic bit-manipulation toolkit written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! Designed for emulators, decoders and other code that picks apart machine
//! words on hot paths.
//!
//! [`BitOps`] is the main trait in this library. It is implemented for every
//! [`Word`]: `u8`, `u16`, `u32`, `u64`, `i8`, `i16`, `i32` and `i64`. Its
//! [features](#features) are listed below.
//!
//! # Examples
//! ```
//! use light_bitops::{BitOps, ByteSwap, mask, ones};
//!
//! let word = 0x1234_5678u32;
//! assert_eq!(word.byte(0), 0x78);
//! assert_eq!(word.field(8, 12), 0x456);
//! assert_eq!(word.bswap(), 0x7856_3412);
//! assert_eq!(ones::<u8>(3), 0b111);
//! assert_eq!(mask::<u16>(4, 4), 0x00F0);
//! assert!(0b1011_0100u8.set_bits().eq([2, 4, 5, 7]));
//! ```
//!
//! # Contracts
//!
//! Every width-generic operation comes in two flavours:
//!
//! - a run-time variant taking indices and sizes as arguments, checked with
//!   debug assertions (release builds skip the check and the result of a
//!   violated contract is unspecified)
//! - a `const_` variant taking indices and sizes as const generics, rejected
//!   at compile time if they do not fit the word
//!
//! Leading and trailing zero counts are undefined for zero and panic in
//! debug builds.
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - No heap allocations (stack-only), no `unsafe`
//! - Masks: [`ones`], [`mask`], [`const_ones`], [`const_mask`]
//! - Fields: `field`, `byte`, `nibble`, `sign_extend` and their `const_`
//!   variants
//! - Shifts: `arithmetic_shr`, `logical_shr` and their `const_` variants,
//!   `msb`
//! - Intrinsics: `ror`, `rol`, `clz`, `ctz`, `popcnt` and
//!   [`bswap`](ByteSwap::bswap) for words of at least 16 bits
//! - Lazy iteration over set bits: [`SetBits`]
//! - Type-level storage mapping: [`UnsignedOf`], [`SignedOf`]
//! - Hash combining: [`hash`]
//!
//! # Cargo features
//!
//! - `portable`: route rotations, byte swaps and counts through the
//!   [`intrin::portable`] formulas instead of the compiler built-ins. The
//!   results are identical.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod field;
pub mod hash;
pub mod intrin;
mod iter;
mod ops;
mod storage;
mod word;

pub use field::{const_mask, const_ones, mask, ones};
pub use iter::{SetBits, set_bits};
pub use ops::{BitOps, ByteSwap};
pub use storage::{SignedOf, Storage, StorageType, UnsignedOf};
pub use word::Word;
