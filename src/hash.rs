//! Hash combining in the style of `boost::hash_combine`.

use core::hash::{BuildHasher, Hash};

const GOLDEN_RATIO: u64 = 0x9E37_79B9;

/// Mixes `hash` into `seed` and returns the new seed.
///
/// # Examples
/// ```
/// use light_bitops::hash::combine;
///
/// assert_eq!(combine(0, 0), 0x9E37_79B9);
/// assert_ne!(combine(combine(0, 1), 2), combine(combine(0, 2), 1));
/// ```
#[inline]
pub const fn combine(seed: u64, hash: u64) -> u64 {
    seed ^ hash
        .wrapping_add(GOLDEN_RATIO)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Hashes `value` with `state` and folds the result into `seed`.
#[inline]
pub fn hash_combine<T, S>(seed: &mut u64, value: &T, state: &S)
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    *seed = combine(*seed, state.hash_one(value));
}

/// Folds the hashes of every item into a seed starting at `0`.
///
/// An empty sequence hashes to `0`. The result depends on item order.
pub fn hash_range<I, S>(items: I, state: &S) -> u64
where
    I: IntoIterator,
    I::Item: Hash,
    S: BuildHasher,
{
    let mut seed = 0;
    for item in items {
        hash_combine(&mut seed, &item, state);
    }
    seed
}
