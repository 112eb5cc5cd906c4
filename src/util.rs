//! General stuff.

/// Brings [unlikely](core::intrinsics::unlikely) to stable rust.
#[inline(always)]
pub(crate) const fn unlikely(b: bool) -> bool {
    #[allow(clippy::needless_bool, clippy::bool_to_int_with_if)]
    if (1i32).checked_div(if b { 0 } else { 1 }).is_none() {
        true
    } else {
        false
    }
}

/// Number of bits in a half of a 64-bit word.
pub(crate) const HALF_BITS: u32 = 32;

/// Mask for the lower half of a 64-bit word.
pub(crate) const LOWER_HALF_MASK: u64 = u64::MAX >> HALF_BITS;

/// Splits a word into its `(high, low)` 32-bit halves.
///
/// Both halves are returned widened to `u64` so that products
/// of two halves can be computed without overflow.
#[inline(always)]
pub(crate) const fn split_halves(word: u64) -> (u64, u64) {
    (word >> HALF_BITS, word & LOWER_HALF_MASK)
}

/// Joins two 32-bit halves into a single word.
///
/// Only the lower 32 bits of each half are used.
#[inline(always)]
pub(crate) const fn join_halves(high: u64, low: u64) -> u64 {
    ((high & LOWER_HALF_MASK) << HALF_BITS) | (low & LOWER_HALF_MASK)
}
