const WORD_BITS: u32 = u64::BITS;

/// Shifts a 128-bit integer left by `n` bits.
///
/// Returns `(carry, upper, lower)` where `carry` accumulates the bits shifted
/// out of the top of `upper`. The result is the same as applying `n` single-bit
/// shifts, each of which moves the top bit of `upper` into the bottom of
/// `carry` (shifting `carry` left first). This way `carry` holds all lost bits
/// when `n <= 64`, while for larger shifts the oldest bits leave it as well.
///
/// Shifting by `0` is a no-op and returns a zero carry.
///
/// # Example
///
/// ```
/// # use wide128::kernel::lsh;
/// assert_eq!(lsh(0b101 << 61, 1, 4), (0b1010, 0, 0b10000));
/// ```
#[inline]
pub const fn lsh(upper: u64, lower: u64, n: u32) -> (u64, u64, u64) {
    let [lower, upper, carry] = shl_words([lower, upper, 0], n);
    (carry, upper, lower)
}

/// Shifts a 128-bit integer left by one bit.
///
/// See [`lsh`].
#[inline]
pub const fn lsh1(upper: u64, lower: u64) -> (u64, u64, u64) {
    lsh(upper, lower, 1)
}

/// Shifts a 128-bit integer right by `n` bits.
///
/// Returns `(upper, lower, carry)` where `carry` accumulates the bits shifted
/// out of the bottom of `lower`, placed into its top bits. The result is the
/// same as applying `n` single-bit shifts, each of which moves the bottom bit
/// of `lower` into the top of `carry` (shifting `carry` right first).
///
/// Shifting by `0` is a no-op and returns a zero carry.
///
/// # Example
///
/// ```
/// # use wide128::kernel::rsh;
/// assert_eq!(rsh(1, 0b1011, 2), (0, (1 << 62) | 0b10, 0b11 << 62));
/// ```
#[inline]
pub const fn rsh(upper: u64, lower: u64, n: u32) -> (u64, u64, u64) {
    let [carry, lower, upper] = shr_words([0, lower, upper], n);
    (upper, lower, carry)
}

/// Shifts a 128-bit integer right by one bit.
///
/// See [`rsh`].
#[inline]
pub const fn rsh1(upper: u64, lower: u64) -> (u64, u64, u64) {
    rsh(upper, lower, 1)
}

/// Shifts a little-endian 192-bit integer left, dropping bits above the top word.
const fn shl_words(words: [u64; 3], n: u32) -> [u64; 3] {
    let mut res = [0u64; 3];
    if n >= 3 * WORD_BITS {
        return res;
    }

    let offset = (n / WORD_BITS) as usize;
    let bits = n % WORD_BITS;

    let mut i = offset;
    while i < 3 {
        let src = i - offset;
        res[i] = words[src] << bits;
        if bits > 0 && src > 0 {
            res[i] |= words[src - 1] >> (WORD_BITS - bits);
        }
        i += 1;
    }
    res
}

/// Shifts a little-endian 192-bit integer right, dropping bits below the bottom word.
const fn shr_words(words: [u64; 3], n: u32) -> [u64; 3] {
    let mut res = [0u64; 3];
    if n >= 3 * WORD_BITS {
        return res;
    }

    let offset = (n / WORD_BITS) as usize;
    let bits = n % WORD_BITS;

    let mut i = 0;
    while i + offset < 3 {
        let src = i + offset;
        res[i] = words[src] >> bits;
        if bits > 0 && src + 1 < 3 {
            res[i] |= words[src + 1] << (WORD_BITS - bits);
        }
        i += 1;
    }
    res
}
