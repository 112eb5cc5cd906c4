/// Adds two 128-bit integers given as `(upper, lower)` word pairs.
///
/// Returns `(carry, upper, lower)` where `carry` is `1` if the sum
/// did not fit into 128 bits and `0` otherwise. The resulting words
/// are the sum modulo `2^128`.
///
/// # Example
///
/// ```
/// # use wide128::kernel::add;
/// assert_eq!(add(1, 20, 2, 40), (0, 3, 60));
/// assert_eq!(add(0xff << 56, 0, 1 << 56, 0), (1, 0, 0));
/// ```
#[inline]
pub const fn add(upper_a: u64, lower_a: u64, upper_b: u64, lower_b: u64) -> (u64, u64, u64) {
    let (lower, carry_lo) = lower_a.overflowing_add(lower_b);
    let (upper, carry_c) = upper_a.overflowing_add(carry_lo as u64);
    let (upper, carry_hi) = upper.overflowing_add(upper_b);

    // At most one of the upper carries can be set.
    ((carry_c | carry_hi) as u64, upper, lower)
}

/// Computes the two's complement of a 128-bit integer,
/// i.e. `2^128 - value` modulo `2^128`.
///
/// The two's complement of zero is zero.
#[inline]
pub const fn twos_complement(upper: u64, lower: u64) -> (u64, u64) {
    let upper = !upper;
    let lower = (!lower).wrapping_add(1);
    if lower == 0 {
        (upper.wrapping_add(1), lower)
    } else {
        (upper, lower)
    }
}

/// Subtracts one 128-bit integer from another.
///
/// The subtrahend is negated via [`twos_complement`] and added to
/// the minuend, the carry is discarded.
///
/// NOTE: The caller must guarantee that the minuend is not less than
/// the subtrahend. Borrow is neither detected nor reported, so
/// a larger subtrahend silently produces the result modulo `2^128`.
#[inline]
pub const fn sub(
    upper_minuend: u64,
    lower_minuend: u64,
    upper_subtrahend: u64,
    lower_subtrahend: u64,
) -> (u64, u64) {
    let (upper_neg, lower_neg) = twos_complement(upper_subtrahend, lower_subtrahend);
    let (_, upper, lower) = add(upper_minuend, lower_minuend, upper_neg, lower_neg);
    (upper, lower)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::tests::{as_u128, rng, words};

    #[test]
    fn add_simple() {
        assert_eq!(add(1, 20, 2, 40), (0, 3, 60));
        assert_eq!(add(0, 0, 0, 0), (0, 0, 0));
        assert_eq!(add(0, u64::MAX, 0, 1), (0, 1, 0));
        assert_eq!(add(u64::MAX, u64::MAX, 0, 1), (1, 0, 0));
        assert_eq!(
            add(u64::MAX, u64::MAX, u64::MAX, u64::MAX),
            (1, u64::MAX, u64::MAX - 1)
        );
        assert_eq!(add(0xff00000000000000, 0, 0x0100000000000000, 0), (1, 0, 0));
    }

    #[test]
    fn add_carry_from_lower_into_overflow() {
        // Lower carry makes the upper word overflow on its own.
        assert_eq!(add(u64::MAX, u64::MAX, 0, 1), (1, 0, 0));
        // Upper words overflow with a lower carry as well.
        assert_eq!(add(u64::MAX, u64::MAX, u64::MAX, 1), (1, u64::MAX, 0));
    }

    #[test]
    fn add_matches_native() {
        let mut rng = rng();
        for _ in 0..10000 {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();

            let (a_hi, a_lo) = words(a);
            let (b_hi, b_lo) = words(b);
            let (carry, hi, lo) = add(a_hi, a_lo, b_hi, b_lo);

            let (expected, overflow) = a.overflowing_add(b);
            assert_eq!(as_u128(hi, lo), expected);
            assert_eq!(carry, overflow as u64);
        }
    }

    #[test]
    fn add_is_commutative_and_associative() {
        let mut rng = rand_xorshift::XorShiftRng::seed_from_u64(0xadd);
        for _ in 0..1000 {
            let (a, b, c): ([u64; 2], [u64; 2], [u64; 2]) = rng.gen();

            assert_eq!(add(a[0], a[1], b[0], b[1]), add(b[0], b[1], a[0], a[1]));

            let (c1, ab_hi, ab_lo) = add(a[0], a[1], b[0], b[1]);
            let (c2, l_hi, l_lo) = add(ab_hi, ab_lo, c[0], c[1]);

            let (c3, bc_hi, bc_lo) = add(b[0], b[1], c[0], c[1]);
            let (c4, r_hi, r_lo) = add(a[0], a[1], bc_hi, bc_lo);

            assert_eq!((l_hi, l_lo), (r_hi, r_lo));
            // The total amount of overflow is the same on both sides.
            assert_eq!(c1 + c2, c3 + c4);
        }
    }

    #[test]
    fn twos_complement_simple() {
        assert_eq!(twos_complement(0, 0), (0, 0));
        assert_eq!(twos_complement(0, 1), (u64::MAX, u64::MAX));
        assert_eq!(twos_complement(u64::MAX, u64::MAX), (0, 1));
        assert_eq!(twos_complement(1, 0), (u64::MAX, 0));
        assert_eq!(twos_complement(1 << 63, 0), (1 << 63, 0));
    }

    #[test]
    fn twos_complement_properties() {
        let mut rng = rng();
        for _ in 0..10000 {
            let (hi, lo): (u64, u64) = rng.gen();

            let (neg_hi, neg_lo) = twos_complement(hi, lo);
            assert_eq!(twos_complement(neg_hi, neg_lo), (hi, lo));
            assert_eq!(as_u128(neg_hi, neg_lo), as_u128(hi, lo).wrapping_neg());

            if hi != 0 || lo != 0 {
                assert_eq!(add(hi, lo, neg_hi, neg_lo), (1, 0, 0));
            }
        }
    }

    #[test]
    fn sub_simple() {
        assert_eq!(sub(3, 60, 2, 40), (1, 20));
        assert_eq!(sub(1, 0, 0, 1), (0, u64::MAX));
        assert_eq!(sub(u64::MAX, u64::MAX, u64::MAX, u64::MAX), (0, 0));
        assert_eq!(sub(42, 42, 0, 0), (42, 42));
    }

    #[test]
    fn sub_wraps_on_underflow() {
        assert_eq!(sub(0, 0, 0, 1), (u64::MAX, u64::MAX));
        assert_eq!(sub(0, 5, 1, 10), (u64::MAX - 1, u64::MAX - 4));
    }

    #[test]
    fn sub_is_inverse_of_add() {
        let mut rng = rng();
        for _ in 0..10000 {
            let a: u128 = rng.gen();
            let b: u128 = rng.gen();
            let (a, b) = if a >= b { (a, b) } else { (b, a) };

            let (a_hi, a_lo) = words(a);
            let (b_hi, b_lo) = words(b);

            let (d_hi, d_lo) = sub(a_hi, a_lo, b_hi, b_lo);
            assert_eq!(as_u128(d_hi, d_lo), a - b);
            assert_eq!(add(d_hi, d_lo, b_hi, b_lo), (0, a_hi, a_lo));
        }
    }
}
