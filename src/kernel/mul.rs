use crate::util::{join_halves, split_halves};

/// Computes the full 128-bit product of two 64-bit integers.
///
/// Returns `(upper, lower)`. No native 128-bit arithmetic is used,
/// the product is computed by schoolbook multiplication in base `2^32`.
///
/// # Example
///
/// ```
/// # use wide128::kernel::mul;
/// assert_eq!(mul(u64::MAX, u64::MAX), (0xffff_ffff_ffff_fffe, 1));
/// ```
#[inline]
pub const fn mul(a: u64, b: u64) -> (u64, u64) {
    let (a_hi, a_lo) = split_halves(a);
    let (b_hi, b_lo) = split_halves(b);

    // Products of two 32-bit halves always fit into 64 bits.
    let (lo_lo_hi, lo_lo_lo) = split_halves(a_lo * b_lo);
    let (lo_hi_hi, lo_hi_lo) = split_halves(a_lo * b_hi);
    let (hi_lo_hi, hi_lo_lo) = split_halves(a_hi * b_lo);
    let (hi_hi_hi, hi_hi_lo) = split_halves(a_hi * b_hi);

    let slot0 = lo_lo_lo;

    let (carry, slot1) = split_halves(lo_lo_hi + lo_hi_lo + hi_lo_lo);
    let (carry, slot2) = split_halves(carry + lo_hi_hi + hi_lo_hi + hi_hi_lo);

    // The full product is below `2^128`, so the last slot never overflows.
    let slot3 = carry + hi_hi_hi;

    (join_halves(slot3, slot2), join_halves(slot1, slot0))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rand::Rng;

    use super::*;
    use crate::tests::{as_u128, rng};

    #[test]
    fn mul_simple() {
        assert_eq!(mul(0, 0), (0, 0));
        assert_eq!(mul(0, u64::MAX), (0, 0));
        assert_eq!(mul(1, u64::MAX), (0, u64::MAX));
        assert_eq!(mul(6, 7), (0, 42));
        assert_eq!(mul(1 << 32, 1 << 32), (1, 0));
        assert_eq!(mul(1 << 63, 2), (1, 0));
        assert_eq!(mul(u64::MAX, 2), (1, u64::MAX - 1));
        assert_eq!(mul(u64::MAX, u64::MAX), (0xFFFFFFFFFFFFFFFE, 0x0000000000000001));
    }

    #[test]
    fn mul_carries_between_slots() {
        // Middle slots are saturated so that every carry is exercised.
        let a = 0xffff_ffff_0000_0001;
        let b = 0x0000_0001_ffff_ffff;
        assert_eq!(as_u128_pair(mul(a, b)), a as u128 * b as u128);

        let a = 0x8000_0000_ffff_ffff;
        let b = 0xffff_ffff_8000_0000;
        assert_eq!(as_u128_pair(mul(a, b)), a as u128 * b as u128);
    }

    #[test]
    fn mul_is_commutative() {
        let mut rng = rng();
        for _ in 0..10000 {
            let (a, b): (u64, u64) = rng.gen();
            assert_eq!(mul(a, b), mul(b, a));
        }
    }

    #[test]
    fn mul_matches_bigint() {
        let mut rng = rng();
        for _ in 0..10000 {
            let (a, b): (u64, u64) = rng.gen();
            let (upper, lower) = mul(a, b);

            let expected = BigUint::from(a) * BigUint::from(b);
            let actual = (BigUint::from(upper) << 64u32) + BigUint::from(lower);
            assert_eq!(actual, expected, "a={a:#x} b={b:#x}");

            assert_eq!(as_u128(upper, lower), a as u128 * b as u128);
        }
    }

    fn as_u128_pair((upper, lower): (u64, u64)) -> u128 {
        as_u128(upper, lower)
    }
}
