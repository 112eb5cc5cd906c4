use super::{add, lsh1, rsh1, sub};
use crate::error::Error;
use crate::util::unlikely;

/// Divides a 128-bit integer by a 64-bit divisor.
///
/// Returns `(upper_quotient, lower_quotient, remainder)` such that
/// `dividend = quotient * divisor + remainder` and `remainder < divisor`.
///
/// Dividends which fit into 64 bits are divided natively. Otherwise a binary
/// long division is used: the divisor is doubled until it exceeds the dividend,
/// and then the largest power-of-two multiple of it that still fits is
/// subtracted from the running remainder until the remainder is less than
/// the divisor.
///
/// Fails with [`Error::DivisionByZero`] if `divisor` is zero.
///
/// # Example
///
/// ```
/// # use wide128::kernel::quo_rem;
/// assert_eq!(quo_rem(0, 100, 9), Ok((0, 11, 1)));
/// assert_eq!(quo_rem(1, 0, 2), Ok((0, 1 << 63, 0)));
/// assert!(quo_rem(1, 0, 0).is_err());
/// ```
pub fn quo_rem(
    upper_dividend: u64,
    lower_dividend: u64,
    divisor: u64,
) -> Result<(u64, u64, u64), Error> {
    if unlikely(divisor == 0) {
        return Err(Error::DivisionByZero);
    }

    if upper_dividend == 0 {
        return Ok((0, lower_dividend / divisor, lower_dividend % divisor));
    }

    let dividend = (upper_dividend, lower_dividend);

    // Scale up the divisor until it exceeds the dividend or overflows.
    let mut multiple = (0, divisor);
    let mut factor = (0, 1);
    let mut multiple_carry = 0;
    let mut factor_carry = 0;
    while multiple <= dividend {
        let (carry, hi, lo) = lsh1(multiple.0, multiple.1);
        multiple = (hi, lo);

        let (carry_f, hi, lo) = lsh1(factor.0, factor.1);
        factor = (hi, lo);

        if carry != 0 {
            multiple_carry = carry;
            factor_carry = carry_f;
            break;
        }
    }

    // Back off by one step, reinstating the bit lost on overflow.
    let (hi, lo, _) = rsh1(multiple.0, multiple.1);
    multiple = (hi | (multiple_carry << 63), lo);
    let (hi, lo, _) = rsh1(factor.0, factor.1);
    factor = (hi | (factor_carry << 63), lo);

    let mut remainder = sub(dividend.0, dividend.1, multiple.0, multiple.1);
    let mut quotient = factor;

    while remainder.0 > 0 || remainder.1 >= divisor {
        // NOTE: `multiple` is always `divisor * factor` with `factor >= 1`,
        // so this loop stops at the latest when `multiple == divisor`.
        while multiple > remainder {
            let (hi, lo, _) = rsh1(multiple.0, multiple.1);
            multiple = (hi, lo);
            let (hi, lo, _) = rsh1(factor.0, factor.1);
            factor = (hi, lo);
        }

        remainder = sub(remainder.0, remainder.1, multiple.0, multiple.1);

        // The quotient never exceeds the dividend, so the carry is always zero.
        let (_, hi, lo) = add(quotient.0, quotient.1, factor.0, factor.1);
        quotient = (hi, lo);
    }

    Ok((quotient.0, quotient.1, remainder.1))
}
