//! A 128-bit unsigned integer value type.

use crate::error::{Error, ParseWideError};
use crate::kernel;

/// Unsigned 128-bit integer.
///
/// Stored as a pair of 64-bit words, all arithmetic is done by the
/// [`kernel`](crate::kernel) functions without native 128-bit integers.
#[derive(Default, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Wide128([u64; 2]);

impl Wide128 {
    /// The additive identity for this integer type, i.e. `0`.
    pub const ZERO: Self = Self([0, 0]);

    /// The multiplicative identity for this integer type, i.e. `1`.
    pub const ONE: Self = Self::new(1);

    /// The smallest value that can be represented by this integer type.
    pub const MIN: Self = Self::ZERO;

    /// The largest value that can be represented by this integer type.
    pub const MAX: Self = Self([u64::MAX, u64::MAX]);

    /// The size of this integer type in bits.
    pub const BITS: u32 = 128;

    /// Creates a new integer value from a primitive integer.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self::from_words(0, value)
    }

    /// Constructs self from a pair of upper and lower words.
    #[inline]
    pub const fn from_words(upper: u64, lower: u64) -> Self {
        #[cfg(target_endian = "little")]
        {
            Self([lower, upper])
        }
        #[cfg(target_endian = "big")]
        {
            Self([upper, lower])
        }
    }

    /// Returns a tuple of upper and lower words.
    #[inline]
    pub const fn into_words(self) -> (u64, u64) {
        #[cfg(target_endian = "little")]
        {
            (self.0[1], self.0[0])
        }
        #[cfg(target_endian = "big")]
        {
            (self.0[0], self.0[1])
        }
    }

    /// The upper 64 bits of the integer.
    #[inline]
    pub const fn upper(&self) -> u64 {
        self.into_words().0
    }

    /// The lower 64 bits of the integer.
    #[inline]
    pub const fn lower(&self) -> u64 {
        self.into_words().1
    }

    /// Returns `true` if the integer is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Returns the number of leading zeros in the binary representation of self.
    pub const fn leading_zeros(&self) -> u32 {
        let (upper, lower) = self.into_words();
        if upper == 0 {
            64 + lower.leading_zeros()
        } else {
            upper.leading_zeros()
        }
    }

    /// Returns the number of trailing zeros in the binary representation of self.
    pub const fn trailing_zeros(&self) -> u32 {
        let (upper, lower) = self.into_words();
        if lower == 0 {
            64 + upper.trailing_zeros()
        } else {
            lower.trailing_zeros()
        }
    }

    /// Returns the memory representation of this integer
    /// as a byte array in big-endian byte order.
    pub const fn to_be_bytes(self) -> [u8; 16] {
        let (upper, lower) = self.into_words();
        let upper = upper.to_be_bytes();
        let lower = lower.to_be_bytes();

        let mut res = [0u8; 16];
        let mut i = 0;
        while i < 8 {
            res[i] = upper[i];
            res[i + 8] = lower[i];
            i += 1;
        }
        res
    }

    /// Creates an integer value from its representation
    /// as a byte array in big endian.
    pub const fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let mut upper = [0u8; 8];
        let mut lower = [0u8; 8];

        let mut i = 0;
        while i < 8 {
            upper[i] = bytes[i];
            lower[i] = bytes[i + 8];
            i += 1;
        }
        Self::from_words(u64::from_be_bytes(upper), u64::from_be_bytes(lower))
    }

    /// Parses an integer from a string of exactly 32 hex chars
    /// (big-endian, with an optional `0x` prefix).
    pub fn from_hex_str(s: &str) -> Result<Self, ParseWideError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 32 {
            return Err(ParseWideError::UnexpectedStringLength);
        }

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self::from_be_bytes(bytes))
    }

    /// Calculates `self + rhs`.
    ///
    /// Returns a tuple of the addition along with a boolean indicating
    /// whether an arithmetic overflow would occur. If an overflow would
    /// have occurred then the wrapped value is returned.
    #[inline]
    pub const fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (a_upper, a_lower) = self.into_words();
        let (b_upper, b_lower) = rhs.into_words();
        let (carry, upper, lower) = kernel::add(a_upper, a_lower, b_upper, b_lower);
        (Self::from_words(upper, lower), carry != 0)
    }

    /// Wrapping (modular) addition. Computes `self + rhs`,
    /// wrapping around at the boundary of the type.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Checked integer addition. Computes `self + rhs`,
    /// returning `None` if overflow occurred.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (res, false) => Some(res),
            (_, true) => None,
        }
    }

    /// Computes `2^128 - self` modulo `2^128`.
    #[inline]
    pub const fn twos_complement(self) -> Self {
        let (upper, lower) = self.into_words();
        let (upper, lower) = kernel::twos_complement(upper, lower);
        Self::from_words(upper, lower)
    }

    /// Wrapping (modular) subtraction. Computes `self - rhs`,
    /// wrapping around at the boundary of the type.
    ///
    /// Underflow is not reported, see [`kernel::sub`].
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let (a_upper, a_lower) = self.into_words();
        let (b_upper, b_lower) = rhs.into_words();
        let (upper, lower) = kernel::sub(a_upper, a_lower, b_upper, b_lower);
        Self::from_words(upper, lower)
    }

    /// Checked integer subtraction. Computes `self - rhs`,
    /// returning `None` if overflow occurred.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        if self >= rhs {
            Some(self.wrapping_sub(rhs))
        } else {
            None
        }
    }

    /// Shifts self left by `n` bits.
    ///
    /// Returns the bits shifted out of the top as a carry
    /// along with the shifted value, see [`kernel::lsh`].
    #[inline]
    pub const fn lsh(self, n: u32) -> (u64, Self) {
        let (upper, lower) = self.into_words();
        let (carry, upper, lower) = kernel::lsh(upper, lower, n);
        (carry, Self::from_words(upper, lower))
    }

    /// Shifts self right by `n` bits.
    ///
    /// Returns the shifted value along with the bits shifted
    /// out of the bottom as a carry, see [`kernel::rsh`].
    #[inline]
    pub const fn rsh(self, n: u32) -> (Self, u64) {
        let (upper, lower) = self.into_words();
        let (upper, lower, carry) = kernel::rsh(upper, lower, n);
        (Self::from_words(upper, lower), carry)
    }

    /// Computes the full product of two 64-bit integers.
    #[inline]
    pub const fn widening_mul(a: u64, b: u64) -> Self {
        let (upper, lower) = kernel::mul(a, b);
        Self::from_words(upper, lower)
    }

    /// Calculates `self * rhs`.
    ///
    /// Returns a tuple of the lower 128 bits of the product
    /// along with the upper 64 bits which did not fit.
    pub const fn overflowing_mul_u64(self, rhs: u64) -> (Self, u64) {
        let (upper, lower) = self.into_words();

        let (lower_hi, lower_lo) = kernel::mul(lower, rhs);
        let (upper_hi, upper_lo) = kernel::mul(upper, rhs);

        // NOTE: `upper_hi <= 2^64 - 2`, so the sum never carries out.
        let (_, overflow, upper) = kernel::add(upper_hi, upper_lo, 0, lower_hi);

        (Self::from_words(upper, lower_lo), overflow)
    }

    /// Checked integer multiplication. Computes `self * rhs`,
    /// returning `None` if overflow occurred.
    #[inline]
    pub const fn checked_mul_u64(self, rhs: u64) -> Option<Self> {
        match self.overflowing_mul_u64(rhs) {
            (res, 0) => Some(res),
            _ => None,
        }
    }

    /// Divides self by a 64-bit integer.
    ///
    /// Returns the quotient along with the remainder,
    /// fails if `divisor` is zero.
    #[inline]
    pub fn quo_rem(self, divisor: u64) -> Result<(Self, u64), Error> {
        let (upper, lower) = self.into_words();
        let (upper, lower, rem) = ok!(kernel::quo_rem(upper, lower, divisor));
        Ok((Self::from_words(upper, lower), rem))
    }

    /// Checked integer division. Computes `self / rhs`,
    /// returning `None` if `rhs == 0`.
    #[inline]
    pub fn checked_div(self, rhs: u64) -> Option<Self> {
        match self.quo_rem(rhs) {
            Ok((quotient, _)) => Some(quotient),
            Err(_) => None,
        }
    }

    /// Checked integer remainder. Computes `self % rhs`,
    /// returning `None` if `rhs == 0`.
    #[inline]
    pub fn checked_rem(self, rhs: u64) -> Option<u64> {
        match self.quo_rem(rhs) {
            Ok((_, rem)) => Some(rem),
            Err(_) => None,
        }
    }
}

impl std::fmt::Debug for Wide128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (upper, lower) = self.into_words();
        f.debug_struct("Wide128")
            .field("upper", &format_args!("{upper:#018x}"))
            .field("lower", &format_args!("{lower:#018x}"))
            .finish()
    }
}

impl From<u64> for Wide128 {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<u128> for Wide128 {
    #[inline]
    fn from(value: u128) -> Self {
        Self::from_words((value >> 64) as u64, value as u64)
    }
}

impl From<Wide128> for u128 {
    #[inline]
    fn from(value: Wide128) -> Self {
        let (upper, lower) = value.into_words();
        ((upper as u128) << 64) | lower as u128
    }
}

impl PartialEq<u64> for Wide128 {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.into_words() == (0, *other)
    }
}

impl Ord for Wide128 {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.into_words().cmp(&other.into_words())
    }
}

impl PartialOrd for Wide128 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd<u64> for Wide128 {
    #[inline]
    fn partial_cmp(&self, other: &u64) -> Option<std::cmp::Ordering> {
        Some(self.into_words().cmp(&(0, *other)))
    }
}

impl std::fmt::Binary for Wide128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Binary::fmt(&u128::from(*self), f)
    }
}

impl std::fmt::LowerHex for Wide128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&u128::from(*self), f)
    }
}

impl std::fmt::UpperHex for Wide128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&u128::from(*self), f)
    }
}

macro_rules! impl_binary_ops {
    ($(
        $op:ident::$op_fn:ident, $op_assign:ident::$op_assign_fn:ident => $f:ident;
    )*) => {$(
        impl std::ops::$op for Wide128 {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: Self) -> Self::Output {
                std::ops::$op_assign::<&Self>::$op_assign_fn(&mut self, &rhs);
                self
            }
        }

        impl std::ops::$op<&Self> for Wide128 {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: &Self) -> Self::Output {
                std::ops::$op_assign::<&Self>::$op_assign_fn(&mut self, rhs);
                self
            }
        }

        impl std::ops::$op<u64> for Wide128 {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: u64) -> Self::Output {
                std::ops::$op_assign::<&Self>::$op_assign_fn(&mut self, &Self::new(rhs));
                self
            }
        }

        impl std::ops::$op_assign for Wide128 {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: Self) {
                std::ops::$op_assign::<&Self>::$op_assign_fn(self, &rhs)
            }
        }

        impl std::ops::$op_assign<u64> for Wide128 {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: u64) {
                std::ops::$op_assign::<&Self>::$op_assign_fn(self, &Self::new(rhs))
            }
        }

        impl std::ops::$op_assign<&Self> for Wide128 {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: &Self) {
                *self = self.$f(*rhs);
            }
        }
    )*};
}

impl_binary_ops! {
    Add::add, AddAssign::add_assign => wrapping_add;
    Sub::sub, SubAssign::sub_assign => wrapping_sub;
}

impl std::ops::Shl<u32> for Wide128 {
    type Output = Self;

    #[inline]
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShlAssign<u32> for Wide128 {
    #[inline]
    fn shl_assign(&mut self, n: u32) {
        *self = self.lsh(n).1;
    }
}

impl std::ops::Shr<u32> for Wide128 {
    type Output = Self;

    #[inline]
    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShrAssign<u32> for Wide128 {
    #[inline]
    fn shr_assign(&mut self, n: u32) {
        *self = self.rsh(n).0;
    }
}

impl std::ops::Mul<u64> for Wide128 {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: u64) -> Self::Output {
        self *= rhs;
        self
    }
}

impl std::ops::MulAssign<u64> for Wide128 {
    #[inline]
    fn mul_assign(&mut self, rhs: u64) {
        *self = self.overflowing_mul_u64(rhs).0;
    }
}

impl std::ops::Div<u64> for Wide128 {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: u64) -> Self::Output {
        self /= rhs;
        self
    }
}

impl std::ops::DivAssign<u64> for Wide128 {
    fn div_assign(&mut self, rhs: u64) {
        match self.quo_rem(rhs) {
            Ok((quotient, _)) => *self = quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Rem<u64> for Wide128 {
    type Output = u64;

    fn rem(self, rhs: u64) -> Self::Output {
        match self.quo_rem(rhs) {
            Ok((_, rem)) => rem,
            Err(e) => panic!("{e}"),
        }
    }
}

impl std::ops::Not for Wide128 {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self([!self.0[0], !self.0[1]])
    }
}

macro_rules! impl_bitwise_ops {
    ($($op:ident::$op_fn:ident, $op_assign:ident::$op_assign_fn:ident => $tok:tt;)*) => {$(
        impl std::ops::$op for Wide128 {
            type Output = Self;

            #[inline]
            fn $op_fn(mut self, rhs: Self) -> Self::Output {
                self.0[0] $tok rhs.0[0];
                self.0[1] $tok rhs.0[1];
                self
            }
        }

        impl std::ops::$op_assign for Wide128 {
            #[inline]
            fn $op_assign_fn(&mut self, rhs: Self) {
                self.0[0] $tok rhs.0[0];
                self.0[1] $tok rhs.0[1];
            }
        }
    )*};
}

impl_bitwise_ops! {
    BitAnd::bitand, BitAndAssign::bitand_assign => &=;
    BitOr::bitor, BitOrAssign::bitor_assign => |=;
    BitXor::bitxor, BitXorAssign::bitxor_assign => ^=;
}

#[cfg(feature = "rand")]
impl rand::distributions::Distribution<Wide128> for rand::distributions::Standard {
    #[inline]
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Wide128 {
        Wide128::from_words(rng.gen(), rng.gen())
    }
}
