use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::Error;
use crate::wide::Wide128;

impl From<Wide128> for BigUint {
    fn from(value: Wide128) -> Self {
        let (upper, lower) = value.into_words();
        BigUint::from_slice(&[
            lower as u32,
            (lower >> 32) as u32,
            upper as u32,
            (upper >> 32) as u32,
        ])
    }
}

impl TryFrom<&BigUint> for Wide128 {
    type Error = Error;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        if value.bits() > Wide128::BITS as u64 {
            return Err(Error::IntOverflow);
        }

        let mut digits = value.iter_u64_digits();
        let lower = digits.next().unwrap_or_default();
        let upper = digits.next().unwrap_or_default();
        Ok(Self::from_words(upper, lower))
    }
}

impl TryFrom<BigUint> for Wide128 {
    type Error = Error;

    #[inline]
    fn try_from(value: BigUint) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl ToPrimitive for Wide128 {
    fn to_i64(&self) -> Option<i64> {
        match self.into_words() {
            (0, lower) => lower.to_i64(),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self.into_words() {
            (0, lower) => Some(lower),
            _ => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        Some(u128::from(*self))
    }
}
