//! More specific logic for generating arbitrary data.

use arbitrary::{Arbitrary, Result, Unstructured};

use crate::wide::Wide128;

impl<'a> Arbitrary<'a> for Wide128 {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let (upper, lower) = u.arbitrary()?;
        Ok(Self::from_words(upper, lower))
    }

    #[inline]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <(u64, u64) as Arbitrary>::size_hint(depth)
    }
}

/// [`Arbitrary`] helper for generating a non-zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct NonZeroDivisor(pub u64);

impl<'a> Arbitrary<'a> for NonZeroDivisor {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let divisor: u64 = u.arbitrary()?;
        Ok(Self(divisor.max(1)))
    }

    #[inline]
    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        <u64 as Arbitrary>::size_hint(depth)
    }
}
