#![no_main]
use libfuzzer_sys::fuzz_target;

use wide128::arbitrary::NonZeroDivisor;
use wide128::Wide128;

fuzz_target!(|input: (Wide128, NonZeroDivisor)| {
    let (dividend, NonZeroDivisor(divisor)) = input;

    let (quotient, rem) = dividend.quo_rem(divisor).unwrap();
    assert!(rem < divisor);

    let (product, overflow) = quotient.overflowing_mul_u64(divisor);
    assert_eq!(overflow, 0);
    assert_eq!(product.checked_add(Wide128::new(rem)), Some(dividend));

    assert!(dividend.quo_rem(0).is_err());
});
