#![no_main]
use libfuzzer_sys::fuzz_target;

use wide128::Wide128;

fuzz_target!(|input: (Wide128, Wide128)| {
    let (a, b) = input;

    let (sum, overflow) = a.overflowing_add(b);
    assert_eq!(b.overflowing_add(a), (sum, overflow));
    assert_eq!(sum.wrapping_sub(b), a);

    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    let diff = hi.checked_sub(lo).unwrap();
    assert_eq!(diff.checked_add(lo), Some(hi));

    if !a.is_zero() {
        assert_eq!(a.overflowing_add(a.twos_complement()), (Wide128::ZERO, true));
    }
});
