#![no_main]
use libfuzzer_sys::fuzz_target;

use wide128::Wide128;

fuzz_target!(|input: (Wide128, u8)| {
    let (value, n) = input;
    let n = (n % 65) as u32;

    let (_, shifted) = value.lsh(n);
    let (restored, _) = shifted.rsh(n);
    assert_eq!(restored, value & (Wide128::MAX >> n));
});
