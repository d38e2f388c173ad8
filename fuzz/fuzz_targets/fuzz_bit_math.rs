#![no_main]

use libfuzzer_sys::fuzz_target;
use primitive_types::U256;
use tick_bitmap_index::bit_math::*;

// Both bit scan implementations must agree on every word, and the reported
// bits must be set with nothing above the msb or below the lsb.
fuzz_target!(|limbs: [u64; 4]| {
    let x = U256(limbs);

    let msb = most_significant_bit(x);
    let lsb = least_significant_bit(x);
    assert_eq!(msb, most_significant_bit_by_ranges(x));
    assert_eq!(lsb, least_significant_bit_by_ranges(x));

    match (msb, lsb) {
        (Some(msb), Some(lsb)) => {
            assert!(lsb <= msb);
            assert!(x.bit(msb as usize) && x.bit(lsb as usize));
        }
        (None, None) => assert!(x.is_zero()),
        _ => panic!("scans disagree on whether {x} is zero"),
    }
});
