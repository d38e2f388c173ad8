/// Bit Scanning Utilities
///
/// Most/least significant set bit of a 256-bit word. The default functions
/// use the limb intrinsics behind `U256::leading_zeros` and
/// `U256::trailing_zeros`; the `*_by_ranges` variants narrow the answer with a
/// binary search over halving bit ranges and serve targets or hosts where the
/// intrinsics are unavailable.
///
/// All functions return `None` for a zero word, which has no set bit.
use primitive_types::U256;

/// Returns the 0-based index of the highest set bit of `x`
#[inline]
pub fn most_significant_bit(x: U256) -> Option<u8> {
    if x.is_zero() {
        return None;
    }
    Some(255 - x.leading_zeros() as u8)
}

/// Returns the 0-based index of the lowest set bit of `x`
#[inline]
pub fn least_significant_bit(x: U256) -> Option<u8> {
    if x.is_zero() {
        return None;
    }
    Some(x.trailing_zeros() as u8)
}

/// Range-halving variant of [`most_significant_bit`]
///
/// Each step tests whether any bit sits in the upper half of the remaining
/// range and, if so, shifts that half down and adds its width to the result.
pub fn most_significant_bit_by_ranges(x: U256) -> Option<u8> {
    if x.is_zero() {
        return None;
    }

    let mut x = x;
    let mut msb: u32 = 0;
    for width in [128u32, 64, 32, 16, 8, 4, 2, 1] {
        if x >= U256::one() << width {
            x = x >> width;
            msb += width;
        }
    }
    Some(msb as u8)
}

/// Range-halving variant of [`least_significant_bit`]
///
/// Each step tests whether the lower half of the remaining range is empty
/// and, if so, shifts it out and adds its width to the result.
pub fn least_significant_bit_by_ranges(x: U256) -> Option<u8> {
    if x.is_zero() {
        return None;
    }

    let mut x = x;
    let mut lsb: u32 = 0;
    for width in [128u32, 64, 32, 16, 8, 4, 2, 1] {
        let low_half = (U256::one() << width) - U256::one();
        if (x & low_half).is_zero() {
            x = x >> width;
            lsb += width;
        }
    }
    Some(lsb as u8)
}
