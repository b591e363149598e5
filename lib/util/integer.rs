use num_traits::PrimInt;

/// The number of bits in a primitive integer.
#[inline(always)]
pub fn width_of<T: PrimInt>() -> usize {
    T::zero().count_zeros() as usize
}

/// Reads the `i`-th least significant bit of a primitive integer.
///
/// Signed integers are read through their two's complement bit pattern.
///
/// # Panics
///
/// Panics if `i` is not less than [`width_of::<T>()`](width_of).
#[inline(always)]
pub fn bit_of<T: PrimInt>(value: T, i: usize) -> bool {
    assert!(i < width_of::<T>());
    value.unsigned_shr(i as u32) & T::one() != T::zero()
}
