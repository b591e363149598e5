use super::{bit_of, width_of};

/// Trait for fixed width collection of bits.
pub trait Register {
    /// How many bits this register contains.
    const WIDTH: usize;

    /// Reads the `i`-th least significant bit.
    ///
    /// Bits at or beyond [`Register::WIDTH`] read as `false`.
    fn bit(&self, i: usize) -> bool;
}

macro_rules! impl_register_for {
    ($($i: ty),*) => {
        $(
            impl Register for $i {
                const WIDTH: usize = <$i>::BITS as usize;

                #[inline(always)]
                fn bit(&self, i: usize) -> bool {
                    debug_assert_eq!(Self::WIDTH, width_of::<$i>());
                    i < Self::WIDTH && bit_of(*self, i)
                }
            }
        )*
    };
}

impl_register_for!(u8, u16, u32, u64, u128, usize);
impl_register_for!(i8, i16, i32, i64, i128, isize);
