use super::{words, Address, Word};
use crate::util::{bit_of, width_of, Register};
use bitvec::prelude::*;
use derive_more::{Display, Error};
use num_traits::{PrimInt, Signed, Unsigned};
use std::fmt::{self, Write};
use tracing::{debug, trace};

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// The reason why writing a bit failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "bit {bit} is out of range for a register of width {width}")]
pub struct OutOfRange {
    /// The index of the bit.
    pub bit: usize,
    /// The width of the register.
    pub width: usize,
}

/// A fixed width unsigned integer of `W` bits.
///
/// Bits are stored in `ceil(W / 64)` [`Word`]s, see [`Address`] for the layout.
/// Bits at or beyond `W` are never materialized, reading them yields `false`
/// and writing them is rejected.
///
/// Arithmetic wraps around modulo `2^W`.
///
/// [`Clone`] performs a deep copy of the storage.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BitRegister<const W: usize> {
    words: Box<[Word]>,
}

impl<const W: usize> BitRegister<W> {
    const WORDS: usize = {
        assert!(W > 0, "a register must be at least one bit wide");
        words(W)
    };

    /// Constructs a register holding zero.
    #[inline]
    pub fn new() -> Self {
        BitRegister {
            words: vec![0; Self::WORDS].into_boxed_slice(),
        }
    }

    /// Constructs a register from the bit pattern of an unsigned integer.
    ///
    /// Bits that do not fit in `W` are discarded.
    #[inline]
    pub fn from_unsigned<T: PrimInt + Unsigned>(value: T) -> Self {
        let mut register = Self::new();
        for bit in 0..width_of::<T>().min(W) {
            register.put(bit, bit_of(value, bit));
        }

        register
    }

    /// Constructs a register from the two's complement bit pattern of a signed integer.
    ///
    /// Bits that do not fit in `W` are discarded, narrower integers are *not* sign extended.
    #[inline]
    pub fn from_signed<T: PrimInt + Signed>(value: T) -> Self {
        let mut register = Self::new();
        for bit in 0..width_of::<T>().min(W) {
            register.put(bit, bit_of(value, bit));
        }

        register
    }

    /// The number of bits in this register.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        W
    }

    /// The underlying storage, most significant word first.
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Reads the `bit`-th least significant bit.
    ///
    /// Bits at or beyond `W` read as `false`.
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        if bit >= W {
            return false;
        }

        let Address { word, offset } = Address::locate(bit, Self::WORDS);
        self.words[word].view_bits::<Lsb0>()[offset]
    }

    /// Writes the `bit`-th least significant bit.
    ///
    /// Fails without touching the register if `bit` is not less than `W`.
    #[inline]
    pub fn set(&mut self, bit: usize, value: bool) -> Result<(), OutOfRange> {
        if bit >= W {
            trace!(bit, width = W, "rejected out of range write");
            return Err(OutOfRange { bit, width: W });
        }

        self.put(bit, value);
        Ok(())
    }

    /// Writes a bit known to be in range.
    #[inline(always)]
    pub(super) fn put(&mut self, bit: usize, value: bool) {
        debug_assert!(bit < W);
        let Address { word, offset } = Address::locate(bit, Self::WORDS);
        self.words[word].view_bits_mut::<Lsb0>().set(offset, value);
    }

    /// Whether every bit is `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// An iterator over the bits, least significant first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        (0..W).map(move |bit| self.get(bit))
    }

    /// Copies the value into a register of width `N`.
    ///
    /// Growing zero extends, shrinking keeps the `N` least significant bits.
    pub fn resize<const N: usize>(&self) -> BitRegister<N> {
        let mut register = BitRegister::new();
        for bit in 0..W.min(N) {
            register.put(bit, self.get(bit));
        }

        if (N..W).any(|bit| self.get(bit)) {
            debug!(from = W, to = N, "discarded set bits while resizing");
        }

        register
    }

    /// Renders the register as `W` binary digits, most significant first.
    #[inline]
    pub fn to_bit_string(&self) -> String {
        self.to_string()
    }
}

impl<const W: usize> Default for BitRegister<W> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> Register for BitRegister<W> {
    const WIDTH: usize = W;

    #[inline(always)]
    fn bit(&self, i: usize) -> bool {
        self.get(i)
    }
}

impl<const W: usize> fmt::Display for BitRegister<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter()
            .rev()
            .try_for_each(|b| f.write_char(if b { '1' } else { '0' }))
    }
}

impl<const W: usize> fmt::Binary for BitRegister<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }

        fmt::Display::fmt(self, f)
    }
}

impl<const W: usize> fmt::Debug for BitRegister<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitRegister({self})")
    }
}

macro_rules! impl_from_primitive {
    ($ctor: ident, $($i: ty),*) => {
        $(
            impl<const W: usize> From<$i> for BitRegister<W> {
                #[inline]
                fn from(value: $i) -> Self {
                    Self::$ctor(value)
                }
            }
        )*
    };
}

impl_from_primitive!(from_unsigned, u8, u16, u32, u64, u128, usize);
impl_from_primitive!(from_signed, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
impl<const W: usize> Arbitrary for BitRegister<W> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<bool>(), W)
            .prop_map(|bits| {
                let mut register = Self::new();
                for (bit, value) in bits.into_iter().enumerate() {
                    register.put(bit, value);
                }

                register
            })
            .boxed()
    }
}
