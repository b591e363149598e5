/// The unit of storage of a [`BitRegister`](super::BitRegister).
pub type Word = u64;

/// How many bits a [`Word`] holds.
pub const WORD_BITS: usize = Word::BITS as usize;

/// How many [`Word`]s are needed to store `width` bits.
#[inline(always)]
pub const fn words(width: usize) -> usize {
    width.div_ceil(WORD_BITS)
}

/// The location of a logical bit in the storage of a register.
///
/// Bits are counted from the right, the least significant bit is bit 0.
/// Words are counted from the left, so the least significant word is the last one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Address {
    /// The index of the [`Word`] that holds the bit.
    pub word: usize,
    /// The position of the bit within its [`Word`], counting from the least significant end.
    pub offset: usize,
}

impl Address {
    /// Locates the `bit`-th least significant bit in a storage of `words` [`Word`]s.
    ///
    /// # Panics
    ///
    /// Panics if `bit` does not fit in `words` [`Word`]s.
    #[inline(always)]
    pub const fn locate(bit: usize, words: usize) -> Self {
        assert!(bit / WORD_BITS < words);

        Address {
            word: words - 1 - bit / WORD_BITS,
            offset: bit % WORD_BITS,
        }
    }

    /// The logical bit index this address refers to, the inverse of [`Address::locate`].
    #[inline(always)]
    pub const fn bit(&self, words: usize) -> usize {
        (words - 1 - self.word) * WORD_BITS + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn words_rounds_up(#[strategy(1usize..1024)] width: usize) {
        assert!(words(width) * WORD_BITS >= width);
        assert!((words(width) - 1) * WORD_BITS < width);
    }

    #[proptest]
    fn least_significant_bit_is_in_the_last_word(#[strategy(1usize..16)] n: usize) {
        assert_eq!(Address::locate(0, n), Address { word: n - 1, offset: 0 });
    }

    #[proptest]
    fn bits_within_a_word_are_counted_from_the_right(#[strategy(..WORD_BITS)] i: usize) {
        assert_eq!(Address::locate(i, 1), Address { word: 0, offset: i });
    }

    #[proptest]
    fn words_are_counted_from_the_left() {
        assert_eq!(Address::locate(64, 3), Address { word: 1, offset: 0 });
        assert_eq!(Address::locate(129, 3), Address { word: 0, offset: 1 });
        assert_eq!(Address::locate(127, 2), Address { word: 0, offset: 63 });
    }

    #[proptest]
    fn locating_bit_is_reversible(
        #[strategy(1usize..16)] n: usize,
        #[strategy(..#n * WORD_BITS)] i: usize,
    ) {
        assert_eq!(Address::locate(i, n).bit(n), i);
    }

    #[proptest]
    #[should_panic]
    fn locate_panics_if_bit_does_not_fit(
        #[strategy(1usize..16)] n: usize,
        #[strategy(#n * WORD_BITS..)] i: usize,
    ) {
        Address::locate(i, n);
    }
}
