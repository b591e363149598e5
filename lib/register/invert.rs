use super::BitRegister;
use std::ops::Not;

impl<const W: usize> BitRegister<W> {
    /// Flips every bit in place.
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        for bit in 0..W {
            self.put(bit, !self.get(bit));
        }

        self
    }

    /// A copy with every bit flipped.
    #[inline]
    pub fn inverted(&self) -> Self {
        let mut register = self.clone();
        register.invert();
        register
    }
}

impl<const W: usize> Not for BitRegister<W> {
    type Output = Self;

    #[inline]
    fn not(mut self) -> Self::Output {
        self.invert();
        self
    }
}

impl<const W: usize> Not for &BitRegister<W> {
    type Output = BitRegister<W>;

    #[inline]
    fn not(self) -> Self::Output {
        self.inverted()
    }
}
