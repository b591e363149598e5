use super::BitRegister;
use crate::util::{full_add, full_sub, Register};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Ripple-carry addition modulo `2^W`.
///
/// Only the `W` least significant bits of `rhs` take part,
/// narrower operands are zero extended.
impl<const W: usize, R: Register> AddAssign<&R> for BitRegister<W> {
    #[inline]
    fn add_assign(&mut self, rhs: &R) {
        let mut carry = false;
        for bit in 0..W {
            let (sum, c) = full_add(self.get(bit), rhs.bit(bit), carry);
            self.put(bit, sum);
            carry = c;
        }
    }
}

/// Ripple-borrow subtraction modulo `2^W`.
///
/// Only the `W` least significant bits of `rhs` take part,
/// narrower operands are zero extended.
impl<const W: usize, R: Register> SubAssign<&R> for BitRegister<W> {
    #[inline]
    fn sub_assign(&mut self, rhs: &R) {
        let mut borrow = false;
        for bit in 0..W {
            let (diff, b) = full_sub(self.get(bit), rhs.bit(bit), borrow);
            self.put(bit, diff);
            borrow = b;
        }
    }
}

impl<const W: usize, R: Register> Add<&R> for BitRegister<W> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &R) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const W: usize, R: Register> Add<&R> for &BitRegister<W> {
    type Output = BitRegister<W>;

    #[inline]
    fn add(self, rhs: &R) -> Self::Output {
        self.clone() + rhs
    }
}

impl<const W: usize, R: Register> Sub<&R> for BitRegister<W> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &R) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<const W: usize, R: Register> Sub<&R> for &BitRegister<W> {
    type Output = BitRegister<W>;

    #[inline]
    fn sub(self, rhs: &R) -> Self::Output {
        self.clone() - rhs
    }
}

impl<const W: usize> BitRegister<W> {
    /// Adds one, wrapping around to zero on overflow.
    ///
    /// Returns the incremented register.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += &BitRegister::<1>::from_unsigned(1u8);
        self
    }

    /// Adds one, wrapping around to zero on overflow.
    ///
    /// Returns a copy of the register before it was incremented.
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.increment();
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn adds_small_numbers() {
        let a = BitRegister::<8>::from(5u8);
        let b = BitRegister::<8>::from(3u8);
        assert_eq!((a + &b).to_bit_string(), "00001000");
    }

    #[proptest]
    fn addition_matches_wrapping_add(a: u64, b: u64) {
        let sum = BitRegister::<64>::from(a) + &BitRegister::<64>::from(b);
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b)));
    }

    #[proptest]
    fn addition_wraps_around_at_odd_widths(a: u16, b: u16) {
        let sum = BitRegister::<13>::from(a) + &BitRegister::<13>::from(b);
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b)));
    }

    #[proptest]
    fn addition_carries_across_words(a: u128, b: u128) {
        let sum = BitRegister::<128>::from(a) + &BitRegister::<128>::from(b);
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b)));
    }

    #[proptest]
    fn addition_is_commutative(a: BitRegister<70>, b: BitRegister<70>) {
        assert_eq!(&a + &b, &b + &a);
    }

    #[proptest]
    fn addition_is_associative(a: BitRegister<70>, b: BitRegister<70>, c: BitRegister<70>) {
        assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }

    #[proptest]
    fn zero_is_the_additive_identity(a: BitRegister<70>) {
        assert_eq!(&a + &BitRegister::<70>::new(), a);
    }

    #[proptest]
    fn addition_does_not_mutate_operands(a: BitRegister<70>, b: BitRegister<70>) {
        let (x, y) = (a.clone(), b.clone());
        let _ = &a + &b;
        assert_eq!(a, x);
        assert_eq!(b, y);
    }

    #[proptest]
    fn narrower_addend_is_zero_extended(a: u64, b: u8) {
        let sum = BitRegister::<64>::from(a) + &BitRegister::<8>::from(b);
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b.into())));
    }

    #[proptest]
    fn wider_addend_is_truncated(a: u8, b: u64) {
        let sum = BitRegister::<8>::from(a) + &BitRegister::<64>::from(b);
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b as u8)));
    }

    #[proptest]
    fn primitive_integers_can_be_added(a: u32, b: u16) {
        let mut sum = BitRegister::<32>::from(a);
        sum += &b;
        assert_eq!(sum, BitRegister::from(a.wrapping_add(b.into())));
    }

    #[proptest]
    fn cross_width_addition_is_not_commutative() {
        let a = BitRegister::<4>::from(15u8);
        let b = BitRegister::<8>::from(1u8);
        assert_eq!((&a + &b).to_bit_string(), "0000");
        assert_eq!((&b + &a).to_bit_string(), "00010000");
    }

    #[proptest]
    fn subtraction_matches_wrapping_sub(a: u64, b: u64) {
        let diff = BitRegister::<64>::from(a) - &BitRegister::<64>::from(b);
        assert_eq!(diff, BitRegister::from(a.wrapping_sub(b)));
    }

    #[proptest]
    fn subtraction_borrows_across_words(a: u128, b: u128) {
        let diff = BitRegister::<128>::from(a) - &BitRegister::<128>::from(b);
        assert_eq!(diff, BitRegister::from(a.wrapping_sub(b)));
    }

    #[proptest]
    fn subtraction_inverts_addition(a: BitRegister<70>, b: BitRegister<70>) {
        assert_eq!(&(&a + &b) - &b, a);
    }

    #[proptest]
    fn subtracting_itself_yields_zero(a: BitRegister<70>) {
        assert!((&a - &a.clone()).is_zero());
    }

    #[proptest]
    fn subtraction_wraps_around() {
        let zero = BitRegister::<12>::new();
        let one = BitRegister::<12>::from(1u8);
        assert_eq!((zero - &one).to_bit_string(), "1".repeat(12));
    }

    #[proptest]
    fn narrower_subtrahend_is_zero_extended(a: u64, b: i8) {
        let diff = BitRegister::<64>::from(a) - &BitRegister::<8>::from(b);
        assert_eq!(diff, BitRegister::from(a.wrapping_sub(b as u8 as u64)));
    }

    #[proptest]
    fn wider_subtrahend_is_truncated(a: u8, b: u64) {
        let diff = BitRegister::<8>::from(a) - &BitRegister::<64>::from(b);
        assert_eq!(diff, BitRegister::from(a.wrapping_sub(b as u8)));
    }

    #[proptest]
    fn increment_adds_one(a: u32) {
        let mut r = BitRegister::<32>::from(a);
        assert_eq!(*r.increment(), BitRegister::from(a.wrapping_add(1)));
    }

    #[proptest]
    fn increment_wraps_around() {
        let mut r = BitRegister::<4>::from(15u8);
        assert_eq!(r.increment().to_bit_string(), "0000");
    }

    #[proptest]
    fn increment_wraps_around_at_any_width() {
        let mut r = BitRegister::<130>::new();
        r.invert();
        assert!(r.increment().is_zero());
    }

    #[proptest]
    fn post_increment_returns_previous_value(a: BitRegister<70>) {
        let mut r = a.clone();
        assert_eq!(r.post_increment(), a);
        assert_eq!(r, a + &1u8);
    }
}
