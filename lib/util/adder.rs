/// A one bit [full adder].
///
/// Returns the sum bit and the carry out.
///
/// [full adder]: https://en.wikipedia.org/wiki/Adder_(electronics)#Full_adder
#[inline(always)]
pub fn full_add(a: bool, b: bool, carry: bool) -> (bool, bool) {
    let sum = a as u8 + b as u8 + carry as u8;
    (sum & 1 != 0, sum >= 2)
}

/// A one bit [full subtractor].
///
/// Returns the difference bit and the borrow out.
///
/// [full subtractor]: https://en.wikipedia.org/wiki/Subtractor#Full_subtractor
#[inline(always)]
pub fn full_sub(a: bool, b: bool, borrow: bool) -> (bool, bool) {
    let diff = a as i8 - b as i8 - borrow as i8;
    (diff & 1 != 0, diff < 0)
}
