use super::BitRegister;
use derive_more::{Display, Error};
use std::str::FromStr;

/// The reason why parsing [`BitRegister`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseBitRegisterError {
    #[display(fmt = "expected at least one binary digit")]
    Empty,
    #[display(fmt = "`{digit}` is not a binary digit")]
    InvalidDigit { digit: char },
    #[display(fmt = "{digits} binary digits do not fit in {width} bits")]
    TooWide { digits: usize, width: usize },
}

/// Parses binary digits, most significant first.
///
/// Fewer than `W` digits are zero extended.
impl<const W: usize> FromStr for BitRegister<W> {
    type Err = ParseBitRegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.chars().count();

        if digits == 0 {
            return Err(ParseBitRegisterError::Empty);
        } else if digits > W {
            return Err(ParseBitRegisterError::TooWide { digits, width: W });
        }

        let mut register = Self::new();
        for (bit, digit) in s.chars().rev().enumerate() {
            match digit {
                '0' => {}
                '1' => register.put(bit, true),
                digit => return Err(ParseBitRegisterError::InvalidDigit { digit }),
            }
        }

        Ok(register)
    }
}
