use derive_more::{Display, Error};
use lib::register::{BitRegister, ParseBitRegisterError};
use std::str::FromStr;
use tracing::instrument;

/// A register value given on the command line.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Operand {
    /// A decimal number.
    Decimal(u128),
    /// Binary digits, most significant first.
    Binary(String),
}

/// The reason why parsing [`Operand`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a decimal number or binary digits prefixed by `0b`")]
pub struct ParseOperandError;

impl FromStr for Operand {
    type Err = ParseOperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("0b") {
            Some(d) if !d.is_empty() && d.chars().all(|c| c == '0' || c == '1') => {
                Ok(Operand::Binary(d.into()))
            }

            Some(_) => Err(ParseOperandError),
            None => s.parse().map(Operand::Decimal).map_err(|_| ParseOperandError),
        }
    }
}

impl Operand {
    /// Loads the operand into a register of width `W`.
    ///
    /// Decimal numbers wider than `W` are truncated, binary digits must fit.
    #[instrument(level = "trace", err)]
    pub fn load<const W: usize>(&self) -> Result<BitRegister<W>, ParseBitRegisterError> {
        match self {
            Operand::Decimal(n) => Ok(BitRegister::<128>::from(*n).resize()),
            Operand::Binary(d) => d.parse(),
        }
    }
}
