use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::instrument;

/// Reads or writes a single bit of an operand.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Bit {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// Writes this bit and prints the resulting register instead.
    #[clap(short, long, value_parser = clap::value_parser!(u8).range(0..=1))]
    set: Option<u8>,

    /// The operand.
    value: Operand,

    /// The index of the bit, counting from the least significant.
    index: usize,
}

impl Bit {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let mut register: BitRegister<W> = self.value.load()?;
            match self.set {
                None => println!("{}", u8::from(register.get(self.index))),
                Some(b) => {
                    register.set(self.index, b != 0)?;
                    println!("{register}");
                }
            }
        });

        Ok(())
    }
}
