use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::{info, instrument};

/// Adds two operands, wrapping around on overflow.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Add {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// The augend.
    lhs: Operand,

    /// The addend.
    rhs: Operand,
}

impl Add {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let lhs: BitRegister<W> = self.lhs.load()?;
            let rhs: BitRegister<W> = self.rhs.load()?;
            let sum = &lhs + &rhs;
            info!(%lhs, %rhs, %sum);
            println!("{sum}");
        });

        Ok(())
    }
}
