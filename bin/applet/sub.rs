use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::{info, instrument};

/// Subtracts two operands, wrapping around on underflow.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Sub {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// The minuend.
    lhs: Operand,

    /// The subtrahend.
    rhs: Operand,
}

impl Sub {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let lhs: BitRegister<W> = self.lhs.load()?;
            let rhs: BitRegister<W> = self.rhs.load()?;
            let difference = &lhs - &rhs;
            info!(%lhs, %rhs, %difference);
            println!("{difference}");
        });

        Ok(())
    }
}
