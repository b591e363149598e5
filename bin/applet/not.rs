use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::instrument;

/// Flips every bit of an operand.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Not {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// The operand to invert.
    value: Operand,
}

impl Not {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let register: BitRegister<W> = self.value.load()?;
            println!("{}", !register);
        });

        Ok(())
    }
}
