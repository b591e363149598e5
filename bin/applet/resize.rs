use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::instrument;

/// Copies an operand into a register of another width.
///
/// Growing zero extends, shrinking discards the most significant bits.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Resize {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// The target register width in bits.
    #[clap(long)]
    to: Width,

    /// The operand to resize.
    value: Operand,
}

impl Resize {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let register: BitRegister<W> = self.value.load()?;
            with_width!(self.to, |N| println!("{}", register.resize::<N>()));
        });

        Ok(())
    }
}
