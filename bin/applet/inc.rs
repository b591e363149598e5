use crate::{operand::Operand, width::*};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::register::BitRegister;
use tracing::{debug, instrument};

/// Increments an operand, wrapping around on overflow.
#[derive(Debug, Parser)]
#[clap(disable_version_flag = true)]
pub struct Inc {
    /// The register width in bits.
    #[clap(short, long, default_value_t)]
    width: Width,

    /// How many times to increment.
    #[clap(short, long, default_value_t = 1)]
    times: usize,

    /// The operand to increment.
    value: Operand,
}

impl Inc {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        with_width!(self.width, |W| {
            let mut register: BitRegister<W> = self.value.load()?;
            for _ in 0..self.times {
                let previous = register.post_increment();
                debug!(%previous, current = %register);
            }

            println!("{register}");
        });

        Ok(())
    }
}
