use anyhow::Error as Anyhow;
use clap::Subcommand;

mod add;
mod bit;
mod inc;
mod not;
mod resize;
mod sub;

#[derive(Debug, Subcommand)]
pub enum Applet {
    Add(add::Add),
    Sub(sub::Sub),
    Not(not::Not),
    Inc(inc::Inc),
    Resize(resize::Resize),
    Bit(bit::Bit),
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Add(a) => a.execute(),
            Applet::Sub(a) => a.execute(),
            Applet::Not(a) => a.execute(),
            Applet::Inc(a) => a.execute(),
            Applet::Resize(a) => a.execute(),
            Applet::Bit(a) => a.execute(),
        }
    }
}
