use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stderr, IsTerminal};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Fixed width bit register calculator.
///
/// Results are printed to stdout as binary digits, most significant first.
/// Diagnostics are logged to stderr.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Applet,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(Level::WARN);

        let writer = layer()
            .compact()
            .with_target(false)
            .with_ansi(stderr().is_terminal())
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).try_init()?;

        self.applet.execute()
    }
}
