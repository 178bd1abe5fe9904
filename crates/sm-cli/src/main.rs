//! `strassen` - multiply two square integer matrices with Strassen's algorithm.
//!
//! Usage: `strassen [DEBUG] [DIMENSION] [INPUT]`, where DEBUG is a bitmask
//! of [`flags::DebugFlags`].

mod config;
mod flags;
mod logging;
mod run;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use crate::config::{Args, RunConfig};

fn main() -> Result<()> {
    logging::init_subscriber();

    let args = Args::parse();
    let config = RunConfig::from_args(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
