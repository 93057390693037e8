//! # bucketfn — storage bucket composition function CLI
//!
//! Runs the composition function against request files and generates the
//! test manifests that exercise it.

mod commands;
mod logging;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.global.config()?;
    logging::init(config.log_format)?;
    commands::execute(cli, &config)
}
