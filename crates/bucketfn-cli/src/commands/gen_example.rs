//! `bucketfn gen-example` — Generate the example XStorageBucket manifest.

use bucketfn_fixtures::composite;
use clap::Args;

use crate::output::{self, OutputFormat};

/// Arguments for the `gen-example` command.
#[derive(Args, Debug)]
pub struct GenExampleArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Executes the `gen-example` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be rendered.
pub fn execute(args: &GenExampleArgs) -> anyhow::Result<String> {
    output::render(&composite::example(), args.output)
}
