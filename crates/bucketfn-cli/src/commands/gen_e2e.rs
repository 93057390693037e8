//! `bucketfn gen-e2e` — Generate the E2ETest manifest.

use bucketfn_fixtures::composite;
use bucketfn_fixtures::credentials::CloudCredentials;
use bucketfn_fixtures::e2e::{self, E2ETestOptions};
use bucketfn_fixtures::manifest::ItemList;
use clap::Args;

use crate::output::{self, OutputFormat};

/// Arguments for the `gen-e2e` command.
#[derive(Args, Debug)]
pub struct GenE2eArgs {
    /// Overall test timeout in seconds.
    #[arg(long, default_value_t = 600)]
    pub timeout_seconds: u32,

    /// Leave resources behind after the test.
    #[arg(long)]
    pub skip_delete: bool,

    /// Crossplane auto-upgrade channel, e.g. `Rapid`.
    #[arg(long)]
    pub channel: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Executes the `gen-e2e` command with credentials from the environment.
///
/// The test is wrapped in an `items` list like `gen-test` output.
///
/// # Errors
///
/// Returns an error if `UP_CLOUD_CREDENTIALS` is unset.
pub fn execute(args: &GenE2eArgs) -> anyhow::Result<String> {
    generate(args, &CloudCredentials::from_env()?)
}

fn generate(args: &GenE2eArgs, credentials: &CloudCredentials) -> anyhow::Result<String> {
    let options = E2ETestOptions {
        timeout_seconds: args.timeout_seconds,
        skip_delete: args.skip_delete,
        upgrade_channel: args.channel.clone(),
        ..E2ETestOptions::default()
    };
    let test = e2e::e2e_test(&composite::e2e(), credentials, &options)?;
    output::render(&ItemList::new(vec![test]), args.output)
}
