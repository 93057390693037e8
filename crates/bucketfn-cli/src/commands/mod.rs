//! CLI command definitions and dispatch.

pub mod compose;
pub mod gen_e2e;
pub mod gen_example;
pub mod run;

use std::io::Write;

use anyhow::Context;
use bucketfn_common::config::{FunctionConfig, LogFormat};
use clap::{Args, Parser, Subcommand};

/// bucketfn — Composition function for Azure storage buckets.
#[derive(Parser, Debug)]
#[command(name = bucketfn_common::constants::APP_NAME, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags overriding the environment configuration.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Log output format (compact or json).
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Seconds a caller may cache a response.
    #[arg(long, global = true)]
    pub ttl_secs: Option<u64>,

    /// Reject storage account names Azure would refuse.
    #[arg(long, global = true)]
    pub strict_account_names: bool,
}

impl GlobalArgs {
    /// Loads the environment configuration and applies flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment or the merged result is invalid.
    pub fn config(&self) -> anyhow::Result<FunctionConfig> {
        self.apply(FunctionConfig::from_env()?)
    }

    fn apply(&self, mut config: FunctionConfig) -> anyhow::Result<FunctionConfig> {
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        if let Some(ttl) = self.ttl_secs {
            config.ttl_secs = ttl;
        }
        if self.strict_account_names {
            config.strict_account_names = true;
        }
        config.validate().context("invalid command-line configuration")?;
        Ok(config)
    }
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the function against a RunFunctionRequest.
    Run(run::RunArgs),
    /// Compose desired resources directly from a composite manifest.
    Compose(compose::ComposeArgs),
    /// Generate the CompositionTest manifest.
    GenTest(gen_test::GenTestArgs),
    /// Generate the E2ETest manifest.
    GenE2e(gen_e2e::GenE2eArgs),
    /// Generate the example XStorageBucket manifest.
    GenExample(gen_example::GenExampleArgs),
}

/// Dispatches the parsed CLI command and writes its output to stdout.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli, config: &FunctionConfig) -> anyhow::Result<()> {
    let text = match cli.command {
        Command::Run(args) => run::execute(&args, config)?,
        Command::Compose(args) => compose::execute(&args, config)?,
        Command::GenTest(args) => gen_test::execute(&args)?,
        Command::GenE2e(args) => gen_e2e::execute(&args)?,
        Command::GenExample(args) => gen_example::execute(&args)?,
    };
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes()).context("cannot write output")?;
    stdout.flush().context("cannot write output")
}
