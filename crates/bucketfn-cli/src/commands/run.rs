//! `bucketfn run` — Run the function against a request manifest.

use std::path::PathBuf;

use bucketfn_common::config::FunctionConfig;
use bucketfn_function::request::RunFunctionRequest;
use bucketfn_function::runner::FunctionRunner;
use clap::Args;

use crate::output::{self, OutputFormat};

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// RunFunctionRequest file in YAML or JSON; `-` reads stdin.
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Output format of the response.
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// Executes the `run` command.
///
/// A fatal function result is part of the response, not a command error.
///
/// # Errors
///
/// Returns an error if the request cannot be read or parsed.
pub fn execute(args: &RunArgs, config: &FunctionConfig) -> anyhow::Result<String> {
    let origin = args
        .request
        .as_ref()
        .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());
    let text = output::read_source(args.request.as_deref())?;
    let req: RunFunctionRequest = output::parse(&text, &origin)?;

    let rsp = FunctionRunner::new(config).run_function(&req);
    if rsp.is_fatal() {
        tracing::warn!(tag = %req.meta.tag, "function returned a fatal result");
    }
    output::render(&rsp, args.output)
}
