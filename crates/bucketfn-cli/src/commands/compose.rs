//! `bucketfn compose` — Compose desired resources from a composite manifest.

use std::path::PathBuf;

use bucketfn_common::config::FunctionConfig;
use bucketfn_common::types::{Document, ResourceName};
use bucketfn_compose::codec;
use bucketfn_compose::composer::{Composer, ComposerOptions};
use bucketfn_compose::model::{CompositeBucket, ObservedComposed};
use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};

/// Arguments for the `compose` command.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// XStorageBucket manifest in YAML or JSON; `-` reads stdin.
    pub file: PathBuf,

    /// Observed composed resources, keyed by name.
    #[arg(long)]
    pub observed: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// One desired resource in apply order.
#[derive(Debug, Serialize)]
pub struct PlannedResource {
    /// Logical resource name.
    pub name: ResourceName,
    /// The resource body.
    pub resource: Document,
}

/// Executes the `compose` command.
///
/// Resources are listed in dependency order so that every selector points
/// at a resource printed before it.
///
/// # Errors
///
/// Returns an error if an input cannot be read or the composite does not
/// compose.
pub fn execute(args: &ComposeArgs, config: &FunctionConfig) -> anyhow::Result<String> {
    let xr: CompositeBucket = output::parse(
        &output::read_source(Some(&args.file))?,
        &args.file.display().to_string(),
    )?;
    let observed: ObservedComposed = match &args.observed {
        Some(path) => output::parse(
            &output::read_source(Some(path))?,
            &path.display().to_string(),
        )?,
        None => ObservedComposed::new(),
    };

    let composition = Composer::new(ComposerOptions::from(config)).compose(&xr, &observed)?;
    for note in &composition.notes {
        tracing::info!(note = %note, "composer note");
    }

    let planned = composition
        .in_order()
        .map(|(name, resource)| {
            Ok(PlannedResource {
                name: name.clone(),
                resource: codec::to_document(resource)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    tracing::info!(resources = planned.len(), "composed desired resources");
    output::render(&planned, args.output)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    const XR: &str = "
apiVersion: platform.example.com/v1alpha1
kind: XStorageBucket
metadata:
  name: team-a-logs
spec:
  parameters:
    location: northeurope
    versioning: true
";

    fn compose(xr: &str, observed: Option<&str>, config: &FunctionConfig) -> anyhow::Result<Value> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("xr.yaml");
        std::fs::write(&file, xr)?;
        let observed = match observed {
            Some(contents) => {
                let path = dir.path().join("observed.yaml");
                std::fs::write(&path, contents)?;
                Some(path)
            }
            None => None,
        };
        let args = ComposeArgs {
            file,
            observed,
            output: OutputFormat::Json,
        };
        Ok(serde_json::from_str(&execute(&args, config)?)?)
    }

    #[test]
    fn resources_are_printed_in_dependency_order() {
        let planned = compose(XR, None, &FunctionConfig::default()).unwrap();
        let names: Vec<&str> = planned
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["name"].as_str())
            .collect();
        assert_eq!(names, vec!["rg", "account", "container"]);
        assert_eq!(planned[1]["resource"]["metadata"]["name"], "teamalogs");
        assert_eq!(
            planned[2]["resource"]["spec"]["forProvider"]["containerAccessType"],
            "private"
        );
    }

    #[test]
    fn observed_resources_do_not_change_output() {
        let observed = "
rg:
  apiVersion: azure.upbound.io/v1beta1
  kind: ResourceGroup
  metadata:
    annotations:
      crossplane.io/external-name: team-a-rg
";
        let config = FunctionConfig::default();
        assert_eq!(
            compose(XR, Some(observed), &config).unwrap(),
            compose(XR, None, &config).unwrap()
        );
    }

    #[test]
    fn missing_location_fails() {
        let err = compose("metadata:\n  name: x\n", None, &FunctionConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing location parameter");
    }

    #[test]
    fn strict_names_reject_long_account_names() {
        let xr = XR.replace("team-a-logs", "a-very-long-bucket-name-for-the-data-platform");
        let config = FunctionConfig {
            strict_account_names: true,
            ..FunctionConfig::default()
        };
        let err = compose(&xr, None, &config).unwrap_err();
        assert!(err.to_string().contains("invalid storage account name"));
    }
}
