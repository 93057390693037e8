//! Input and output helpers for CLI commands.
//!
//! Manifests are read as YAML, which also accepts JSON, and rendered in
//! the format the caller asks for.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Rendering format for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Renders `value` in the requested format, newline-terminated.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let mut text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value).context("cannot render YAML")?,
        OutputFormat::Json => serde_json::to_string_pretty(value).context("cannot render JSON")?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Reads a manifest from `path`, or from stdin when absent or `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read {}", p.display())),
        _ => {
            let mut buf = String::new();
            let _ = std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

/// Parses a YAML or JSON manifest.
///
/// # Errors
///
/// Returns an error naming `origin` if the text does not match `T`.
pub fn parse<T: DeserializeOwned>(text: &str, origin: &str) -> anyhow::Result<T> {
    serde_yaml::from_str(text).with_context(|| format!("cannot parse {origin}"))
}
