//! Log subscriber installation.

use bucketfn_common::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to stderr.
///
/// Filtering follows `RUST_LOG` and defaults to `info`.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}
