//! Function configuration model.
//!
//! All configuration is driven by environment variables and is read once,
//! at construction of the runner. The composer itself never reads the
//! environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BucketError, Result};
use crate::types::Ttl;

/// Environment variable overriding the response TTL in seconds.
pub const TTL_ENV: &str = "BUCKETFN_TTL_SECS";
/// Environment variable enabling strict storage account name checks.
pub const STRICT_ACCOUNT_NAMES_ENV: &str = "BUCKETFN_STRICT_ACCOUNT_NAMES";
/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "BUCKETFN_LOG_FORMAT";

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line events.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = BucketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(BucketError::Config {
                message: format!("unknown log format \"{other}\" (expected compact or json)"),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Root configuration for the composition function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FunctionConfig {
    /// Seconds a caller may cache a response before re-invoking.
    pub ttl_secs: u64,
    /// Reject derived storage account names the provider would refuse.
    pub strict_account_names: bool,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: crate::constants::DEFAULT_TTL_SECS,
            strict_account_names: false,
            log_format: LogFormat::default(),
        }
    }
}

impl FunctionConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(TTL_ENV) {
            config.ttl_secs = v.trim().parse().map_err(|_| BucketError::Config {
                message: format!("{TTL_ENV} must be a whole number of seconds, got \"{v}\""),
            })?;
        }
        if let Some(v) = lookup(STRICT_ACCOUNT_NAMES_ENV) {
            config.strict_account_names = parse_flag(STRICT_ACCOUNT_NAMES_ENV, &v)?;
        }
        if let Some(v) = lookup(LOG_FORMAT_ENV) {
            config.log_format = v.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for values the runner cannot honor.
    ///
    /// # Errors
    ///
    /// Returns an error if the TTL is zero.
    pub fn validate(&self) -> Result<()> {
        if self.ttl_secs == 0 {
            return Err(BucketError::Config {
                message: "ttl_secs must be > 0".into(),
            });
        }
        Ok(())
    }

    /// Returns the configured response TTL.
    #[must_use]
    pub const fn ttl(&self) -> Ttl {
        Ttl::from_secs(self.ttl_secs)
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(BucketError::Config {
            message: format!("{var} must be one of 1, 0, true, false, got \"{value}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = FunctionConfig::default();
        assert_eq!(config.ttl_secs, 60);
        assert!(!config.strict_account_names);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn empty_environment_yields_default() {
        let config = FunctionConfig::from_lookup(lookup_from(&[])).expect("load");
        assert_eq!(config, FunctionConfig::default());
    }

    #[test]
    fn environment_overrides_apply() {
        let config = FunctionConfig::from_lookup(lookup_from(&[
            (TTL_ENV, "120"),
            (STRICT_ACCOUNT_NAMES_ENV, "TRUE"),
            (LOG_FORMAT_ENV, "json"),
        ]))
        .expect("load");
        assert_eq!(config.ttl(), Ttl::from_secs(120));
        assert!(config.strict_account_names);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unparsable_ttl_is_rejected() {
        let err = FunctionConfig::from_lookup(lookup_from(&[(TTL_ENV, "soon")])).unwrap_err();
        assert!(err.to_string().contains(TTL_ENV), "got: {err}");
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let err = FunctionConfig::from_lookup(lookup_from(&[(TTL_ENV, "0")])).unwrap_err();
        assert!(err.to_string().contains("ttl_secs must be > 0"), "got: {err}");
    }

    fn strict_from(value: &str) -> Result<FunctionConfig> {
        FunctionConfig::from_lookup(lookup_from(&[(STRICT_ACCOUNT_NAMES_ENV, value)]))
    }

    #[test]
    fn strict_names_flag_accepts_false_spellings() {
        for value in ["0", "false", "FALSE"] {
            let config = strict_from(value).expect("load");
            assert!(!config.strict_account_names, "value: {value}");
        }
        assert!(strict_from("1").expect("load").strict_account_names);
    }

    #[test]
    fn unknown_strict_names_flag_is_rejected() {
        for value in ["yes", "on", ""] {
            let err = strict_from(value).unwrap_err();
            assert!(err.to_string().contains(STRICT_ACCOUNT_NAMES_ENV), "got: {err}");
        }
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!("JSON".parse::<LogFormat>().expect("parse"), LogFormat::Json);
    }
}
