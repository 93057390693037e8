//! Out-of-band provider credentials for end-to-end tests.

use std::fmt;

use bucketfn_common::constants::CLOUD_CREDENTIALS_ENV;
use bucketfn_common::error::{BucketError, Result};

/// Azure service principal credentials, kept opaque.
#[derive(Clone, PartialEq, Eq)]
pub struct CloudCredentials(String);

impl CloudCredentials {
    /// Wraps raw credentials.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Reads credentials from `UP_CLOUD_CREDENTIALS`.
    ///
    /// # Errors
    ///
    /// Returns an error explaining how to set the variable if it is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads credentials through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(CLOUD_CREDENTIALS_ENV) {
            Some(raw) if !raw.is_empty() => Ok(Self(raw)),
            _ => Err(BucketError::Config {
                message: format!(
                    "{CLOUD_CREDENTIALS_ENV} environment variable not set; \
                     export it with your Azure service principal credentials: \
                     export {CLOUD_CREDENTIALS_ENV}=$(cat azure-creds.json)"
                ),
            }),
        }
    }

    /// Returns the raw credential material.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CloudCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloudCredentials(<redacted>)")
    }
}
