//! Domain primitive types used across the bucketfn workspace.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A generic structured document, the kind-agnostic boundary format.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Logical name of a composed resource within one composite (e.g. `"rg"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(String);

impl ResourceName {
    /// Creates a resource name from a string value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How long a caller may cache a function response.
///
/// Serialized as a protobuf JSON duration: whole seconds followed by `s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ttl(Duration);

impl Ttl {
    /// Creates a TTL from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Returns the TTL as a standard duration.
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Parses the protobuf JSON form, e.g. `"60s"` or `"1.5s"`.
    ///
    /// Fractional seconds are truncated to milliseconds.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let secs = s.strip_suffix('s')?;
        let value: f64 = secs.parse().ok()?;
        let d = Duration::try_from_secs_f64(value).ok()?;
        Some(Self(Duration::new(d.as_secs(), d.subsec_millis() * 1_000_000)))
    }
}

impl Default for Ttl {
    fn default() -> Self {
        Self::from_secs(crate::constants::DEFAULT_TTL_SECS)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = self.0.subsec_millis();
        if millis == 0 {
            write!(f, "{}s", self.0.as_secs())
        } else {
            write!(f, "{}.{millis:03}s", self.0.as_secs())
        }
    }
}

impl Serialize for Ttl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ttl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid duration \"{raw}\"")))
    }
}
