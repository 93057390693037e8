//! The `XStorageBucket` composite resource.

use serde::{Deserialize, Serialize};

use super::ObjectMeta;

/// `platform.example.com/v1alpha1` `XStorageBucket`.
///
/// Every field is optional on input. Fields the composer does not read
/// (status, composition references) are ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeBucket {
    /// API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Object metadata.
    #[serde(default, skip_serializing_if = "ObjectMeta::is_empty")]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: CompositeBucketSpec,
}

/// Spec of a [`CompositeBucket`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeBucketSpec {
    /// User-facing bucket parameters.
    #[serde(default)]
    pub parameters: BucketParameters,
}

/// User-facing bucket parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketParameters {
    /// Azure region. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// `public` or `private`; anything else means private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
    /// Blob versioning. Unset leaves the provider default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning: Option<bool>,
}

impl CompositeBucket {
    /// Declared name of the composite, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    /// Shorthand for `spec.parameters`.
    #[must_use]
    pub const fn parameters(&self) -> &BucketParameters {
        &self.spec.parameters
    }
}
