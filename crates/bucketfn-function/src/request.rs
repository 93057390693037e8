//! The invocation request and the state it carries.

use std::collections::BTreeMap;

use bucketfn_common::error::{BucketError, Result};
use bucketfn_common::types::{Document, ResourceName};
use bucketfn_compose::codec;
use bucketfn_compose::model::{CompositeBucket, ObservedComposed};
use serde::{Deserialize, Serialize};

/// A request to run the function once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFunctionRequest {
    /// Request metadata.
    #[serde(default)]
    pub meta: RequestMeta,
    /// What the controller observed in the cluster.
    #[serde(default)]
    pub observed: State,
    /// Desired state accumulated by earlier functions in the pipeline.
    #[serde(default)]
    pub desired: State,
    /// Free-form function input from the composition. Unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Document>,
}

/// Request metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMeta {
    /// Correlation tag, echoed back in the response.
    #[serde(default)]
    pub tag: String,
}

/// A composite resource and its composed resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// The composite resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite: Option<Resource>,
    /// Composed resources keyed by logical name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<ResourceName, Resource>,
}

/// One resource as a generic document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// The resource body.
    #[serde(default)]
    pub resource: Document,
    /// Readiness override for composed resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready: Option<Ready>,
}

impl From<Document> for Resource {
    fn from(resource: Document) -> Self {
        Self {
            resource,
            ready: None,
        }
    }
}

/// Readiness of a composed resource as reported by a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ready {
    /// Let the controller decide.
    #[serde(rename = "READY_UNSPECIFIED")]
    Unspecified,
    /// The resource is ready.
    #[serde(rename = "READY_TRUE")]
    True,
    /// The resource is not ready.
    #[serde(rename = "READY_FALSE")]
    False,
}

impl RunFunctionRequest {
    /// Decodes the observed composite resource.
    ///
    /// # Errors
    ///
    /// Fails with `cannot get xr` if the request has no composite, or with
    /// `cannot convert xr` if the document does not match the bucket shape.
    pub fn observed_composite(&self) -> Result<CompositeBucket> {
        let composite = self
            .observed
            .composite
            .as_ref()
            .ok_or_else(|| BucketError::MissingComposite.context("cannot get xr"))?;
        codec::composite_from_document(&composite.resource)
            .map_err(|e| e.context("cannot convert xr"))
    }

    /// Returns the observed composed resources as opaque documents.
    #[must_use]
    pub fn observed_composed(&self) -> ObservedComposed {
        self.observed
            .resources
            .iter()
            .map(|(name, r)| (name.clone(), r.resource.clone()))
            .collect()
    }
}
