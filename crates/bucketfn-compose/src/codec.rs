//! Conversion between typed descriptors and generic documents.
//!
//! This is the only place the kind-agnostic document form meets the typed
//! model. Field names pass through unchanged in both directions.

use std::collections::BTreeMap;

use bucketfn_common::error::{BucketError, Result};
use bucketfn_common::types::{Document, ResourceName};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{
    Account, ComposedResource, CompositeBucket, Container, DesiredComposed, ResourceGroup,
    ResourceKind,
};

/// Serializes any typed value into a document.
///
/// # Errors
///
/// Returns an error if the value does not serialize to a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected an object, got {other}"
        ))
        .into()),
    }
}

/// Deserializes a document into a typed value.
///
/// # Errors
///
/// Returns an error if the document does not match the target shape.
pub fn from_document<T: DeserializeOwned>(doc: &Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(doc.clone()))?)
}

/// Decodes the observed composite resource.
///
/// # Errors
///
/// Returns an error if a known field has the wrong type.
pub fn composite_from_document(doc: &Document) -> Result<CompositeBucket> {
    from_document(doc)
}

/// Decodes a composed resource, dispatching on its `apiVersion` and `kind`.
///
/// # Errors
///
/// Returns [`BucketError::UnsupportedResource`] for unknown kinds, or a
/// serialization error if the document does not match its kind.
pub fn resource_from_document(doc: &Document) -> Result<ComposedResource> {
    let field = |key: &str| doc.get(key).and_then(Value::as_str).unwrap_or_default();
    let (api_version, kind) = (field("apiVersion"), field("kind"));

    match ResourceKind::from_type_meta(api_version, kind) {
        Some(ResourceKind::ResourceGroup) => Ok(from_document::<ResourceGroup>(doc)?.into()),
        Some(ResourceKind::Account) => Ok(from_document::<Account>(doc)?.into()),
        Some(ResourceKind::Container) => Ok(from_document::<Container>(doc)?.into()),
        None => Err(BucketError::UnsupportedResource {
            api_version: api_version.to_string(),
            kind: kind.to_string(),
        }),
    }
}

/// Encodes every desired resource, keyed by logical name.
///
/// # Errors
///
/// Returns the first failure, wrapped with the name of the resource.
pub fn desired_to_documents(
    desired: &DesiredComposed,
) -> Result<BTreeMap<ResourceName, Document>> {
    desired
        .iter()
        .map(|(name, resource)| {
            to_document(resource)
                .map(|doc| (name.clone(), doc))
                .map_err(|e| e.context(format!("cannot convert {name} to unstructured")))
        })
        .collect()
}
