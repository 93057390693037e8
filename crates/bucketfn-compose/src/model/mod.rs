//! Typed model of the composite and the composed resources.
//!
//! Field names serialize in camelCase exactly as the provider APIs spell
//! them, so a descriptor converts to a generic document without renaming.

pub mod azure;
pub mod composite;

use std::collections::BTreeMap;

use bucketfn_common::constants::{
    ACCOUNT_KIND, CONTAINER_KIND, RESOURCE_GROUP_API_VERSION, RESOURCE_GROUP_KIND,
    STORAGE_API_VERSION,
};
use bucketfn_common::types::{Document, ResourceName};
use serde::{Deserialize, Serialize};

pub use self::azure::{Account, Container, ResourceGroup};
pub use self::composite::{BucketParameters, CompositeBucket};

/// Standard object metadata, reduced to the fields the composer touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Object name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Object namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Annotations.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl ObjectMeta {
    /// Metadata carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns true when no field is set; such metadata is omitted on output.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.namespace.is_none()
            && self.annotations.is_empty()
            && self.labels.is_empty()
    }
}

/// A late-binding reference to a sibling resource.
///
/// The external controller resolves the selector to the name of the single
/// resource of the target kind that shares this resource's controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// Match the resource created by the same controlling composite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_controller_ref: Option<bool>,
    /// Match resources carrying all of these labels.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
}

impl Selector {
    /// A selector matching by controller reference only.
    #[must_use]
    pub fn controller_ref() -> Self {
        Self {
            match_controller_ref: Some(true),
            match_labels: BTreeMap::new(),
        }
    }
}

/// The kinds of composed resource this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// An Azure resource group.
    ResourceGroup,
    /// An Azure storage account.
    Account,
    /// A blob container inside a storage account.
    Container,
}

impl ResourceKind {
    /// The `apiVersion` attached to resources of this kind.
    #[must_use]
    pub const fn api_version(self) -> &'static str {
        match self {
            Self::ResourceGroup => RESOURCE_GROUP_API_VERSION,
            Self::Account | Self::Container => STORAGE_API_VERSION,
        }
    }

    /// The `kind` attached to resources of this kind.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::ResourceGroup => RESOURCE_GROUP_KIND,
            Self::Account => ACCOUNT_KIND,
            Self::Container => CONTAINER_KIND,
        }
    }

    /// Looks up a kind by its `apiVersion`/`kind` pair.
    #[must_use]
    pub fn from_type_meta(api_version: &str, kind: &str) -> Option<Self> {
        [Self::ResourceGroup, Self::Account, Self::Container]
            .into_iter()
            .find(|k| k.api_version() == api_version && k.kind() == kind)
    }
}

/// A composed resource descriptor, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ComposedResource {
    /// See [`ResourceGroup`].
    ResourceGroup(ResourceGroup),
    /// See [`Account`].
    Account(Account),
    /// See [`Container`].
    Container(Container),
}

impl ComposedResource {
    /// Kind of this descriptor.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::ResourceGroup(_) => ResourceKind::ResourceGroup,
            Self::Account(_) => ResourceKind::Account,
            Self::Container(_) => ResourceKind::Container,
        }
    }

    /// Name override, if the descriptor sets one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let metadata = match self {
            Self::ResourceGroup(r) => &r.metadata,
            Self::Account(r) => &r.metadata,
            Self::Container(r) => &r.metadata,
        };
        metadata.name.as_deref()
    }

    /// Kinds this descriptor binds to through its selectors.
    #[must_use]
    pub fn references(&self) -> Vec<ResourceKind> {
        match self {
            Self::ResourceGroup(_) => Vec::new(),
            Self::Account(a) => a
                .spec
                .for_provider
                .resource_group_name_selector
                .iter()
                .map(|_| ResourceKind::ResourceGroup)
                .collect(),
            Self::Container(c) => c
                .spec
                .for_provider
                .storage_account_name_selector
                .iter()
                .map(|_| ResourceKind::Account)
                .collect(),
        }
    }
}

impl From<ResourceGroup> for ComposedResource {
    fn from(r: ResourceGroup) -> Self {
        Self::ResourceGroup(r)
    }
}

impl From<Account> for ComposedResource {
    fn from(r: Account) -> Self {
        Self::Account(r)
    }
}

impl From<Container> for ComposedResource {
    fn from(r: Container) -> Self {
        Self::Container(r)
    }
}

/// Desired composed resources keyed by logical name.
pub type DesiredComposed = BTreeMap<ResourceName, ComposedResource>;

/// Previously materialized composed resources, as opaque documents.
pub type ObservedComposed = BTreeMap<ResourceName, Document>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_metadata_is_skipped() {
        assert!(ObjectMeta::default().is_empty());
        assert!(!ObjectMeta::named("x").is_empty());
    }

    #[test]
    fn controller_ref_selector_serializes_minimally() {
        let json = serde_json::to_value(Selector::controller_ref()).expect("serialize");
        assert_eq!(json, serde_json::json!({ "matchControllerRef": true }));
    }

    #[test]
    fn kind_lookup_by_type_meta() {
        assert_eq!(
            ResourceKind::from_type_meta("azure.upbound.io/v1beta1", "ResourceGroup"),
            Some(ResourceKind::ResourceGroup)
        );
        assert_eq!(
            ResourceKind::from_type_meta("storage.azure.upbound.io/v1beta1", "Container"),
            Some(ResourceKind::Container)
        );
        assert_eq!(
            ResourceKind::from_type_meta("azure.upbound.io/v1beta1", "Container"),
            None
        );
    }

    #[test]
    fn references_follow_selectors() {
        let rg = ComposedResource::from(ResourceGroup::new("eastus"));
        assert!(rg.references().is_empty());

        let account = ComposedResource::from(Account::new("acct", "eastus", None));
        assert_eq!(account.references(), vec![ResourceKind::ResourceGroup]);
        assert_eq!(account.name(), Some("acct"));

        let container = ComposedResource::from(Container::new("private"));
        assert_eq!(container.references(), vec![ResourceKind::Account]);
        assert_eq!(container.name(), None);
    }
}
