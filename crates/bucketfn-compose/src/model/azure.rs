//! Azure provider resources: resource group, storage account, container.

use bucketfn_common::constants::{ACCOUNT_REPLICATION_TYPE, ACCOUNT_TIER};
use serde::{Deserialize, Serialize};

use super::{ObjectMeta, ResourceKind, Selector};

/// `azure.upbound.io/v1beta1` `ResourceGroup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    #[serde(default, skip_serializing_if = "ObjectMeta::is_empty")]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: ResourceGroupSpec,
}

/// Spec of a [`ResourceGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupSpec {
    /// Provider-side configuration.
    #[serde(default)]
    pub for_provider: ResourceGroupParameters,
}

/// Provider-side configuration of a [`ResourceGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupParameters {
    /// Azure region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ResourceGroup {
    /// A resource group in `location`, named by the controller.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            api_version: ResourceKind::ResourceGroup.api_version().into(),
            kind: ResourceKind::ResourceGroup.kind().into(),
            metadata: ObjectMeta::default(),
            spec: ResourceGroupSpec {
                for_provider: ResourceGroupParameters {
                    location: Some(location.into()),
                },
            },
        }
    }
}

/// `storage.azure.upbound.io/v1beta1` `Account`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    #[serde(default, skip_serializing_if = "ObjectMeta::is_empty")]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: AccountSpec,
}

/// Spec of an [`Account`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSpec {
    /// Provider-side configuration.
    #[serde(default)]
    pub for_provider: AccountParameters,
}

/// Provider-side configuration of an [`Account`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParameters {
    /// Performance tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    /// Replication strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_replication_type: Option<String>,
    /// Azure region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Double encryption at the infrastructure layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_encryption_enabled: Option<bool>,
    /// Blob service settings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blob_properties: Vec<BlobProperties>,
    /// Resolved resource group name, filled in by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name: Option<String>,
    /// Binds `resource_group_name` to a sibling resource group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_group_name_selector: Option<Selector>,
}

/// Blob service settings of an [`Account`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobProperties {
    /// Keep previous blob versions. Unset leaves the provider default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning_enabled: Option<bool>,
}

impl Account {
    /// A standard LRS account with infrastructure encryption, bound to the
    /// resource group of the same composite.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        versioning: Option<bool>,
    ) -> Self {
        Self {
            api_version: ResourceKind::Account.api_version().into(),
            kind: ResourceKind::Account.kind().into(),
            metadata: ObjectMeta::named(name),
            spec: AccountSpec {
                for_provider: AccountParameters {
                    account_tier: Some(ACCOUNT_TIER.into()),
                    account_replication_type: Some(ACCOUNT_REPLICATION_TYPE.into()),
                    location: Some(location.into()),
                    infrastructure_encryption_enabled: Some(true),
                    blob_properties: vec![BlobProperties {
                        versioning_enabled: versioning,
                    }],
                    resource_group_name: None,
                    resource_group_name_selector: Some(Selector::controller_ref()),
                },
            },
        }
    }
}

/// `storage.azure.upbound.io/v1beta1` `Container`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    #[serde(default, skip_serializing_if = "ObjectMeta::is_empty")]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[serde(default)]
    pub spec: ContainerSpec,
}

/// Spec of a [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    /// Provider-side configuration.
    #[serde(default)]
    pub for_provider: ContainerParameters,
}

/// Provider-side configuration of a [`Container`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerParameters {
    /// Anonymous access level: `private`, `blob`, or `container`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_access_type: Option<String>,
    /// Resolved storage account name, filled in by the controller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_name: Option<String>,
    /// Binds `storage_account_name` to a sibling storage account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_account_name_selector: Option<Selector>,
}

impl Container {
    /// A container with the given access type, bound to the storage account
    /// of the same composite.
    #[must_use]
    pub fn new(access_type: impl Into<String>) -> Self {
        Self {
            api_version: ResourceKind::Container.api_version().into(),
            kind: ResourceKind::Container.kind().into(),
            metadata: ObjectMeta::default(),
            spec: ContainerSpec {
                for_provider: ContainerParameters {
                    container_access_type: Some(access_type.into()),
                    storage_account_name: None,
                    storage_account_name_selector: Some(Selector::controller_ref()),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resource_group_document_shape() {
        let json = serde_json::to_value(ResourceGroup::new("eastus")).expect("serialize");
        assert_eq!(
            json,
            json!({
                "apiVersion": "azure.upbound.io/v1beta1",
                "kind": "ResourceGroup",
                "spec": { "forProvider": { "location": "eastus" } }
            })
        );
    }

    #[test]
    fn account_omits_unset_versioning() {
        let json = serde_json::to_value(Account::new("acct", "eastus", None)).expect("serialize");
        assert_eq!(json["spec"]["forProvider"]["blobProperties"], json!([{}]));
        assert!(json["spec"]["forProvider"].get("resourceGroupName").is_none());
    }

    #[test]
    fn container_decodes_resolved_reference() {
        let doc = json!({
            "apiVersion": "storage.azure.upbound.io/v1beta1",
            "kind": "Container",
            "metadata": { "name": "bucket-x7k2p" },
            "spec": {
                "forProvider": {
                    "containerAccessType": "blob",
                    "storageAccountName": "examplexr",
                    "storageAccountNameSelector": { "matchControllerRef": true }
                }
            }
        });
        let container: Container = serde_json::from_value(doc).expect("deserialize");
        assert_eq!(
            container.spec.for_provider.storage_account_name.as_deref(),
            Some("examplexr")
        );
        assert_eq!(container.metadata.name.as_deref(), Some("bucket-x7k2p"));
    }
}
