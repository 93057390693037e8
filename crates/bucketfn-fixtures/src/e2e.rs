//! `E2ETest` manifests that deploy a real bucket against Azure.

use std::collections::BTreeMap;

use bucketfn_common::constants::{
    PROVIDER_CONFIG_API_VERSION, PROVIDER_CONFIG_KIND, TEST_META_API_VERSION,
};
use bucketfn_common::error::Result;
use bucketfn_common::types::Document;
use bucketfn_compose::codec;
use bucketfn_compose::model::{CompositeBucket, ObjectMeta};
use serde::{Deserialize, Serialize};

use crate::credentials::CloudCredentials;

/// Kind of an end-to-end test manifest.
pub const E2E_TEST_KIND: &str = "E2ETest";

/// Namespace holding the provider credentials secret.
pub const CREDENTIALS_NAMESPACE: &str = "upbound-system";
/// Name of the provider credentials secret.
pub const CREDENTIALS_SECRET_NAME: &str = "azure-creds";
/// Key of the credentials inside the secret.
pub const CREDENTIALS_KEY: &str = "credentials";

/// `meta.dev.upbound.io/v1alpha1` `E2ETest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct E2ETest {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    pub metadata: ObjectMeta,
    /// Test definition.
    pub spec: E2ETestSpec,
}

/// Spec of an [`E2ETest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct E2ETestSpec {
    /// Crossplane installation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossplane: Option<CrossplaneSettings>,
    /// Conditions every manifest must reach.
    pub default_conditions: Vec<String>,
    /// Resources under test.
    pub manifests: Vec<Document>,
    /// Supporting resources applied first.
    pub extra_resources: Vec<Document>,
    /// Leave resources behind after the test.
    pub skip_delete: bool,
    /// Overall test timeout.
    pub timeout_seconds: u32,
}

/// Crossplane installation settings of an [`E2ETest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossplaneSettings {
    /// Upgrade channel.
    pub auto_upgrade: AutoUpgrade,
}

/// Automatic upgrade channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoUpgrade {
    /// Channel name, e.g. `Rapid` or `Stable`.
    pub channel: String,
}

/// Core `v1` `Secret` with string data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    pub metadata: ObjectMeta,
    /// Unencoded secret data.
    pub string_data: BTreeMap<String, String>,
}

/// Azure `ProviderConfig` reading credentials from a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    pub metadata: ObjectMeta,
    /// Credential source.
    pub spec: ProviderConfigSpec,
}

/// Spec of a [`ProviderConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfigSpec {
    /// Where credentials come from.
    pub credentials: ProviderCredentials,
}

/// Credential source of a [`ProviderConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// Source type; always `Secret` here.
    pub source: String,
    /// The secret key holding the credentials.
    pub secret_ref: SecretKeyRef,
}

/// Reference to one key of a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKeyRef {
    /// Secret namespace.
    pub namespace: String,
    /// Secret name.
    pub name: String,
    /// Key within the secret.
    pub key: String,
}

/// Knobs of an end-to-end test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E2ETestOptions {
    /// Name of the test manifest.
    pub name: String,
    /// Overall test timeout.
    pub timeout_seconds: u32,
    /// Leave resources behind after the test.
    pub skip_delete: bool,
    /// Crossplane auto-upgrade channel, if pinned.
    pub upgrade_channel: Option<String>,
}

impl Default for E2ETestOptions {
    fn default() -> Self {
        Self {
            name: "e2etest-bucket".into(),
            // Real Azure resources take minutes to become ready.
            timeout_seconds: 600,
            skip_delete: false,
            upgrade_channel: None,
        }
    }
}

/// Secret carrying the provider credentials.
#[must_use]
pub fn credentials_secret(credentials: &CloudCredentials) -> Secret {
    Secret {
        api_version: "v1".into(),
        kind: "Secret".into(),
        metadata: ObjectMeta {
            namespace: Some(CREDENTIALS_NAMESPACE.into()),
            ..ObjectMeta::named(CREDENTIALS_SECRET_NAME)
        },
        string_data: BTreeMap::from([(CREDENTIALS_KEY.into(), credentials.expose().into())]),
    }
}

/// Default provider config pointing at [`credentials_secret`].
#[must_use]
pub fn provider_config() -> ProviderConfig {
    ProviderConfig {
        api_version: PROVIDER_CONFIG_API_VERSION.into(),
        kind: PROVIDER_CONFIG_KIND.into(),
        metadata: ObjectMeta::named("default"),
        spec: ProviderConfigSpec {
            credentials: ProviderCredentials {
                source: "Secret".into(),
                secret_ref: SecretKeyRef {
                    namespace: CREDENTIALS_NAMESPACE.into(),
                    name: CREDENTIALS_SECRET_NAME.into(),
                    key: CREDENTIALS_KEY.into(),
                },
            },
        },
    }
}

/// Builds an end-to-end test deploying `composite`.
///
/// # Errors
///
/// Returns an error if a manifest cannot be converted to a document.
pub fn e2e_test(
    composite: &CompositeBucket,
    credentials: &CloudCredentials,
    options: &E2ETestOptions,
) -> Result<E2ETest> {
    tracing::debug!(name = %options.name, "generating e2e test");
    Ok(E2ETest {
        api_version: TEST_META_API_VERSION.into(),
        kind: E2E_TEST_KIND.into(),
        metadata: ObjectMeta::named(options.name.clone()),
        spec: E2ETestSpec {
            crossplane: options.upgrade_channel.as_ref().map(|channel| CrossplaneSettings {
                auto_upgrade: AutoUpgrade {
                    channel: channel.clone(),
                },
            }),
            default_conditions: vec!["Ready".into()],
            manifests: vec![codec::to_document(composite)?],
            extra_resources: vec![
                codec::to_document(&credentials_secret(credentials))?,
                codec::to_document(&provider_config())?,
            ],
            skip_delete: options.skip_delete,
            timeout_seconds: options.timeout_seconds,
        },
    })
}
