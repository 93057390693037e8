//! `CompositionTest` manifests asserting the composer's output.
//!
//! Assertions are produced by running the composer itself on the fixture
//! composite, so they always follow the same naming and ACL rules.

use bucketfn_common::constants::TEST_META_API_VERSION;
use bucketfn_common::error::Result;
use bucketfn_common::types::Document;
use bucketfn_compose::codec;
use bucketfn_compose::composer::Composer;
use bucketfn_compose::model::{CompositeBucket, ObjectMeta, ObservedComposed};
use serde::{Deserialize, Serialize};

/// Kind of a composition test manifest.
pub const COMPOSITION_TEST_KIND: &str = "CompositionTest";

/// `meta.dev.upbound.io/v1alpha1` `CompositionTest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionTest {
    /// API version.
    pub api_version: String,
    /// Kind.
    pub kind: String,
    /// Object metadata.
    pub metadata: ObjectMeta,
    /// Test definition.
    pub spec: CompositionTestSpec,
}

/// Spec of a [`CompositionTest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionTestSpec {
    /// Resources the rendered composition must contain.
    pub assert_resources: Vec<Document>,
    /// Path of the composition under test.
    pub composition_path: String,
    /// Path of the composite manifest to render.
    pub xr_path: String,
    /// Path of the composite resource definition.
    pub xrd_path: String,
    /// Render timeout.
    pub timeout_seconds: u32,
    /// Validate rendered resources against their schemas.
    pub validate: bool,
}

/// Paths and limits of a composition test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionTestOptions {
    /// Name of the test manifest.
    pub name: String,
    /// Path of the composition under test.
    pub composition_path: String,
    /// Path of the composite manifest to render.
    pub xr_path: String,
    /// Path of the composite resource definition.
    pub xrd_path: String,
    /// Render timeout.
    pub timeout_seconds: u32,
    /// Validate rendered resources against their schemas.
    pub validate: bool,
}

impl Default for CompositionTestOptions {
    fn default() -> Self {
        Self {
            name: "test-xstoragebucket".into(),
            composition_path: "apis/xstoragebuckets/composition.yaml".into(),
            xr_path: "examples/xstoragebuckets/example.yaml".into(),
            xrd_path: "apis/xstoragebuckets/definition.yaml".into(),
            timeout_seconds: 120,
            validate: false,
        }
    }
}

/// Builds a composition test for `composite`.
///
/// Assertions are listed in dependency order: resource group, account,
/// container.
///
/// # Errors
///
/// Returns an error if the fixture composite does not compose.
pub fn composition_test(
    composite: &CompositeBucket,
    options: &CompositionTestOptions,
) -> Result<CompositionTest> {
    tracing::debug!(name = %options.name, "generating composition test");
    let composition = Composer::default()
        .compose(composite, &ObservedComposed::new())
        .map_err(|e| e.context("cannot compose fixture composite"))?;

    let assert_resources = composition
        .in_order()
        .map(|(name, resource)| {
            codec::to_document(resource)
                .map_err(|e| e.context(format!("cannot convert {name} to assertion")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CompositionTest {
        api_version: TEST_META_API_VERSION.into(),
        kind: COMPOSITION_TEST_KIND.into(),
        metadata: ObjectMeta::named(options.name.clone()),
        spec: CompositionTestSpec {
            assert_resources,
            composition_path: options.composition_path.clone(),
            xr_path: options.xr_path.clone(),
            xrd_path: options.xrd_path.clone(),
            timeout_seconds: options.timeout_seconds,
            validate: options.validate,
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::composite;

    #[test]
    fn assertions_follow_composer_rules() {
        let test = composition_test(&composite::example(), &CompositionTestOptions::default())
            .expect("generate");
        let kinds: Vec<&str> = test
            .spec
            .assert_resources
            .iter()
            .filter_map(|r| r["kind"].as_str())
            .collect();
        assert_eq!(kinds, vec!["ResourceGroup", "Account", "Container"]);

        let account = &test.spec.assert_resources[1];
        assert_eq!(account["metadata"]["name"], "example");
        assert_eq!(
            account["spec"]["forProvider"]["blobProperties"],
            json!([{ "versioningEnabled": true }])
        );
        let container = &test.spec.assert_resources[2];
        assert_eq!(container["spec"]["forProvider"]["containerAccessType"], "blob");
    }

    #[test]
    fn options_are_copied() {
        let options = CompositionTestOptions {
            timeout_seconds: 30,
            validate: true,
            ..CompositionTestOptions::default()
        };
        let test = composition_test(&composite::example(), &options).expect("generate");
        assert_eq!(test.api_version, "meta.dev.upbound.io/v1alpha1");
        assert_eq!(test.kind, "CompositionTest");
        assert_eq!(test.spec.timeout_seconds, 30);
        assert!(test.spec.validate);
        assert_eq!(test.spec.xr_path, "examples/xstoragebuckets/example.yaml");
    }

    #[test]
    fn invalid_fixture_is_reported() {
        let mut xr = composite::example();
        xr.spec.parameters.location = None;
        let err = composition_test(&xr, &CompositionTestOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot compose fixture composite: missing location parameter"
        );
    }
}
