//! Fixture composites used by the generated test manifests.

use bucketfn_common::constants::{XR_API_VERSION, XR_KIND};
use bucketfn_compose::model::composite::CompositeBucketSpec;
use bucketfn_compose::model::{BucketParameters, CompositeBucket, ObjectMeta};

/// Builds an `XStorageBucket` with explicit API identity.
#[must_use]
pub fn storage_bucket(
    name: &str,
    location: &str,
    acl: &str,
    versioning: bool,
) -> CompositeBucket {
    CompositeBucket {
        api_version: Some(XR_API_VERSION.into()),
        kind: Some(XR_KIND.into()),
        metadata: ObjectMeta::named(name),
        spec: CompositeBucketSpec {
            parameters: BucketParameters {
                location: Some(location.into()),
                acl: Some(acl.into()),
                versioning: Some(versioning),
            },
        },
    }
}

/// The example composite rendered by composition tests.
#[must_use]
pub fn example() -> CompositeBucket {
    storage_bucket("example", "eastus", "public", true)
}

/// The composite deployed by end-to-end tests. Cluster scoped.
#[must_use]
pub fn e2e() -> CompositeBucket {
    storage_bucket("e2e-test-bucket", "eastus", "private", true)
}
