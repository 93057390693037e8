//! # bucketfn-fixtures
//!
//! Generators for the test manifests that exercise the storage bucket
//! composition.
//!
//! Handles:
//! - **Composite**: The example and end-to-end `XStorageBucket` fixtures.
//! - **Composition tests**: `CompositionTest` manifests with assertions
//!   rendered by the composer.
//! - **E2E tests**: `E2ETest` manifests with provider credentials wiring.
//! - **Credentials**: Loading provider credentials out of band.

pub mod composite;
pub mod composition_test;
pub mod credentials;
pub mod e2e;
pub mod manifest;
