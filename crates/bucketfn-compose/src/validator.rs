//! Validation of composite parameters before any resource is built.

use bucketfn_common::error::{BucketError, Result};

use crate::model::BucketParameters;

/// Validates bucket parameters and returns the required location.
///
/// # Checks performed
///
/// 1. `location` is present.
/// 2. `location` is not the empty string.
///
/// `acl` and `versioning` are never rejected: unknown ACLs degrade to
/// private and versioning is passed through as given.
///
/// # Errors
///
/// Returns [`BucketError::MissingParameter`] if a check fails.
pub fn validate(params: &BucketParameters) -> Result<&str> {
    tracing::debug!("validating bucket parameters");
    check_location(params)
}

fn check_location(params: &BucketParameters) -> Result<&str> {
    match params.location.as_deref() {
        Some(location) if !location.is_empty() => Ok(location),
        _ => Err(BucketError::MissingParameter { name: "location" }),
    }
}
