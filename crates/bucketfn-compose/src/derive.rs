//! Field derivation rules shared by the composer and the fixture generators.

use std::fmt;

use bucketfn_common::constants::{ACCOUNT_NAME_MAX_LEN, ACCOUNT_NAME_MIN_LEN, ACL_PUBLIC};
use bucketfn_common::error::{BucketError, Result};

/// Anonymous access level of a storage container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerAccessType {
    /// No anonymous access.
    Private,
    /// Anonymous read access to blobs.
    Blob,
}

impl ContainerAccessType {
    /// Maps the composite's `acl` parameter to an access type.
    ///
    /// Only `"public"` grants blob access. Absent, empty, and unknown values
    /// degrade to private rather than failing.
    #[must_use]
    pub fn from_acl(acl: Option<&str>) -> Self {
        match acl {
            Some(ACL_PUBLIC) => Self::Blob,
            _ => Self::Private,
        }
    }

    /// Provider spelling of the access type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for ContainerAccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives the storage account name from the composite's name.
///
/// Removes every hyphen and nothing else. No case folding, truncation, or
/// uniqueness suffix is applied; see [`check_account_name`].
#[must_use]
pub fn account_name(composite_name: Option<&str>) -> String {
    composite_name.unwrap_or_default().replace('-', "")
}

/// Checks a storage account name against the provider's rules:
/// 3 to 24 characters, lowercase ASCII letters and digits only.
///
/// # Errors
///
/// Returns [`BucketError::InvalidAccountName`] naming the violated rule.
pub fn check_account_name(name: &str) -> Result<()> {
    let len = name.chars().count();
    if !(ACCOUNT_NAME_MIN_LEN..=ACCOUNT_NAME_MAX_LEN).contains(&len) {
        return Err(BucketError::InvalidAccountName {
            name: name.to_string(),
            reason: format!(
                "length {len} is outside {ACCOUNT_NAME_MIN_LEN}..={ACCOUNT_NAME_MAX_LEN}"
            ),
        });
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
    {
        return Err(BucketError::InvalidAccountName {
            name: name.to_string(),
            reason: format!("character '{bad}' is not a lowercase letter or digit"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_acl_maps_to_blob() {
        assert_eq!(
            ContainerAccessType::from_acl(Some("public")),
            ContainerAccessType::Blob
        );
    }

    #[test]
    fn other_acls_map_to_private() {
        for acl in [None, Some(""), Some("private"), Some("PUBLIC"), Some("everyone")] {
            assert_eq!(
                ContainerAccessType::from_acl(acl),
                ContainerAccessType::Private,
                "acl {acl:?}"
            );
        }
    }

    #[test]
    fn access_type_spelling() {
        assert_eq!(ContainerAccessType::Blob.to_string(), "blob");
        assert_eq!(ContainerAccessType::Private.as_str(), "private");
    }

    #[test]
    fn account_name_strips_hyphens() {
        assert_eq!(account_name(Some("example-xr")), "examplexr");
        assert_eq!(account_name(Some("a-b--c-")), "abc");
    }

    #[test]
    fn account_name_passes_everything_else_through() {
        assert_eq!(account_name(Some("abc")), "abc");
        assert_eq!(account_name(Some("My_Bucket.1")), "My_Bucket.1");
        assert_eq!(account_name(Some("")), "");
        assert_eq!(account_name(None), "");
    }

    #[test]
    fn account_name_is_idempotent() {
        let once = account_name(Some("uptest-bucket-xr"));
        assert_eq!(account_name(Some(&once)), once);
    }

    #[test]
    fn check_accepts_valid_names() {
        assert!(check_account_name("abc").is_ok());
        assert!(check_account_name("examplexr0123456789abcde").is_ok());
    }

    #[test]
    fn check_rejects_bad_length() {
        let err = check_account_name("ab").unwrap_err();
        assert!(err.to_string().contains("length 2"), "got: {err}");
        assert!(check_account_name("").is_err());
        assert!(check_account_name(&"a".repeat(25)).is_err());
    }

    #[test]
    fn check_rejects_bad_characters() {
        let err = check_account_name("Example").unwrap_err();
        assert!(err.to_string().contains("'E'"), "got: {err}");
        assert!(check_account_name("my_bucket").is_err());
    }
}
