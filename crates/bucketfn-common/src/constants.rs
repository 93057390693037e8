//! API identities, logical resource names, and fixed provider values.

/// API version of the `XStorageBucket` composite resource.
pub const XR_API_VERSION: &str = "platform.example.com/v1alpha1";
/// Kind of the storage bucket composite resource.
pub const XR_KIND: &str = "XStorageBucket";

/// API version of the Azure resource group managed resource.
pub const RESOURCE_GROUP_API_VERSION: &str = "azure.upbound.io/v1beta1";
/// Kind of the Azure resource group managed resource.
pub const RESOURCE_GROUP_KIND: &str = "ResourceGroup";

/// API version shared by the Azure storage managed resources.
pub const STORAGE_API_VERSION: &str = "storage.azure.upbound.io/v1beta1";
/// Kind of the Azure storage account managed resource.
pub const ACCOUNT_KIND: &str = "Account";
/// Kind of the Azure storage container managed resource.
pub const CONTAINER_KIND: &str = "Container";

/// API version of the Azure provider configuration.
pub const PROVIDER_CONFIG_API_VERSION: &str = "azure.upbound.io/v1beta1";
/// Kind of the Azure provider configuration.
pub const PROVIDER_CONFIG_KIND: &str = "ProviderConfig";

/// API version of the test manifests consumed by the project test runner.
pub const TEST_META_API_VERSION: &str = "meta.dev.upbound.io/v1alpha1";

/// Logical name of the composed resource group.
pub const RESOURCE_GROUP_KEY: &str = "rg";
/// Logical name of the composed storage account.
pub const ACCOUNT_KEY: &str = "account";
/// Logical name of the composed storage container.
pub const CONTAINER_KEY: &str = "container";

/// Storage account performance tier.
pub const ACCOUNT_TIER: &str = "Standard";
/// Storage account replication type (locally redundant).
pub const ACCOUNT_REPLICATION_TYPE: &str = "LRS";

/// ACL parameter value that makes blobs anonymously readable.
pub const ACL_PUBLIC: &str = "public";

/// Minimum length of an Azure storage account name.
pub const ACCOUNT_NAME_MIN_LEN: usize = 3;
/// Maximum length of an Azure storage account name.
pub const ACCOUNT_NAME_MAX_LEN: usize = 24;

/// Default time-to-live of a function response, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 60;

/// Annotation the controller uses to record a resource's external name.
pub const EXTERNAL_NAME_ANNOTATION: &str = "crossplane.io/external-name";

/// Environment variable carrying the cloud credentials for E2E tests.
pub const CLOUD_CREDENTIALS_ENV: &str = "UP_CLOUD_CREDENTIALS";

/// Application name used in CLI output.
pub const APP_NAME: &str = "bucketfn";
