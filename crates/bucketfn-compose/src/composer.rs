//! The composer: one composite in, three composed resources out.

use bucketfn_common::config::FunctionConfig;
use bucketfn_common::constants::{ACCOUNT_KEY, CONTAINER_KEY, RESOURCE_GROUP_KEY};
use bucketfn_common::error::Result;
use bucketfn_common::types::ResourceName;

use crate::derive::{self, ContainerAccessType};
use crate::graph::DependencyGraph;
use crate::model::{
    Account, ComposedResource, CompositeBucket, Container, DesiredComposed, ObservedComposed,
    ResourceGroup,
};
use crate::validator;

/// Options fixed at construction of a [`Composer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposerOptions {
    /// Fail when the derived account name breaks the provider's rules
    /// instead of passing it through.
    pub strict_account_names: bool,
}

impl From<&FunctionConfig> for ComposerOptions {
    fn from(config: &FunctionConfig) -> Self {
        Self {
            strict_account_names: config.strict_account_names,
        }
    }
}

/// Result of a successful composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Desired composed resources keyed by logical name.
    pub resources: DesiredComposed,
    /// Logical names ordered so that selector targets come first.
    pub order: Vec<ResourceName>,
    /// Diagnostic notes. Never affect the output.
    pub notes: Vec<String>,
}

impl Composition {
    /// Iterates the resources in dependency order.
    pub fn in_order(&self) -> impl Iterator<Item = (&ResourceName, &ComposedResource)> {
        self.order
            .iter()
            .filter_map(|name| self.resources.get_key_value(name))
    }
}

/// Computes the desired composed resources of a storage bucket composite.
///
/// Holds only read-only options, so one instance can serve concurrent
/// invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composer {
    options: ComposerOptions,
}

impl Composer {
    /// Creates a composer with the given options.
    #[must_use]
    pub const fn new(options: ComposerOptions) -> Self {
        Self { options }
    }

    /// Returns the options this composer was built with.
    #[must_use]
    pub const fn options(&self) -> ComposerOptions {
        self.options
    }

    /// Composes the resource group, storage account, and container.
    ///
    /// All three are emitted on every call. `observed` only feeds the
    /// diagnostic notes.
    ///
    /// # Errors
    ///
    /// Returns an error if `location` is missing or empty, or, with strict
    /// account names enabled, if the derived account name is invalid.
    pub fn compose(
        &self,
        composite: &CompositeBucket,
        observed: &ObservedComposed,
    ) -> Result<Composition> {
        let params = composite.parameters();
        let location = validator::validate(params)?;

        let access_type = ContainerAccessType::from_acl(params.acl.as_deref());
        let account_name = derive::account_name(composite.name());
        if self.options.strict_account_names {
            derive::check_account_name(&account_name)?;
        }
        tracing::debug!(
            account = %account_name,
            access_type = %access_type,
            versioning = ?params.versioning,
            "derived bucket fields"
        );

        let mut notes = Vec::new();
        if !observed.contains_key(&ResourceName::new(RESOURCE_GROUP_KEY)) {
            notes.push("resource group not observed yet".to_string());
        }

        let mut resources = DesiredComposed::new();
        let _ = resources.insert(
            RESOURCE_GROUP_KEY.into(),
            ResourceGroup::new(location).into(),
        );
        let _ = resources.insert(
            ACCOUNT_KEY.into(),
            Account::new(account_name, location, params.versioning).into(),
        );
        let _ = resources.insert(
            CONTAINER_KEY.into(),
            Container::new(access_type.as_str()).into(),
        );

        // Complete by construction: every selector has a target and no cycle.
        let order = DependencyGraph::from_desired(&resources)?.resolve_order()?;

        Ok(Composition {
            resources,
            order,
            notes,
        })
    }
}
