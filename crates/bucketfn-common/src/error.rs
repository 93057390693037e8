//! Unified error types for the bucketfn workspace.
//!
//! Every error is fatal to the invocation that raised it. Callers add a
//! one-line context with [`BucketError::context`] as the error travels up,
//! so the rendered message reads as a chain such as
//! `cannot convert xr: invalid type: ...`.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BucketError {
    /// A required composite parameter is absent or empty.
    #[error("missing {name} parameter")]
    MissingParameter {
        /// Parameter name as it appears under `spec.parameters`.
        name: &'static str,
    },

    /// The request carried no observed composite resource.
    #[error("no observed composite resource in request")]
    MissingComposite,

    /// A derived storage account name violates the provider's naming rules.
    #[error("invalid storage account name \"{name}\": {reason}")]
    InvalidAccountName {
        /// The derived name.
        name: String,
        /// Which rule the name violates.
        reason: String,
    },

    /// A document does not describe a composed resource this crate knows.
    #[error("unsupported composed resource {api_version}/{kind}")]
    UnsupportedResource {
        /// Declared `apiVersion` of the document.
        api_version: String,
        /// Declared `kind` of the document.
        kind: String,
    },

    /// A selector relation has no candidate resource in the desired set.
    #[error("{resource}: selector for {target} matches no desired resource")]
    UnresolvedSelector {
        /// Logical name of the resource holding the selector.
        resource: String,
        /// Kind the selector binds to.
        target: &'static str,
    },

    /// The selector relations form a cycle.
    #[error("cyclic selector references in desired resources")]
    CyclicReferences,

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },

    /// Another error, prefixed with the stage that observed it.
    #[error("{context}: {source}")]
    Context {
        /// One-line description of the failing stage.
        context: String,
        /// The wrapped error.
        source: Box<BucketError>,
    },
}

impl BucketError {
    /// Wraps this error with a one-line context string.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error of a context chain.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, BucketError>;
