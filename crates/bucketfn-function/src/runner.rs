//! The function runner: request in, response out.

use std::collections::BTreeMap;

use bucketfn_common::config::FunctionConfig;
use bucketfn_common::error::Result;
use bucketfn_common::types::{Document, ResourceName, Ttl};
use bucketfn_compose::codec;
use bucketfn_compose::composer::{Composer, ComposerOptions};

use crate::request::RunFunctionRequest;
use crate::response::RunFunctionResponse;

/// Runs the storage bucket composer against invocation requests.
///
/// Configuration is fixed at construction; the runner is safe to share
/// between concurrent invocations.
#[derive(Debug, Clone, Copy)]
pub struct FunctionRunner {
    composer: Composer,
    ttl: Ttl,
}

impl FunctionRunner {
    /// Creates a runner from the function configuration.
    #[must_use]
    pub fn new(config: &FunctionConfig) -> Self {
        Self {
            composer: Composer::new(ComposerOptions::from(config)),
            ttl: config.ttl(),
        }
    }

    /// Returns the TTL attached to every response.
    #[must_use]
    pub const fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Runs the function once.
    ///
    /// Never fails outright: errors become a single fatal result and the
    /// request's desired state is returned untouched.
    #[must_use]
    pub fn run_function(&self, req: &RunFunctionRequest) -> RunFunctionResponse {
        let tag = req.meta.tag.as_str();
        tracing::info!(tag, "running function");

        let mut rsp = RunFunctionResponse::to(req, self.ttl);
        match self.desired_documents(req) {
            Ok(docs) => {
                tracing::info!(tag, resources = docs.len(), "composed desired resources");
                rsp.set_desired_composed(docs);
            }
            Err(err) => {
                tracing::warn!(tag, error = %err, "function failed");
                rsp.fatal(&err);
            }
        }
        rsp
    }

    fn desired_documents(
        &self,
        req: &RunFunctionRequest,
    ) -> Result<BTreeMap<ResourceName, Document>> {
        let xr = req.observed_composite()?;
        let composition = self.composer.compose(&xr, &req.observed_composed())?;
        for note in &composition.notes {
            tracing::debug!(tag = %req.meta.tag, note = %note, "composer note");
        }
        codec::desired_to_documents(&composition.resources)
    }
}

impl Default for FunctionRunner {
    fn default() -> Self {
        Self::new(&FunctionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_comes_from_config() {
        let config = FunctionConfig {
            ttl_secs: 30,
            ..FunctionConfig::default()
        };
        assert_eq!(FunctionRunner::new(&config).ttl(), Ttl::from_secs(30));
        assert_eq!(FunctionRunner::default().ttl(), Ttl::from_secs(60));
    }

    #[test]
    fn empty_request_is_fatal() {
        let rsp = FunctionRunner::default().run_function(&RunFunctionRequest::default());
        assert!(rsp.is_fatal());
        assert_eq!(
            rsp.results[0].message,
            "cannot get xr: no observed composite resource in request"
        );
        assert!(rsp.desired.resources.is_empty());
    }
}
