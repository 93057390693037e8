//! Fluent API for assembling a request outside a controller.

use bucketfn_common::error::Result;
use bucketfn_common::types::{Document, ResourceName};
use bucketfn_compose::codec;
use serde::Serialize;

use crate::request::{RunFunctionRequest, State};

/// Builder for a [`RunFunctionRequest`].
#[derive(Debug, Default)]
pub struct RequestBuilder {
    tag: String,
    composite: Option<Document>,
    observed: Vec<(ResourceName, Document)>,
    desired: State,
}

impl RequestBuilder {
    /// Creates a builder with the given correlation tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the observed composite from a generic document.
    #[must_use]
    pub fn composite(mut self, doc: Document) -> Self {
        self.composite = Some(doc);
        self
    }

    /// Sets the observed composite from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an object.
    pub fn typed_composite<T: Serialize>(self, value: &T) -> Result<Self> {
        Ok(self.composite(codec::to_document(value)?))
    }

    /// Adds an observed composed resource.
    #[must_use]
    pub fn observed(mut self, name: impl Into<ResourceName>, doc: Document) -> Self {
        self.observed.push((name.into(), doc));
        self
    }

    /// Sets the desired state produced by earlier pipeline steps.
    #[must_use]
    pub fn desired(mut self, state: State) -> Self {
        self.desired = state;
        self
    }

    /// Builds the request.
    #[must_use]
    pub fn build(self) -> RunFunctionRequest {
        let mut req = RunFunctionRequest::default();
        req.meta.tag = self.tag;
        req.observed.composite = self.composite.map(Into::into);
        req.observed.resources = self
            .observed
            .into_iter()
            .map(|(name, doc)| (name, doc.into()))
            .collect();
        req.desired = self.desired;
        req
    }
}

#[cfg(test)]
mod tests {
    use bucketfn_compose::model::{BucketParameters, CompositeBucket, ObjectMeta};

    use super::*;

    #[test]
    fn builds_request_with_typed_composite() {
        let mut xr = CompositeBucket {
            metadata: ObjectMeta::named("example-xr"),
            ..CompositeBucket::default()
        };
        xr.spec.parameters = BucketParameters {
            location: Some("eastus".into()),
            ..BucketParameters::default()
        };

        let req = RequestBuilder::new("cli")
            .typed_composite(&xr)
            .expect("composite")
            .observed("rg", Document::new())
            .build();

        assert_eq!(req.meta.tag, "cli");
        assert_eq!(req.observed_composite().expect("decode"), xr);
        assert_eq!(req.observed.resources.len(), 1);
    }

    #[test]
    fn empty_builder_has_no_composite() {
        let req = RequestBuilder::new("t").build();
        assert!(req.observed.composite.is_none());
        assert!(req.observed_composite().is_err());
    }
}
