//! The invocation response and helpers to fill it in.

use std::collections::BTreeMap;
use std::fmt;

use bucketfn_common::error::BucketError;
use bucketfn_common::types::{Document, ResourceName, Ttl};
use serde::{Deserialize, Serialize};

use crate::request::{RunFunctionRequest, State};

/// The result of running the function once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFunctionResponse {
    /// Response metadata.
    pub meta: ResponseMeta,
    /// Desired state to hand to the next function or the controller.
    #[serde(default)]
    pub desired: State,
    /// Results to surface on the composite.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<FunctionResult>,
}

/// Response metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// The request's correlation tag.
    pub tag: String,
    /// How long the caller may cache this response.
    pub ttl: Ttl,
}

/// A message for the controller to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Severity of the result.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

/// Severity of a [`FunctionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// The pipeline must stop and apply nothing.
    #[serde(rename = "SEVERITY_FATAL")]
    Fatal,
    /// Something went wrong but the pipeline may continue.
    #[serde(rename = "SEVERITY_WARNING")]
    Warning,
    /// Informational.
    #[serde(rename = "SEVERITY_NORMAL")]
    Normal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Warning => write!(f, "warning"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

impl RunFunctionResponse {
    /// Starts a response to `req`: echoes the tag and the desired state
    /// accumulated so far.
    #[must_use]
    pub fn to(req: &RunFunctionRequest, ttl: Ttl) -> Self {
        Self {
            meta: ResponseMeta {
                tag: req.meta.tag.clone(),
                ttl,
            },
            desired: req.desired.clone(),
            results: Vec::new(),
        }
    }

    /// Records a fatal result carrying the error's full message chain.
    pub fn fatal(&mut self, err: &BucketError) {
        self.results.push(FunctionResult {
            severity: Severity::Fatal,
            message: err.to_string(),
        });
    }

    /// Returns true if any result is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.results.iter().any(|r| r.severity == Severity::Fatal)
    }

    /// Writes composed resources into the desired state, replacing any
    /// entry with the same name and keeping the rest.
    pub fn set_desired_composed(&mut self, docs: BTreeMap<ResourceName, Document>) {
        for (name, doc) in docs {
            let _ = self.desired.resources.insert(name, doc.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(tag: &str) -> RunFunctionRequest {
        let mut req = RunFunctionRequest::default();
        req.meta.tag = tag.into();
        req
    }

    #[test]
    fn response_echoes_tag_and_ttl() {
        let rsp = RunFunctionResponse::to(&request("hello"), Ttl::from_secs(60));
        let json = serde_json::to_value(&rsp).expect("serialize");
        assert_eq!(json, json!({ "meta": { "tag": "hello", "ttl": "60s" }, "desired": {} }));
    }

    #[test]
    fn fatal_result_serializes_with_protobuf_severity() {
        let mut rsp = RunFunctionResponse::to(&request("t"), Ttl::default());
        rsp.fatal(&BucketError::MissingParameter { name: "location" });
        assert!(rsp.is_fatal());
        let json = serde_json::to_value(&rsp).expect("serialize");
        assert_eq!(
            json["results"],
            json!([{ "severity": "SEVERITY_FATAL", "message": "missing location parameter" }])
        );
    }

    #[test]
    fn set_desired_keeps_unrelated_entries() {
        let mut req = request("t");
        let _ = req
            .desired
            .resources
            .insert("other".into(), Document::new().into());
        let mut rsp = RunFunctionResponse::to(&req, Ttl::default());

        let mut docs = BTreeMap::new();
        let _ = docs.insert(ResourceName::new("rg"), Document::new());
        rsp.set_desired_composed(docs);

        let names: Vec<&str> = rsp.desired.resources.keys().map(ResourceName::as_str).collect();
        assert_eq!(names, vec!["other", "rg"]);
        assert!(!rsp.is_fatal());
    }
}
