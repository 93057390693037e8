//! # bucketfn-function
//!
//! Composition function runner for the storage bucket composer.
//!
//! Provides three entry points:
//! - [`FunctionRunner`](runner::FunctionRunner): Runs the composer against a request.
//! - [`RunFunctionRequest`](request::RunFunctionRequest) and
//!   [`RunFunctionResponse`](response::RunFunctionResponse): The invocation envelope.
//! - [`RequestBuilder`](builder::RequestBuilder): Assembles requests outside a controller.
//!
//! # Example
//!
//! ```rust
//! use bucketfn_function::builder::RequestBuilder;
//! use bucketfn_function::runner::FunctionRunner;
//!
//! let doc = serde_json::json!({
//!     "metadata": { "name": "example-xr" },
//!     "spec": { "parameters": { "location": "eastus" } }
//! });
//! let req = RequestBuilder::new("hello")
//!     .composite(doc.as_object().cloned().unwrap_or_default())
//!     .build();
//! let rsp = FunctionRunner::default().run_function(&req);
//! assert!(!rsp.is_fatal());
//! assert_eq!(rsp.desired.resources.len(), 3);
//! ```

pub mod builder;
pub mod request;
pub mod response;
pub mod runner;
