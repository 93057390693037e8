//! # bucketfn-compose
//!
//! Composer for `XStorageBucket` composites.
//!
//! Handles:
//! - **Model**: Typed composite and Azure resource descriptors.
//! - **Validator**: Required-parameter checks.
//! - **Derive**: Account naming and ACL to access-type mapping.
//! - **Graph**: Selector relations and dependency ordering.
//! - **Codec**: Lossless conversion to and from generic documents.
//! - **Composer**: The pure composite to composed-resources function.
//!
//! # Example
//!
//! ```rust
//! use bucketfn_compose::composer::Composer;
//! use bucketfn_compose::model::{CompositeBucket, ObservedComposed};
//!
//! let xr: CompositeBucket = serde_json::from_value(serde_json::json!({
//!     "metadata": { "name": "example-xr" },
//!     "spec": { "parameters": { "location": "eastus" } }
//! }))
//! .unwrap();
//! let composition = Composer::default().compose(&xr, &ObservedComposed::new()).unwrap();
//! assert_eq!(composition.resources.len(), 3);
//! ```

pub mod codec;
pub mod composer;
pub mod derive;
pub mod graph;
pub mod model;
pub mod validator;
