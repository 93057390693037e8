//! # bucketfn-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire bucketfn workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the primitives the composer, the function
//! runner, the fixture generators, and the CLI all build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
