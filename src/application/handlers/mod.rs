//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod learning_resource;

pub use learning_resource::*;
