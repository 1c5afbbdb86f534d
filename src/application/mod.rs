//! Application layer - Commands, Queries, and Handlers.
//!
//! Handlers validate raw requests through the schema engine, check
//! references through the ports, then mutate and persist aggregates.

pub mod handlers;

pub use handlers::learning_resource;
