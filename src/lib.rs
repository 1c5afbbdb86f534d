//! Learning Tracker - personal learning-resource tracking
//!
//! Resources, topics, resource types and users behind repository ports,
//! with every request checked by a declarative field-validation schema
//! engine (`domain::validation`) before it reaches storage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
