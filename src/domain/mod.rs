//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `validation` - Declarative field validation and record schemas
//! - `learning_resource` - Learning resource aggregate and its vocabularies
//! - `catalog` - Topics and resource types
//! - `user` - User accounts and sign-up validation
//! - `health` - Liveness report

pub mod catalog;
pub mod foundation;
pub mod health;
pub mod learning_resource;
pub mod user;
pub mod validation;
