//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and the error vocabulary shared by every
//! layer of the tracker.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{ResourceId, ResourceTypeId, TopicId, UserId};
pub use timestamp::Timestamp;
