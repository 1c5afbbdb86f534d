//! In-memory repository adapters.
//!
//! Thread-safe via `tokio::sync::RwLock`; cloning a repository shares its
//! storage. Listing follows insertion order. Nothing is persisted across
//! restarts.

mod learning_resource_repository;
mod resource_type_repository;
mod store;
mod topic_repository;

pub use learning_resource_repository::InMemoryLearningResourceRepository;
pub use resource_type_repository::InMemoryResourceTypeRepository;
pub use topic_repository::InMemoryTopicRepository;
