//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Repository Ports
//!
//! - `LearningResourceRepository` - Learning resource persistence and queries
//! - `TopicRepository` - Topic reference data
//! - `ResourceTypeRepository` - Resource type reference data
//!
//! ## Service Ports
//!
//! - `CryptoService` - Password hashing, UUIDs and random tokens

mod crypto_service;
mod learning_resource_repository;
mod resource_type_repository;
mod topic_repository;

pub use crypto_service::CryptoService;
pub use learning_resource_repository::LearningResourceRepository;
pub use resource_type_repository::ResourceTypeRepository;
pub use topic_repository::TopicRepository;
