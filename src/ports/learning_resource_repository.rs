//! Learning resource repository port.
//!
//! Defines the contract for persisting and querying LearningResource
//! aggregates. Listing operations return resources in storage order.

use crate::domain::foundation::{DomainError, ResourceId, ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResource, ResourceStatus,
};
use async_trait::async_trait;

#[async_trait]
pub trait LearningResourceRepository: Send + Sync {
    /// Insert or replace a resource.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, resource: &LearningResource) -> Result<(), DomainError>;

    /// Replace an existing resource.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no resource has this id
    /// - `DatabaseError` on persistence failure
    async fn update(&self, resource: &LearningResource) -> Result<(), DomainError>;

    /// Remove a resource. Unknown ids are ignored.
    async fn delete(&self, id: &ResourceId) -> Result<(), DomainError>;

    async fn find_all(&self) -> Result<Vec<LearningResource>, DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ResourceId) -> Result<Option<LearningResource>, DomainError>;

    /// Resources tagged with at least one of `topic_ids`.
    async fn find_by_topic_ids(
        &self,
        topic_ids: &[TopicId],
    ) -> Result<Vec<LearningResource>, DomainError>;

    async fn find_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<LearningResource>, DomainError>;

    async fn find_by_energy_level(
        &self,
        energy_level: EnergyLevel,
    ) -> Result<Vec<LearningResource>, DomainError>;

    async fn find_by_status(
        &self,
        status: ResourceStatus,
    ) -> Result<Vec<LearningResource>, DomainError>;

    async fn find_by_resource_type_id(
        &self,
        type_id: &ResourceTypeId,
    ) -> Result<Vec<LearningResource>, DomainError>;
}
