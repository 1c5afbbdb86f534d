//! Resource type repository port.
//!
//! Resource types are reference data: they are deactivated, never deleted.

use crate::domain::catalog::ResourceType;
use crate::domain::foundation::{DomainError, ResourceTypeId};
use async_trait::async_trait;

#[async_trait]
pub trait ResourceTypeRepository: Send + Sync {
    async fn save(&self, resource_type: &ResourceType) -> Result<(), DomainError>;

    /// # Errors
    ///
    /// - `NotFound` if no resource type has this id
    async fn update(&self, resource_type: &ResourceType) -> Result<(), DomainError>;

    async fn find_all(&self) -> Result<Vec<ResourceType>, DomainError>;

    async fn find_by_id(&self, id: &ResourceTypeId) -> Result<Option<ResourceType>, DomainError>;
}
