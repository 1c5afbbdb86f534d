//! In-memory learning resource repository.
//!
//! Suitable for tests and single-process use. Data is lost on restart.

use super::store::OrderedStore;
use crate::domain::foundation::{DomainError, ResourceId, ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResource, ResourceStatus,
};
use crate::ports::LearningResourceRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryLearningResourceRepository {
    store: Arc<RwLock<OrderedStore<ResourceId, LearningResource>>>,
}

impl InMemoryLearningResourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `resources`.
    pub fn with_resources(resources: impl IntoIterator<Item = LearningResource>) -> Self {
        let mut store = OrderedStore::default();
        for resource in resources {
            store.upsert(*resource.id(), resource);
        }
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<LearningResource>
    where
        F: FnMut(&LearningResource) -> bool,
    {
        self.store.read().await.values_where(predicate)
    }
}

#[async_trait]
impl LearningResourceRepository for InMemoryLearningResourceRepository {
    async fn save(&self, resource: &LearningResource) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .upsert(*resource.id(), resource.clone());
        Ok(())
    }

    async fn update(&self, resource: &LearningResource) -> Result<(), DomainError> {
        if self
            .store
            .write()
            .await
            .replace(resource.id(), resource.clone())
        {
            Ok(())
        } else {
            Err(DomainError::not_found("LearningResource", resource.id()))
        }
    }

    async fn delete(&self, id: &ResourceId) -> Result<(), DomainError> {
        self.store.write().await.remove(id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.store.read().await.values())
    }

    async fn find_by_id(&self, id: &ResourceId) -> Result<Option<LearningResource>, DomainError> {
        Ok(self.store.read().await.get(id))
    }

    async fn find_by_topic_ids(
        &self,
        topic_ids: &[TopicId],
    ) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.filtered(|r| r.has_any_topic(topic_ids)).await)
    }

    async fn find_by_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.filtered(|r| r.difficulty() == difficulty).await)
    }

    async fn find_by_energy_level(
        &self,
        energy_level: EnergyLevel,
    ) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.filtered(|r| r.energy_level() == energy_level).await)
    }

    async fn find_by_status(
        &self,
        status: ResourceStatus,
    ) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.filtered(|r| r.status() == status).await)
    }

    async fn find_by_resource_type_id(
        &self,
        type_id: &ResourceTypeId,
    ) -> Result<Vec<LearningResource>, DomainError> {
        Ok(self.filtered(|r| r.type_id() == type_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::learning_resource::sample_resource;

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = InMemoryLearningResourceRepository::new();
        let resource = sample_resource();
        repo.save(&resource).await.unwrap();

        assert_eq!(repo.find_by_id(resource.id()).await.unwrap(), Some(resource));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let first = sample_resource();
        let second = sample_resource();
        let repo =
            InMemoryLearningResourceRepository::with_resources(vec![first.clone(), second.clone()]);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn update_of_unknown_resource_is_not_found() {
        let repo = InMemoryLearningResourceRepository::new();
        let err = repo.update(&sample_resource()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_replaces_stored_resource() {
        let mut resource = sample_resource();
        let repo = InMemoryLearningResourceRepository::with_resources(vec![resource.clone()]);

        resource.set_status(ResourceStatus::InProgress);
        repo.update(&resource).await.unwrap();

        let stored = repo.find_by_id(resource.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ResourceStatus::InProgress);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let resource = sample_resource();
        let repo = InMemoryLearningResourceRepository::with_resources(vec![resource.clone()]);

        repo.delete(resource.id()).await.unwrap();
        repo.delete(resource.id()).await.unwrap();
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn filters_by_attributes() {
        let mut hard = sample_resource();
        hard.set_difficulty(Difficulty::High);
        hard.set_energy_level(EnergyLevel::High);
        hard.set_status(ResourceStatus::Completed);
        let easy = sample_resource();
        let repo = InMemoryLearningResourceRepository::with_resources(vec![hard.clone(), easy.clone()]);

        assert_eq!(repo.find_by_difficulty(Difficulty::High).await.unwrap(), vec![hard.clone()]);
        assert_eq!(repo.find_by_energy_level(EnergyLevel::Medium).await.unwrap(), vec![easy.clone()]);
        assert_eq!(repo.find_by_status(ResourceStatus::Completed).await.unwrap(), vec![hard.clone()]);
        assert_eq!(
            repo.find_by_resource_type_id(easy.type_id()).await.unwrap(),
            vec![easy.clone()]
        );
        assert_eq!(
            repo.find_by_topic_ids(&[hard.topic_ids()[0], TopicId::new()]).await.unwrap(),
            vec![hard]
        );
    }

    #[tokio::test]
    async fn clear_empties_repository() {
        let repo = InMemoryLearningResourceRepository::with_resources(vec![sample_resource()]);
        repo.clear().await;
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
