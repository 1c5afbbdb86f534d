use super::store::OrderedStore;
use crate::domain::catalog::ResourceType;
use crate::domain::foundation::{DomainError, ResourceTypeId};
use crate::ports::ResourceTypeRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory resource type repository.
#[derive(Clone, Default)]
pub struct InMemoryResourceTypeRepository {
    store: Arc<RwLock<OrderedStore<ResourceTypeId, ResourceType>>>,
}

impl InMemoryResourceTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_types(types: impl IntoIterator<Item = ResourceType>) -> Self {
        let mut store = OrderedStore::default();
        for resource_type in types {
            store.upsert(*resource_type.id(), resource_type);
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
}

#[async_trait]
impl ResourceTypeRepository for InMemoryResourceTypeRepository {
    async fn save(&self, resource_type: &ResourceType) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .upsert(*resource_type.id(), resource_type.clone());
        Ok(())
    }

    async fn update(&self, resource_type: &ResourceType) -> Result<(), DomainError> {
        if self
            .store
            .write()
            .await
            .replace(resource_type.id(), resource_type.clone())
        {
            Ok(())
        } else {
            Err(DomainError::not_found("ResourceType", resource_type.id()))
        }
    }

    async fn find_all(&self) -> Result<Vec<ResourceType>, DomainError> {
        Ok(self.store.read().await.values())
    }

    async fn find_by_id(&self, id: &ResourceTypeId) -> Result<Option<ResourceType>, DomainError> {
        Ok(self.store.read().await.get(id))
    }
}
