use super::store::OrderedStore;
use crate::domain::catalog::Topic;
use crate::domain::foundation::{DomainError, TopicId};
use crate::ports::TopicRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory topic repository.
#[derive(Clone, Default)]
pub struct InMemoryTopicRepository {
    store: Arc<RwLock<OrderedStore<TopicId, Topic>>>,
}

impl InMemoryTopicRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topics(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut store = OrderedStore::default();
        for topic in topics {
            store.upsert(*topic.id(), topic);
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
impl TopicRepository for InMemoryTopicRepository {
    async fn save(&self, topic: &Topic) -> Result<(), DomainError> {
        self.store.write().await.upsert(*topic.id(), topic.clone());
        Ok(())
    }

    async fn update(&self, topic: &Topic) -> Result<(), DomainError> {
        if self.store.write().await.replace(topic.id(), topic.clone()) {
            Ok(())
        } else {
            Err(DomainError::not_found("Topic", topic.id()))
        }
    }

    async fn delete(&self, id: &TopicId) -> Result<(), DomainError> {
        self.store.write().await.remove(id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Topic>, DomainError> {
        Ok(self.store.read().await.values())
    }

    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, DomainError> {
        Ok(self.store.read().await.get(id))
    }
}
