//! Topic repository port.

use crate::domain::catalog::Topic;
use crate::domain::foundation::{DomainError, TopicId};
use async_trait::async_trait;

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Insert or replace a topic.
    async fn save(&self, topic: &Topic) -> Result<(), DomainError>;

    /// Replace an existing topic.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no topic has this id
    async fn update(&self, topic: &Topic) -> Result<(), DomainError>;

    /// Remove a topic. Unknown ids are ignored.
    async fn delete(&self, id: &TopicId) -> Result<(), DomainError>;

    async fn find_all(&self) -> Result<Vec<Topic>, DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TopicId) -> Result<Option<Topic>, DomainError>;
}
