//! ListResourcesHandler - Query handler listing every resource.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{ResourceId, ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResource, LearningResourceError, ResourceStatus,
};
use crate::ports::LearningResourceRepository;

/// Compact listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    pub id: ResourceId,
    pub title: String,
    pub energy_level: EnergyLevel,
    pub difficulty: Difficulty,
    pub status: ResourceStatus,
    pub type_id: ResourceTypeId,
    pub topic_ids: Vec<TopicId>,
}

impl From<&LearningResource> for ResourceSummary {
    fn from(resource: &LearningResource) -> Self {
        Self {
            id: *resource.id(),
            title: resource.title().to_string(),
            energy_level: resource.energy_level(),
            difficulty: resource.difficulty(),
            status: resource.status(),
            type_id: *resource.type_id(),
            topic_ids: resource.topic_ids().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResourcesResult {
    pub resources: Vec<ResourceSummary>,
}

pub struct ListResourcesHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl ListResourcesHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(&self) -> Result<ListResourcesResult, LearningResourceError> {
        tracing::debug!("listing learning resources");

        let resources = self
            .resources
            .find_all()
            .await?
            .iter()
            .map(ResourceSummary::from)
            .collect();

        Ok(ListResourcesResult { resources })
    }
}
