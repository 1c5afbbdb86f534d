//! GetResourceByIdHandler - Query handler for a single resource.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::validate_request;
use crate::domain::foundation::{ResourceId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResource, LearningResourceError, ResourceStatus,
};
use crate::domain::validation::fields::uuid_field;
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceByIdQuery {
    pub resource_id: String,
}

/// Read model returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    pub resource_id: ResourceId,
    pub title: String,
    pub url: Option<String>,
    pub topic_ids: Vec<TopicId>,
    pub difficulty: Difficulty,
    pub estimated_duration_minutes: f64,
    pub energy_level: EnergyLevel,
    pub status: ResourceStatus,
    pub notes: Option<String>,
}

impl From<&LearningResource> for ResourceDetails {
    fn from(resource: &LearningResource) -> Self {
        Self {
            resource_id: *resource.id(),
            title: resource.title().to_string(),
            url: resource.url().map(str::to_string),
            topic_ids: resource.topic_ids().to_vec(),
            difficulty: resource.difficulty(),
            estimated_duration_minutes: resource.estimated_duration().minutes(),
            energy_level: resource.energy_level(),
            status: resource.status(),
            notes: resource.notes().map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidGetResourceById {
    resource_id: ResourceId,
}

static GET_RESOURCE_SCHEMA: Lazy<ValidationSchema<ValidGetResourceById>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new().field("resourceId", uuid_field("ResourceId", ValidatorOptions::default())),
    )
});

pub struct GetResourceByIdHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl GetResourceByIdHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(
        &self,
        query: GetResourceByIdQuery,
    ) -> Result<ResourceDetails, LearningResourceError> {
        tracing::debug!(resource_id = %query.resource_id, "fetching learning resource");

        let input = validate_request("get_resource_by_id", &GET_RESOURCE_SCHEMA, &query)?;

        self.resources
            .find_by_id(&input.resource_id)
            .await?
            .map(|resource| ResourceDetails::from(&resource))
            .ok_or(LearningResourceError::ResourceNotFound(input.resource_id))
    }
}
