//! GetResourcesByFilterHandler - Query handler applying a single filter.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{difficulty_field, energy_level_field, status_field, validate_request};
use crate::domain::foundation::{ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResource, LearningResourceError, ResourceStatus,
};
use crate::domain::validation::fields::{
    optional_array, optional_uuid, uuid_field, ArrayFieldOptions,
};
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

/// Raw filter values. Each one is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFilters {
    pub topic_ids: Option<Vec<String>>,
    pub difficulty: Option<String>,
    pub energy_level: Option<String>,
    pub status: Option<String>,
    pub resource_type_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourcesByFilterQuery {
    pub filters: Option<ResourceFilters>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcesPage {
    pub resources: Vec<LearningResource>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidFilters {
    topic_ids: Option<Vec<TopicId>>,
    difficulty: Option<Difficulty>,
    energy_level: Option<EnergyLevel>,
    status: Option<ResourceStatus>,
    resource_type_id: Option<ResourceTypeId>,
}

/// The filter actually applied, in precedence order.
enum Filter {
    Topics(Vec<TopicId>),
    Difficulty(Difficulty),
    EnergyLevel(EnergyLevel),
    Status(ResourceStatus),
    ResourceType(ResourceTypeId),
    None,
}

impl From<ValidFilters> for Filter {
    fn from(filters: ValidFilters) -> Self {
        if let Some(ids) = filters.topic_ids {
            Filter::Topics(ids)
        } else if let Some(difficulty) = filters.difficulty {
            Filter::Difficulty(difficulty)
        } else if let Some(level) = filters.energy_level {
            Filter::EnergyLevel(level)
        } else if let Some(status) = filters.status {
            Filter::Status(status)
        } else if let Some(type_id) = filters.resource_type_id {
            Filter::ResourceType(type_id)
        } else {
            Filter::None
        }
    }
}

static FILTER_SCHEMA: Lazy<ValidationSchema<ValidFilters>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field(
                "topicIds",
                optional_array("TopicIds", ArrayFieldOptions::default())
                    .items(uuid_field("TopicId", ValidatorOptions::default())),
            )
            .field("difficulty", difficulty_field("Difficulty").optional())
            .field("energyLevel", energy_level_field("EnergyLevel").optional())
            .field("status", status_field("Status").optional())
            .field(
                "resourceTypeId",
                optional_uuid("ResourceType", ValidatorOptions::default()),
            ),
    )
});

pub struct GetResourcesByFilterHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl GetResourcesByFilterHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(
        &self,
        query: GetResourcesByFilterQuery,
    ) -> Result<ResourcesPage, LearningResourceError> {
        let filters = query.filters.unwrap_or_default();
        tracing::debug!(?filters, "filtering learning resources");

        let input = validate_request("get_resources_by_filter", &FILTER_SCHEMA, &filters)?;

        let resources = match Filter::from(input) {
            Filter::Topics(ids) => self.resources.find_by_topic_ids(&ids).await?,
            Filter::Difficulty(d) => self.resources.find_by_difficulty(d).await?,
            Filter::EnergyLevel(e) => self.resources.find_by_energy_level(e).await?,
            Filter::Status(s) => self.resources.find_by_status(s).await?,
            Filter::ResourceType(id) => self.resources.find_by_resource_type_id(&id).await?,
            Filter::None => self.resources.find_all().await?,
        };

        let total = resources.len();
        Ok(ResourcesPage { resources, total })
    }
}
