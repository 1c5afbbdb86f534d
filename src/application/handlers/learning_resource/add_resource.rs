//! AddResourceHandler - Command handler for adding learning resources.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{
    difficulty_field, energy_level_field, ensure_resource_type_exists, ensure_topics_exist,
    non_empty, validate_request,
};
use crate::domain::foundation::{ResourceId, ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    calculate_energy_level, Difficulty, Duration, EnergyLevel, LearningResource,
    LearningResourceError, NewLearningResource,
};
use crate::domain::validation::fields::{
    array_field, optional_number, optional_string, optional_url, string_field, uuid_field,
    ArrayFieldOptions, NumberFieldOptions, StringFieldOptions,
};
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::{CryptoService, LearningResourceRepository, ResourceTypeRepository, TopicRepository};

pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_NOTES_LENGTH: usize = 5000;

/// Command to add a learning resource. Ids and enum values arrive as raw
/// strings and are checked by the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResourceCommand {
    pub title: String,
    pub url: Option<String>,
    pub resource_type_id: String,
    pub topic_ids: Vec<String>,
    pub difficulty: String,
    pub energy_level: Option<String>,
    pub estimated_duration_minutes: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidAddResource {
    title: String,
    url: Option<String>,
    resource_type_id: ResourceTypeId,
    topic_ids: Vec<TopicId>,
    difficulty: Difficulty,
    energy_level: Option<EnergyLevel>,
    estimated_duration_minutes: Option<f64>,
    notes: Option<String>,
}

static ADD_RESOURCE_SCHEMA: Lazy<ValidationSchema<ValidAddResource>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field(
                "title",
                string_field(
                    "Title",
                    StringFieldOptions {
                        max_length: Some(MAX_TITLE_LENGTH),
                        ..Default::default()
                    },
                ),
            )
            .field(
                "url",
                optional_url(
                    "URL",
                    StringFieldOptions {
                        allow_empty: true,
                        ..Default::default()
                    },
                ),
            )
            .field(
                "resourceTypeId",
                uuid_field("ResourceType", ValidatorOptions::default()),
            )
            .field(
                "topicIds",
                array_field(
                    "TopicIds",
                    ArrayFieldOptions {
                        min_length: Some(1),
                        ..Default::default()
                    },
                )
                .items(uuid_field("TopicId", ValidatorOptions::default())),
            )
            .field("difficulty", difficulty_field("Difficulty"))
            .field("energyLevel", energy_level_field("EnergyLevel").optional())
            .field(
                "estimatedDurationMinutes",
                optional_number(
                    "EstimatedDuration",
                    NumberFieldOptions {
                        positive: true,
                        integer: true,
                        ..Default::default()
                    },
                ),
            )
            .field(
                "notes",
                optional_string(
                    "Notes",
                    StringFieldOptions {
                        max_length: Some(MAX_NOTES_LENGTH),
                        allow_empty: true,
                        ..Default::default()
                    },
                ),
            ),
    )
});

/// Handler for adding learning resources.
pub struct AddResourceHandler {
    resources: Arc<dyn LearningResourceRepository>,
    resource_types: Arc<dyn ResourceTypeRepository>,
    topics: Arc<dyn TopicRepository>,
    crypto: Arc<dyn CryptoService>,
}

impl AddResourceHandler {
    pub fn new(
        resources: Arc<dyn LearningResourceRepository>,
        resource_types: Arc<dyn ResourceTypeRepository>,
        topics: Arc<dyn TopicRepository>,
        crypto: Arc<dyn CryptoService>,
    ) -> Self {
        Self {
            resources,
            resource_types,
            topics,
            crypto,
        }
    }

    pub async fn handle(
        &self,
        cmd: AddResourceCommand,
    ) -> Result<LearningResource, LearningResourceError> {
        tracing::debug!(title = %cmd.title, topics = cmd.topic_ids.len(), "adding learning resource");

        // 1. Validate
        let input = validate_request("add_resource", &ADD_RESOURCE_SCHEMA, &cmd)?;

        // 2. Check references
        ensure_resource_type_exists(self.resource_types.as_ref(), &input.resource_type_id).await?;
        ensure_topics_exist(self.topics.as_ref(), &input.topic_ids).await?;

        // 3. Build
        let id = ResourceId::from_uuid(self.crypto.generate_uuid().await?);
        let (estimated_duration, minutes) = match input.estimated_duration_minutes {
            Some(minutes) => (Duration::estimated(minutes), minutes),
            None => (Duration::unknown(), 0.0),
        };
        let energy_level = input
            .energy_level
            .unwrap_or_else(|| calculate_energy_level(input.difficulty, minutes));

        let resource = LearningResource::new(
            id,
            NewLearningResource {
                title: input.title,
                url: non_empty(input.url),
                type_id: input.resource_type_id,
                topic_ids: input.topic_ids,
                difficulty: input.difficulty,
                estimated_duration,
                energy_level,
                notes: non_empty(input.notes),
            },
        );

        // 4. Persist
        self.resources.save(&resource).await?;

        tracing::info!(resource_id = %resource.id(), "learning resource added");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::learning_resource::support::fixtures::Fixture;
    use crate::domain::learning_resource::ResourceStatus;
    use std::collections::BTreeMap;

    fn handler(fx: &Fixture) -> AddResourceHandler {
        AddResourceHandler::new(
            fx.resources.clone(),
            fx.types.clone(),
            fx.topics.clone(),
            fx.crypto.clone(),
        )
    }

    fn command(fx: &Fixture) -> AddResourceCommand {
        AddResourceCommand {
            title: "  Zero To Production  ".to_string(),
            url: Some("https://www.zero2prod.com".to_string()),
            resource_type_id: fx.book.id().to_string(),
            topic_ids: vec![fx.rust.id().to_string().to_uppercase()],
            difficulty: "Medium".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn adds_pending_resource_with_normalized_fields() {
        let fx = Fixture::new();
        let resource = handler(&fx).handle(command(&fx)).await.unwrap();

        assert_eq!(resource.title(), "Zero To Production");
        assert_eq!(resource.topic_ids(), &[*fx.rust.id()]);
        assert_eq!(resource.difficulty(), Difficulty::Medium);
        assert_eq!(resource.status(), ResourceStatus::Pending);
        assert_eq!(fx.resources.count().await, 1);
    }

    #[tokio::test]
    async fn derives_energy_from_difficulty_and_duration() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.difficulty = "low".to_string();
        cmd.estimated_duration_minutes = Some(150.0);

        let resource = handler(&fx).handle(cmd).await.unwrap();

        assert_eq!(resource.energy_level(), EnergyLevel::High);
        assert_eq!(resource.estimated_duration(), &Duration::estimated(150.0));
    }

    #[tokio::test]
    async fn explicit_energy_wins_over_derivation() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.energy_level = Some("low".to_string());

        let resource = handler(&fx).handle(cmd).await.unwrap();
        assert_eq!(resource.energy_level(), EnergyLevel::Low);
        assert_eq!(resource.estimated_duration(), &Duration::unknown());
    }

    #[tokio::test]
    async fn empty_url_and_notes_are_dropped() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.url = Some("   ".to_string());
        cmd.notes = Some(String::new());

        let resource = handler(&fx).handle(cmd).await.unwrap();
        assert!(resource.url().is_none());
        assert!(resource.notes().is_none());
    }

    #[tokio::test]
    async fn reports_all_validation_errors_without_saving() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.title = String::new();
        cmd.topic_ids = vec![];

        let err = handler(&fx).handle(cmd).await.unwrap_err();

        assert_eq!(
            err,
            LearningResourceError::InvalidData(BTreeMap::from([
                ("title".to_string(), "Title is required".to_string()),
                (
                    "topicIds".to_string(),
                    "TopicIds must contain at least 1 item".to_string()
                ),
            ]))
        );
        assert_eq!(fx.resources.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_unknown_difficulty() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.difficulty = "extreme".to_string();

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(
            err.errors().get("difficulty").map(String::as_str),
            Some("Difficulty must be one of: low, medium, high")
        );
    }

    #[tokio::test]
    async fn rejects_fractional_duration() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        cmd.estimated_duration_minutes = Some(12.5);

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(
            err.errors().get("estimatedDurationMinutes").map(String::as_str),
            Some("EstimatedDuration must be an integer")
        );
    }

    #[tokio::test]
    async fn unknown_resource_type_is_not_found() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        let missing = ResourceTypeId::new();
        cmd.resource_type_id = missing.to_string();

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(err, LearningResourceError::not_found("ResourceType", missing));
    }

    #[tokio::test]
    async fn first_unknown_topic_is_reported() {
        let fx = Fixture::new();
        let mut cmd = command(&fx);
        let missing = TopicId::new();
        cmd.topic_ids = vec![fx.rust.id().to_string(), missing.to_string(), TopicId::new().to_string()];

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(err, LearningResourceError::not_found("Topic", missing));
        assert_eq!(fx.resources.count().await, 0);
    }
}
