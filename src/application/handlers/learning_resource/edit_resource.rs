//! EditResourceHandler - Command handler for partial resource updates.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{ensure_resource_type_exists, ensure_topics_exist, non_empty, validate_request};
use crate::domain::foundation::{ResourceId, ResourceTypeId, TopicId};
use crate::domain::learning_resource::{Duration, LearningResource, LearningResourceError};
use crate::domain::validation::fields::{
    optional_array, optional_number, optional_string, optional_url, optional_uuid, uuid_field,
    ArrayFieldOptions, NumberFieldOptions, StringFieldOptions,
};
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::{LearningResourceRepository, ResourceTypeRepository, TopicRepository};

pub const MAX_EDITED_TITLE_LENGTH: usize = 250;

const NOTHING_TO_UPDATE: &str = "At least one field must be provided for update";

/// Command to update some fields of a resource. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResourceCommand {
    pub id: String,
    pub title: Option<String>,
    /// An empty string clears the URL.
    pub url: Option<String>,
    pub type_id: Option<String>,
    pub topic_ids: Option<Vec<String>>,
    pub estimated_duration_minutes: Option<f64>,
    /// An empty string clears the notes.
    pub notes: Option<String>,
}

impl EditResourceCommand {
    fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.url.is_some()
            || self.type_id.is_some()
            || self.topic_ids.is_some()
            || self.estimated_duration_minutes.is_some()
            || self.notes.is_some()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidEditResource {
    id: ResourceId,
    title: Option<String>,
    url: Option<String>,
    type_id: Option<ResourceTypeId>,
    topic_ids: Option<Vec<TopicId>>,
    estimated_duration_minutes: Option<f64>,
    notes: Option<String>,
}

static EDIT_RESOURCE_SCHEMA: Lazy<ValidationSchema<ValidEditResource>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field("id", uuid_field("ResourceId", ValidatorOptions::default()))
            .field(
                "title",
                optional_string(
                    "Title",
                    StringFieldOptions {
                        allow_empty: true,
                        max_length: Some(MAX_EDITED_TITLE_LENGTH),
                        ..Default::default()
                    },
                ),
            )
            .field(
                "url",
                optional_url(
                    "Url",
                    StringFieldOptions {
                        allow_empty: true,
                        ..Default::default()
                    },
                ),
            )
            .field("typeId", optional_uuid("ResourceType", ValidatorOptions::default()))
            .field(
                "topicIds",
                optional_array("TopicIds", ArrayFieldOptions::default())
                    .items(uuid_field("TopicId", ValidatorOptions::default())),
            )
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
                        max_length: Some(5000),
                        allow_empty: true,
                        ..Default::default()
                    },
                ),
            ),
    )
});

/// Handler for editing learning resources.
pub struct EditResourceHandler {
    resources: Arc<dyn LearningResourceRepository>,
    resource_types: Arc<dyn ResourceTypeRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl EditResourceHandler {
    pub fn new(
        resources: Arc<dyn LearningResourceRepository>,
        resource_types: Arc<dyn ResourceTypeRepository>,
        topics: Arc<dyn TopicRepository>,
    ) -> Self {
        Self {
            resources,
            resource_types,
            topics,
        }
    }

    pub async fn handle(
        &self,
        cmd: EditResourceCommand,
    ) -> Result<LearningResource, LearningResourceError> {
        tracing::debug!(resource_id = %cmd.id, "editing learning resource");

        // 1. Require at least one change
        if !cmd.has_updates() {
            tracing::warn!(resource_id = %cmd.id, "edit request carries no changes");
            return Err(LearningResourceError::invalid_field("general", NOTHING_TO_UPDATE));
        }

        // 2. Validate
        let input = validate_request("edit_resource", &EDIT_RESOURCE_SCHEMA, &cmd)?;

        // 3. Load
        let mut resource = self
            .resources
            .find_by_id(&input.id)
            .await?
            .ok_or(LearningResourceError::ResourceNotFound(input.id))?;

        // 4. Check references
        if let Some(type_id) = &input.type_id {
            ensure_resource_type_exists(self.resource_types.as_ref(), type_id).await?;
        }
        if let Some(topic_ids) = &input.topic_ids {
            ensure_topics_exist(self.topics.as_ref(), topic_ids).await?;
        }

        // 5. Apply provided fields
        if let Some(title) = non_empty(input.title) {
            resource.rename(title);
        }
        if let Some(url) = input.url {
            resource.set_url(non_empty(Some(url)));
        }
        if let Some(type_id) = input.type_id {
            resource.change_type(type_id);
        }
        if let Some(topic_ids) = input.topic_ids {
            resource.retag(topic_ids);
        }
        if let Some(minutes) = input.estimated_duration_minutes {
            resource.set_estimated_duration(Duration::estimated(minutes));
        }
        if let Some(notes) = input.notes {
            resource.set_notes(non_empty(Some(notes)));
        }

        // 6. Persist
        self.resources.update(&resource).await?;

        tracing::info!(resource_id = %resource.id(), "learning resource updated");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::learning_resource::support::fixtures::Fixture;
    use crate::domain::learning_resource::sample_resource;
    use std::collections::BTreeMap;

    fn handler(fx: &Fixture) -> EditResourceHandler {
        EditResourceHandler::new(fx.resources.clone(), fx.types.clone(), fx.topics.clone())
    }

    fn stored() -> (Fixture, LearningResource) {
        let resource = sample_resource();
        (Fixture::with_resources(vec![resource.clone()]), resource)
    }

    #[tokio::test]
    async fn command_without_changes_is_rejected_before_validation() {
        let (fx, _) = stored();
        let cmd = EditResourceCommand {
            id: "not-a-uuid".to_string(),
            ..Default::default()
        };

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(
            err,
            LearningResourceError::InvalidData(BTreeMap::from([(
                "general".to_string(),
                NOTHING_TO_UPDATE.to_string()
            )]))
        );
    }

    #[tokio::test]
    async fn updates_only_provided_fields() {
        let (fx, resource) = stored();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            title: Some(" Programming Rust ".to_string()),
            estimated_duration_minutes: Some(45.0),
            ..Default::default()
        };

        let updated = handler(&fx).handle(cmd).await.unwrap();

        assert_eq!(updated.title(), "Programming Rust");
        assert_eq!(updated.estimated_duration(), &Duration::estimated(45.0));
        assert_eq!(updated.url(), resource.url());
        assert_eq!(updated.topic_ids(), resource.topic_ids());

        let persisted = fx.resources.find_by_id(resource.id()).await.unwrap().unwrap();
        assert_eq!(persisted, updated);
    }

    #[tokio::test]
    async fn empty_strings_clear_url_and_notes() {
        let (fx, resource) = stored();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            url: Some(String::new()),
            notes: Some("  ".to_string()),
            ..Default::default()
        };

        let updated = handler(&fx).handle(cmd).await.unwrap();
        assert!(updated.url().is_none());
        assert!(updated.notes().is_none());
    }

    #[tokio::test]
    async fn empty_title_leaves_title_unchanged() {
        let (fx, resource) = stored();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            title: Some(String::new()),
            ..Default::default()
        };

        let updated = handler(&fx).handle(cmd).await.unwrap();
        assert_eq!(updated.title(), resource.title());
    }

    #[tokio::test]
    async fn retags_with_known_topics() {
        let (fx, resource) = stored();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            topic_ids: Some(vec![fx.rust.id().to_string(), fx.async_topic.id().to_string()]),
            type_id: Some(fx.book.id().to_string()),
            ..Default::default()
        };

        let updated = handler(&fx).handle(cmd).await.unwrap();
        assert_eq!(updated.topic_ids(), &[*fx.rust.id(), *fx.async_topic.id()]);
        assert_eq!(updated.type_id(), fx.book.id());
    }

    #[tokio::test]
    async fn unknown_topic_is_not_found() {
        let (fx, resource) = stored();
        let missing = TopicId::new();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            topic_ids: Some(vec![missing.to_string()]),
            ..Default::default()
        };

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(err, LearningResourceError::not_found("Topic", missing));
    }

    #[tokio::test]
    async fn unknown_resource_type_is_not_found() {
        let (fx, resource) = stored();
        let missing = ResourceTypeId::new();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            type_id: Some(missing.to_string()),
            ..Default::default()
        };

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(err, LearningResourceError::not_found("ResourceType", missing));
    }

    #[tokio::test]
    async fn missing_resource_is_reported() {
        let fx = Fixture::new();
        let id = ResourceId::new();
        let cmd = EditResourceCommand {
            id: id.to_string(),
            notes: Some("hi".to_string()),
            ..Default::default()
        };

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        assert_eq!(err, LearningResourceError::ResourceNotFound(id));
    }

    #[tokio::test]
    async fn invalid_fields_are_reported() {
        let (fx, resource) = stored();
        let cmd = EditResourceCommand {
            id: resource.id().to_string(),
            url: Some("not a url".to_string()),
            estimated_duration_minutes: Some(-5.0),
            ..Default::default()
        };

        let err = handler(&fx).handle(cmd).await.unwrap_err();
        let errors = err.errors();
        assert_eq!(errors.get("url").map(String::as_str), Some("Url must be a valid URL"));
        assert_eq!(
            errors.get("estimatedDurationMinutes").map(String::as_str),
            Some("EstimatedDuration must be greater than 0")
        );
    }
}
