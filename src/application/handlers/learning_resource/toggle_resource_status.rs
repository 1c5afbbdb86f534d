//! ToggleResourceStatusHandler - Command handler changing a resource's status.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{status_field, validate_request};
use crate::domain::foundation::ResourceId;
use crate::domain::learning_resource::{ResourceStatus, LearningResource, LearningResourceError};
use crate::domain::validation::fields::uuid_field;
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResourceStatusCommand {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidToggleResourceStatus {
    id: ResourceId,
    status: ResourceStatus,
}

static TOGGLE_STATUS_SCHEMA: Lazy<ValidationSchema<ValidToggleResourceStatus>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field("id", uuid_field("ResourceId", ValidatorOptions::default()))
            .field("status", status_field("Status")),
    )
});

pub struct ToggleResourceStatusHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl ToggleResourceStatusHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(
        &self,
        cmd: ToggleResourceStatusCommand,
    ) -> Result<LearningResource, LearningResourceError> {
        tracing::debug!(resource_id = %cmd.id, status = %cmd.status, "changing status");

        let input = validate_request("toggle_resource_status", &TOGGLE_STATUS_SCHEMA, &cmd)?;

        let mut resource = self
            .resources
            .find_by_id(&input.id)
            .await?
            .ok_or(LearningResourceError::ResourceNotFound(input.id))?;

        resource.set_status(input.status);
        self.resources.update(&resource).await?;

        tracing::info!(resource_id = %input.id, status = %input.status, "status changed");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLearningResourceRepository;
    use crate::domain::learning_resource::sample_resource;

    fn setup() -> (Arc<InMemoryLearningResourceRepository>, LearningResource) {
        let resource = sample_resource();
        let repo = Arc::new(InMemoryLearningResourceRepository::with_resources(vec![
            resource.clone(),
        ]));
        (repo, resource)
    }

    #[tokio::test]
    async fn updates_status_and_persists() {
        let (repo, resource) = setup();
        let handler = ToggleResourceStatusHandler::new(repo.clone());

        let updated = handler
            .handle(ToggleResourceStatusCommand {
                id: resource.id().to_string(),
                status: "IN_PROGRESS".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.status(), ResourceStatus::InProgress);
        assert!(!updated.updated_at().is_before(resource.updated_at()));
        let stored = repo.find_by_id(resource.id()).await.unwrap().unwrap();
        assert_eq!(stored.status(), ResourceStatus::InProgress);
        assert_eq!(stored.difficulty(), resource.difficulty());
    }

    #[tokio::test]
    async fn rejects_unknown_status() {
        let (repo, resource) = setup();
        let handler = ToggleResourceStatusHandler::new(repo);

        let err = handler
            .handle(ToggleResourceStatusCommand {
                id: resource.id().to_string(),
                status: "archived".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            LearningResourceError::invalid_field(
                "status",
                "Status must be one of: pending, in_progress, completed"
            )
        );
    }

    #[tokio::test]
    async fn missing_resource_is_reported() {
        let (repo, _) = setup();
        let handler = ToggleResourceStatusHandler::new(repo);
        let id = ResourceId::new();

        let err = handler
            .handle(ToggleResourceStatusCommand {
                id: id.to_string(),
                status: "completed".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, LearningResourceError::ResourceNotFound(id));
    }
}
