//! ToggleResourceDifficultyHandler - Command handler changing a resource's difficulty.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{difficulty_field, validate_request};
use crate::domain::foundation::ResourceId;
use crate::domain::learning_resource::{Difficulty, LearningResource, LearningResourceError};
use crate::domain::validation::fields::uuid_field;
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResourceDifficultyCommand {
    pub id: String,
    pub difficulty: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidToggleResourceDifficulty {
    id: ResourceId,
    difficulty: Difficulty,
}

static TOGGLE_DIFFICULTY_SCHEMA: Lazy<ValidationSchema<ValidToggleResourceDifficulty>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field("id", uuid_field("ResourceId", ValidatorOptions::default()))
            .field("difficulty", difficulty_field("Difficulty")),
    )
});

pub struct ToggleResourceDifficultyHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl ToggleResourceDifficultyHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(
        &self,
        cmd: ToggleResourceDifficultyCommand,
    ) -> Result<LearningResource, LearningResourceError> {
        tracing::debug!(resource_id = %cmd.id, difficulty = %cmd.difficulty, "changing difficulty");

        let input = validate_request("toggle_resource_difficulty", &TOGGLE_DIFFICULTY_SCHEMA, &cmd)?;

        let mut resource = self
            .resources
            .find_by_id(&input.id)
            .await?
            .ok_or(LearningResourceError::ResourceNotFound(input.id))?;

        resource.set_difficulty(input.difficulty);
        self.resources.update(&resource).await?;

        tracing::info!(resource_id = %input.id, difficulty = %input.difficulty, "difficulty changed");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLearningResourceRepository;
    use crate::domain::learning_resource::sample_resource;

    #[tokio::test]
    async fn changes_only_difficulty() {
        let resource = sample_resource();
        let handler = ToggleResourceDifficultyHandler::new(Arc::new(
            InMemoryLearningResourceRepository::with_resources(vec![resource.clone()]),
        ));

        let updated = handler
            .handle(ToggleResourceDifficultyCommand {
                id: resource.id().to_string(),
                difficulty: "High".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.difficulty(), Difficulty::High);
        assert_eq!(updated.energy_level(), resource.energy_level());
    }

    #[tokio::test]
    async fn reports_every_invalid_field() {
        let handler = ToggleResourceDifficultyHandler::new(Arc::new(
            InMemoryLearningResourceRepository::new(),
        ));

        let err = handler
            .handle(ToggleResourceDifficultyCommand::default())
            .await
            .unwrap_err();

        let errors = err.errors();
        assert_eq!(errors["id"], "ResourceId is required");
        assert_eq!(errors["difficulty"], "Difficulty is required");
    }
}
