//! ToggleResourceEnergyHandler - Command handler changing a resource's energy level.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::{energy_level_field, validate_request};
use crate::domain::foundation::ResourceId;
use crate::domain::learning_resource::{EnergyLevel, LearningResource, LearningResourceError};
use crate::domain::validation::fields::uuid_field;
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResourceEnergyCommand {
    pub id: String,
    pub energy_level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidToggleResourceEnergy {
    id: ResourceId,
    energy_level: EnergyLevel,
}

static TOGGLE_ENERGY_SCHEMA: Lazy<ValidationSchema<ValidToggleResourceEnergy>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new()
            .field("id", uuid_field("ResourceId", ValidatorOptions::default()))
            .field("energyLevel", energy_level_field("EnergyLevel")),
    )
});

pub struct ToggleResourceEnergyHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl ToggleResourceEnergyHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(
        &self,
        cmd: ToggleResourceEnergyCommand,
    ) -> Result<LearningResource, LearningResourceError> {
        tracing::debug!(resource_id = %cmd.id, energy_level = %cmd.energy_level, "changing energy level");

        let input = validate_request("toggle_resource_energy", &TOGGLE_ENERGY_SCHEMA, &cmd)?;

        let mut resource = self
            .resources
            .find_by_id(&input.id)
            .await?
            .ok_or(LearningResourceError::ResourceNotFound(input.id))?;

        resource.set_energy_level(input.energy_level);
        self.resources.update(&resource).await?;

        tracing::info!(resource_id = %input.id, energy_level = %input.energy_level, "energy level changed");
        Ok(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryLearningResourceRepository;
    use crate::domain::learning_resource::sample_resource;

    #[tokio::test]
    async fn changes_energy_level() {
        let resource = sample_resource();
        let repo = Arc::new(InMemoryLearningResourceRepository::with_resources(vec![
            resource.clone(),
        ]));
        let handler = ToggleResourceEnergyHandler::new(repo.clone());

        handler
            .handle(ToggleResourceEnergyCommand {
                id: resource.id().to_string(),
                energy_level: "low".to_string(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(resource.id()).await.unwrap().unwrap();
        assert_eq!(stored.energy_level(), EnergyLevel::Low);
    }
}
