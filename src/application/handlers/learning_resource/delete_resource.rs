//! DeleteResourceHandler - Command handler for removing resources.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::support::validate_request;
use crate::domain::foundation::ResourceId;
use crate::domain::learning_resource::LearningResourceError;
use crate::domain::validation::fields::uuid_field;
use crate::domain::validation::{
    create_validation_schema, SchemaMap, ValidationSchema, ValidatorOptions,
};
use crate::ports::LearningResourceRepository;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourceCommand {
    pub id: String,
}

#[derive(Debug, Deserialize)]
struct ValidDeleteResource {
    id: ResourceId,
}

static DELETE_RESOURCE_SCHEMA: Lazy<ValidationSchema<ValidDeleteResource>> = Lazy::new(|| {
    create_validation_schema(
        SchemaMap::new().field("id", uuid_field("ResourceId", ValidatorOptions::default())),
    )
});

pub struct DeleteResourceHandler {
    resources: Arc<dyn LearningResourceRepository>,
}

impl DeleteResourceHandler {
    pub fn new(resources: Arc<dyn LearningResourceRepository>) -> Self {
        Self { resources }
    }

    pub async fn handle(&self, cmd: DeleteResourceCommand) -> Result<(), LearningResourceError> {
        tracing::debug!(resource_id = %cmd.id, "deleting learning resource");

        let input = validate_request("delete_resource", &DELETE_RESOURCE_SCHEMA, &cmd)?;

        if self.resources.find_by_id(&input.id).await?.is_none() {
            return Err(LearningResourceError::ResourceNotFound(input.id));
        }

        self.resources.delete(&input.id).await?;

        tracing::info!(resource_id = %input.id, "learning resource deleted");
        Ok(())
    }
}
