//! Helpers shared by the learning-resource handlers.

use crate::domain::foundation::{ResourceTypeId, TopicId};
use crate::domain::learning_resource::{
    Difficulty, EnergyLevel, LearningResourceError, ResourceStatus,
};
use crate::domain::validation::fields::{enum_field, EnumField, EnumFieldOptions};
use crate::domain::validation::{FieldValue, ValidationSchema};
use crate::ports::{ResourceTypeRepository, TopicRepository};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Runs `request` through `schema`, logging rejections.
pub(super) fn validate_request<C, T>(
    operation: &'static str,
    schema: &ValidationSchema<T>,
    request: &C,
) -> Result<T, LearningResourceError>
where
    C: Serialize,
    T: DeserializeOwned,
{
    let payload = FieldValue::from_serializable(request)
        .map_err(|e| LearningResourceError::Infrastructure(e.to_string()))?;

    schema.validate(&payload).map_err(|err| {
        tracing::warn!(
            operation,
            fields = ?err.errors.keys().collect::<Vec<_>>(),
            "request rejected by validation"
        );
        LearningResourceError::from(err)
    })
}

pub(super) fn difficulty_field(name: &str) -> EnumField {
    level_field(Difficulty::values(), name)
}

pub(super) fn energy_level_field(name: &str) -> EnumField {
    level_field(EnergyLevel::values(), name)
}

pub(super) fn status_field(name: &str) -> EnumField {
    level_field(ResourceStatus::values(), name)
}

fn level_field(values: &[&str], name: &str) -> EnumField {
    enum_field(
        values.iter().copied(),
        name,
        EnumFieldOptions {
            to_lower_case: true,
            ..Default::default()
        },
    )
}

/// Fails with `NotFound` unless the resource type exists.
pub(super) async fn ensure_resource_type_exists(
    repository: &dyn ResourceTypeRepository,
    id: &ResourceTypeId,
) -> Result<(), LearningResourceError> {
    match repository.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(LearningResourceError::not_found("ResourceType", id)),
    }
}

/// Fails with `NotFound` naming the first unknown topic.
pub(super) async fn ensure_topics_exist(
    repository: &dyn TopicRepository,
    ids: &[TopicId],
) -> Result<(), LearningResourceError> {
    for id in ids {
        if repository.find_by_id(id).await?.is_none() {
            return Err(LearningResourceError::not_found("Topic", id));
        }
    }
    Ok(())
}

/// Empty strings mean "no value".
pub(super) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
