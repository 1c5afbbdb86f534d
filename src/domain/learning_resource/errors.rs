//! Learning-resource use-case errors.

use crate::domain::foundation::{DomainError, ErrorCode, ResourceId};
use crate::domain::validation::ValidationError;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearningResourceError {
    /// Request failed validation; field name to message.
    #[error("Invalid data: {}", describe(.0))]
    InvalidData(BTreeMap<String, String>),

    /// A referenced topic or resource type does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Learning resource not found: {0}")]
    ResourceNotFound(ResourceId),

    #[error("Unexpected error: {0}")]
    Infrastructure(String),
}

fn describe(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl LearningResourceError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        LearningResourceError::InvalidData(errors)
    }

    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        LearningResourceError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LearningResourceError::InvalidData(_) => ErrorCode::InvalidData,
            LearningResourceError::NotFound { .. } => ErrorCode::NotFound,
            LearningResourceError::ResourceNotFound(_) => ErrorCode::LearningResourceNotFound,
            LearningResourceError::Infrastructure(_) => ErrorCode::Unexpected,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.code().status_code()
    }

    /// Field-level details, as an API would return them.
    pub fn errors(&self) -> BTreeMap<String, String> {
        match self {
            LearningResourceError::InvalidData(errors) => errors.clone(),
            LearningResourceError::NotFound { resource, id } => BTreeMap::from([
                ("resource".to_string(), resource.clone()),
                ("id".to_string(), id.clone()),
            ]),
            LearningResourceError::ResourceNotFound(_) | LearningResourceError::Infrastructure(_) => {
                BTreeMap::new()
            }
        }
    }
}

impl From<ValidationError> for LearningResourceError {
    fn from(err: ValidationError) -> Self {
        LearningResourceError::InvalidData(err.errors)
    }
}

impl From<DomainError> for LearningResourceError {
    fn from(err: DomainError) -> Self {
        LearningResourceError::Infrastructure(err.to_string())
    }
}
