//! Failure types produced by field validators and schemas.

use super::value::Record;
use crate::domain::foundation::{DomainError, ErrorCode};
use std::collections::BTreeMap;
use thiserror::Error;

/// Category of a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Value absent (or empty after trimming) on a required field.
    Required,
    /// Runtime type did not match.
    WrongType,
    /// Length, range, pattern, or format rule violated.
    Constraint,
    /// Value outside an enumeration.
    NotAllowed,
    /// Failure inside an array item or object property.
    Nested,
}

/// Failure of a single field validator.
///
/// The message is user-facing and already contains the field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: FieldErrorKind,
    pub message: String,
    cause: Option<Box<FieldError>>,
}

impl FieldError {
    pub fn new(kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Required, message)
    }

    pub fn wrong_type(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::WrongType, message)
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::Constraint, message)
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(FieldErrorKind::NotAllowed, message)
    }

    /// Wraps an inner failure with a location-prefixed message.
    pub fn nested(message: impl Into<String>, cause: FieldError) -> Self {
        Self {
            kind: FieldErrorKind::Nested,
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// The inner failure for `Nested` errors.
    pub fn cause(&self) -> Option<&FieldError> {
        self.cause.as_deref()
    }

    /// Follows the `Nested` chain to the failure that started it.
    pub fn root_cause(&self) -> &FieldError {
        let mut current = self;
        while let Some(inner) = current.cause() {
            current = inner;
        }
        current
    }
}

/// Outcome of a single field validator.
pub type FieldValidationResult<T> = Result<T, FieldError>;

/// Aggregate failure of a schema.
///
/// Carries every failing field's message keyed by field name, plus the
/// partially validated record assembled from the fields that passed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}: {}", ValidationError::NAME, summarize(.errors))]
pub struct ValidationError {
    pub errors: BTreeMap<String, String>,
    pub value: Record,
}

impl ValidationError {
    pub const NAME: &'static str = "VALIDATION_ERROR";
    pub const STATUS_CODE: u16 = 400;

    pub fn new(errors: BTreeMap<String, String>, value: Record) -> Self {
        Self { errors, value }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn status_code(&self) -> u16 {
        Self::STATUS_CODE
    }

    /// Message for a given field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

fn summarize(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let message = summarize(&err.errors);
        err.errors.into_iter().fold(
            DomainError::new(ErrorCode::ValidationFailed, message),
            |acc, (field, msg)| acc.with_detail(field, msg),
        )
    }
}
