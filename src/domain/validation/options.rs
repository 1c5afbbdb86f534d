//! Options shared by every field validator, and the required/optional
//! type-state.

use super::error::{FieldError, FieldValidationResult};
use std::sync::Arc;

/// Post-validation mapping applied to an accepted value.
pub type Transform<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Wraps a closure as a [`Transform`].
pub fn transform<T, F>(f: F) -> Transform<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Message overrides accepted by every field constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Replaces "`<Field>` is required".
    pub required_message: Option<String>,
    /// Replaces the type-mismatch message.
    pub type_message: Option<String>,
}

impl ValidatorOptions {
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    pub fn with_type_message(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }
}

/// Resolved field name and messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldMessages {
    pub name: String,
    pub required: String,
    pub invalid_type: String,
}

impl FieldMessages {
    /// `type_rule` completes the default type message, e.g. "must be a string".
    pub fn new(name: &str, options: &ValidatorOptions, type_rule: &str) -> Self {
        Self {
            name: name.to_string(),
            required: options
                .required_message
                .clone()
                .unwrap_or_else(|| format!("{} is required", name)),
            invalid_type: options
                .type_message
                .clone()
                .unwrap_or_else(|| format!("{} {}", name, type_rule)),
        }
    }

    pub fn rule(&self, rule: impl std::fmt::Display) -> String {
        format!("{} {}", self.name, rule)
    }
}

/// Whether a field must be present.
///
/// A required field yields `T`; an optional one yields `Option<T>` and maps
/// absence to `None`.
pub trait Presence: Send + Sync + 'static {
    const REQUIRED: bool;

    type Output<T>;

    fn present<T>(value: T) -> Self::Output<T>;

    /// Outcome for a missing (or empty) value.
    fn absent<T>(required_message: &str) -> FieldValidationResult<Self::Output<T>>;
}

/// Field must be present; absence fails with the required message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

/// Field may be absent; absence succeeds with `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

impl Presence for Required {
    const REQUIRED: bool = true;

    type Output<T> = T;

    fn present<T>(value: T) -> T {
        value
    }

    fn absent<T>(required_message: &str) -> FieldValidationResult<T> {
        Err(FieldError::required(required_message))
    }
}

impl Presence for Optional {
    const REQUIRED: bool = false;

    type Output<T> = Option<T>;

    fn present<T>(value: T) -> Option<T> {
        Some(value)
    }

    fn absent<T>(_required_message: &str) -> FieldValidationResult<Option<T>> {
        Ok(None)
    }
}
