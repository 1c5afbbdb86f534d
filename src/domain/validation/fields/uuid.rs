use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, ValidatorOptions,
};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::marker::PhantomData;

static UUID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .unwrap_or_else(|e| unreachable!("UUID pattern is valid: {}", e))
});

/// Validates hyphenated UUID strings and returns them lowercased.
#[derive(Debug, Clone)]
pub struct UuidField<P = Required> {
    messages: FieldMessages,
    _presence: PhantomData<P>,
}

pub fn uuid_field(name: &str, options: ValidatorOptions) -> UuidField<Required> {
    UuidField {
        messages: FieldMessages::new(name, &options, "must be a valid UUID"),
        _presence: PhantomData,
    }
}

pub fn optional_uuid(name: &str, options: ValidatorOptions) -> UuidField<Optional> {
    uuid_field(name, options).optional()
}

impl Default for UuidField<Required> {
    fn default() -> Self {
        uuid_field("UUID", ValidatorOptions::default())
    }
}

impl<P: Presence> UuidField<P> {
    pub fn optional(self) -> UuidField<Optional> {
        UuidField {
            messages: self.messages,
            _presence: PhantomData,
        }
    }
}

impl<P: Presence> FieldValidator for UuidField<P> {
    type Output = P::Output<String>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let raw = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::String(s) => s.trim(),
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        if raw.is_empty() {
            return P::absent(&self.messages.required);
        }
        if !UUID_PATTERN.is_match(raw) {
            return Err(FieldError::constraint(&self.messages.invalid_type));
        }

        Ok(P::present(raw.to_lowercase()))
    }
}
