//! Closed-set string fields.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, Transform, ValidatorOptions,
};
use crate::domain::validation::sanitize::{sanitize_string, SanitizeOptions};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use std::marker::PhantomData;

#[derive(Clone, Default)]
pub struct EnumFieldOptions {
    pub base: ValidatorOptions,
    /// Lowercase input before matching.
    pub to_lower_case: bool,
    /// Collapse whitespace runs before matching.
    pub collapse_spaces: bool,
    /// Replaces "`<Field>` must be one of: ...".
    pub invalid_value_message: Option<String>,
    pub transform: Option<Transform<String>>,
}

/// Accepts a string from a fixed set after sanitizing it.
#[derive(Clone)]
pub struct EnumField<P = Required> {
    messages: FieldMessages,
    allowed: Vec<String>,
    invalid_value_message: String,
    sanitize: SanitizeOptions,
    transform: Option<Transform<String>>,
    _presence: PhantomData<P>,
}

pub fn enum_field<I, S>(allowed: I, name: &str, options: EnumFieldOptions) -> EnumField<Required>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
    let invalid_value_message = options
        .invalid_value_message
        .unwrap_or_else(|| format!("{} must be one of: {}", name, allowed.join(", ")));

    EnumField {
        messages: FieldMessages::new(name, &options.base, "must be a string"),
        allowed,
        invalid_value_message,
        sanitize: SanitizeOptions {
            to_lower_case: options.to_lower_case,
            collapse_spaces: options.collapse_spaces,
        },
        transform: options.transform,
        _presence: PhantomData,
    }
}

pub fn optional_enum<I, S>(allowed: I, name: &str, options: EnumFieldOptions) -> EnumField<Optional>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    enum_field(allowed, name, options).optional()
}

/// An empty set named "Enum"; every value is rejected until allowed values are given.
impl Default for EnumField<Required> {
    fn default() -> Self {
        enum_field(Vec::<String>::new(), "Enum", EnumFieldOptions::default())
    }
}

impl<P: Presence> EnumField<P> {
    pub fn optional(self) -> EnumField<Optional> {
        EnumField {
            messages: self.messages,
            allowed: self.allowed,
            invalid_value_message: self.invalid_value_message,
            sanitize: self.sanitize,
            transform: self.transform,
            _presence: PhantomData,
        }
    }

    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }
}

impl<P: Presence> FieldValidator for EnumField<P> {
    type Output = P::Output<String>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let raw = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::String(s) => s,
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        let sanitized = sanitize_string(raw, self.sanitize);
        if sanitized.is_empty() {
            return P::absent(&self.messages.required);
        }

        if !self.allowed.iter().any(|candidate| *candidate == sanitized) {
            return Err(FieldError::not_allowed(&self.invalid_value_message));
        }

        Ok(P::present(match &self.transform {
            Some(f) => f(sanitized),
            None => sanitized,
        }))
    }
}
