use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, ValidatorOptions,
};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use std::marker::PhantomData;

/// Validates booleans. No coercion from strings or numbers.
#[derive(Debug, Clone)]
pub struct BooleanField<P = Required> {
    messages: FieldMessages,
    _presence: PhantomData<P>,
}

pub fn boolean_field(name: &str, options: ValidatorOptions) -> BooleanField<Required> {
    BooleanField {
        messages: FieldMessages::new(name, &options, "must be a boolean"),
        _presence: PhantomData,
    }
}

pub fn optional_boolean(name: &str, options: ValidatorOptions) -> BooleanField<Optional> {
    boolean_field(name, options).optional()
}

impl Default for BooleanField<Required> {
    fn default() -> Self {
        boolean_field("Field", ValidatorOptions::default())
    }
}

impl<P: Presence> BooleanField<P> {
    pub fn optional(self) -> BooleanField<Optional> {
        BooleanField {
            messages: self.messages,
            _presence: PhantomData,
        }
    }
}

impl<P: Presence> FieldValidator for BooleanField<P> {
    type Output = P::Output<bool>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        match value {
            FieldValue::Null => P::absent(&self.messages.required),
            FieldValue::Bool(b) => Ok(P::present(*b)),
            _ => Err(FieldError::wrong_type(&self.messages.invalid_type)),
        }
    }
}
