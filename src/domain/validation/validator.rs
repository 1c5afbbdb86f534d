//! The field validator contract.

use super::error::FieldValidationResult;
use super::value::{FieldValue, IntoFieldValue};

/// Validates and normalizes a single untyped value.
///
/// Validators are immutable after construction and safe to share across
/// threads; each call is independent.
pub trait FieldValidator: Send + Sync {
    type Output;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output>;
}

/// Object-safe view of a validator, used where validators of different
/// output types share one collection.
pub trait DynFieldValidator: Send + Sync {
    /// `Ok(None)` means the field is absent from the result.
    fn validate_dyn(&self, value: &FieldValue) -> FieldValidationResult<Option<FieldValue>>;
}

impl<V> DynFieldValidator for V
where
    V: FieldValidator,
    V::Output: IntoFieldValue,
{
    fn validate_dyn(&self, value: &FieldValue) -> FieldValidationResult<Option<FieldValue>> {
        self.validate(value).map(IntoFieldValue::into_field_value)
    }
}

/// Validator backed by a closure.
pub struct FnValidator<F>(F);

/// Builds a validator from a closure.
pub fn from_fn<T, F>(f: F) -> FnValidator<F>
where
    F: Fn(&FieldValue) -> FieldValidationResult<T> + Send + Sync,
{
    FnValidator(f)
}

impl<T, F> FieldValidator for FnValidator<F>
where
    F: Fn(&FieldValue) -> FieldValidationResult<T> + Send + Sync,
{
    type Output = T;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<T> {
        (self.0)(value)
    }
}

/// Accepts any value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyValue;

impl FieldValidator for AnyValue {
    type Output = FieldValue;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<FieldValue> {
        Ok(value.clone())
    }
}
