//! Array fields with optional per-item validation.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, Transform, ValidatorOptions,
};
use crate::domain::validation::validator::{AnyValue, FieldValidator};
use crate::domain::validation::value::FieldValue;
use std::marker::PhantomData;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayFieldOptions {
    pub base: ValidatorOptions,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// Validates arrays.
///
/// Items go through the item validator in order; the first failing item
/// aborts the field. The output holds the item validator's results. An
/// optional field treats an empty array as absent.
pub struct ArrayField<V = AnyValue, P = Required>
where
    V: FieldValidator,
{
    messages: FieldMessages,
    options: ArrayFieldOptions,
    item_validator: V,
    transform: Option<Transform<Vec<V::Output>>>,
    _presence: PhantomData<P>,
}

pub fn array_field(name: &str, options: ArrayFieldOptions) -> ArrayField<AnyValue, Required> {
    ArrayField {
        messages: FieldMessages::new(name, &options.base, "must be an array"),
        options,
        item_validator: AnyValue,
        transform: None,
        _presence: PhantomData,
    }
}

pub fn optional_array(name: &str, options: ArrayFieldOptions) -> ArrayField<AnyValue, Optional> {
    array_field(name, options).optional()
}

impl Default for ArrayField<AnyValue, Required> {
    fn default() -> Self {
        array_field("Array", ArrayFieldOptions::default())
    }
}

fn items_label(n: usize) -> &'static str {
    if n == 1 {
        "item"
    } else {
        "items"
    }
}

impl<V: FieldValidator, P: Presence> ArrayField<V, P> {
    /// Validates every item with `item_validator`.
    ///
    /// Replaces any transform set earlier, since the item type changes.
    pub fn items<W: FieldValidator>(self, item_validator: W) -> ArrayField<W, P> {
        ArrayField {
            messages: self.messages,
            options: self.options,
            item_validator,
            transform: None,
            _presence: PhantomData,
        }
    }

    pub fn with_transform<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<V::Output>) -> Vec<V::Output> + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(f));
        self
    }

    pub fn optional(self) -> ArrayField<V, Optional> {
        ArrayField {
            messages: self.messages,
            options: self.options,
            item_validator: self.item_validator,
            transform: self.transform,
            _presence: PhantomData,
        }
    }

    fn check_length(&self, len: usize) -> FieldValidationResult<()> {
        if let Some(min) = self.options.min_length {
            if len < min {
                return Err(FieldError::constraint(self.messages.rule(format_args!(
                    "must contain at least {} {}",
                    min,
                    items_label(min)
                ))));
            }
        }
        if let Some(max) = self.options.max_length {
            if len > max {
                return Err(FieldError::constraint(self.messages.rule(format_args!(
                    "must contain at most {} {}",
                    max,
                    items_label(max)
                ))));
            }
        }
        Ok(())
    }
}

impl<V: FieldValidator, P: Presence> FieldValidator for ArrayField<V, P> {
    type Output = P::Output<Vec<V::Output>>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let items = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::Array(items) => items,
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        if !P::REQUIRED && items.is_empty() {
            return P::absent(&self.messages.required);
        }

        self.check_length(items.len())?;

        let mut validated = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.item_validator.validate(item) {
                Ok(output) => validated.push(output),
                Err(err) => {
                    let message = format!("{}[{}]: {}", self.messages.name, index, err.message);
                    return Err(FieldError::nested(message, err));
                }
            }
        }

        Ok(P::present(match &self.transform {
            Some(f) => f(validated),
            None => validated,
        }))
    }
}
