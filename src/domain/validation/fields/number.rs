//! Numeric fields.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, Transform, ValidatorOptions,
};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use std::marker::PhantomData;

#[derive(Clone, Default)]
pub struct NumberFieldOptions {
    pub base: ValidatorOptions,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integer: bool,
    /// Strictly greater than zero.
    pub positive: bool,
    /// Greater than or equal to zero.
    pub non_negative: bool,
    pub transform: Option<Transform<f64>>,
}

/// Validates finite numbers.
///
/// Rules run in a fixed order: integer, positive, non-negative, then the
/// min/max bounds. The first failing rule decides the message.
#[derive(Clone)]
pub struct NumberField<P = Required> {
    messages: FieldMessages,
    options: NumberFieldOptions,
    _presence: PhantomData<P>,
}

pub fn number_field(name: &str, options: NumberFieldOptions) -> NumberField<Required> {
    NumberField {
        messages: FieldMessages::new(name, &options.base, "must be a number"),
        options,
        _presence: PhantomData,
    }
}

pub fn optional_number(name: &str, options: NumberFieldOptions) -> NumberField<Optional> {
    number_field(name, options).optional()
}

impl Default for NumberField<Required> {
    fn default() -> Self {
        number_field("Number", NumberFieldOptions::default())
    }
}

/// Required number strictly greater than zero.
pub fn positive_number(name: &str, mut options: NumberFieldOptions) -> NumberField<Required> {
    options.positive = true;
    number_field(name, options)
}

/// Required number within `[min, max]`.
pub fn number_in_range(
    name: &str,
    min: f64,
    max: f64,
    mut options: NumberFieldOptions,
) -> NumberField<Required> {
    options.min = Some(min);
    options.max = Some(max);
    number_field(name, options)
}

impl<P: Presence> NumberField<P> {
    pub fn optional(self) -> NumberField<Optional> {
        NumberField {
            messages: self.messages,
            options: self.options,
            _presence: PhantomData,
        }
    }

    fn check_constraints(&self, n: f64) -> FieldValidationResult<()> {
        let opts = &self.options;
        let fail = |rule: String| Err(FieldError::constraint(self.messages.rule(rule)));

        if opts.integer && n.fract() != 0.0 {
            return fail("must be an integer".to_string());
        }
        if opts.positive && n <= 0.0 {
            return fail("must be greater than 0".to_string());
        }
        if opts.non_negative && n < 0.0 {
            return fail("must be greater than or equal to 0".to_string());
        }

        let below = opts.min.map_or(false, |min| n < min);
        let above = opts.max.map_or(false, |max| n > max);
        if !below && !above {
            return Ok(());
        }

        match (opts.min, opts.max) {
            (Some(min), Some(max)) if min == max => fail(format!("must be exactly {}", min)),
            (Some(min), Some(max)) => fail(format!("must be between {} and {}", min, max)),
            (Some(min), None) => fail(format!("must be at least {}", min)),
            (None, Some(max)) => fail(format!("must be at most {}", max)),
            (None, None) => Ok(()),
        }
    }
}

impl<P: Presence> FieldValidator for NumberField<P> {
    type Output = P::Output<f64>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let n = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::Number(n) if n.is_finite() => *n,
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        self.check_constraints(n)?;

        Ok(P::present(match &self.options.transform {
            Some(f) => f(n),
            None => n,
        }))
    }
}
