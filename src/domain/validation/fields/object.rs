//! Nested object fields.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, ValidatorOptions,
};
use crate::domain::validation::schema::SchemaMap;
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::{FieldValue, Record};
use std::marker::PhantomData;

#[derive(Clone, Default)]
pub struct ObjectFieldOptions {
    pub base: ValidatorOptions,
    /// Property validators. Without one, any object is accepted as-is.
    pub schema: Option<SchemaMap>,
}

/// Validates a plain object, optionally against a nested schema.
///
/// Properties are checked in schema order and the first failure aborts the
/// field. Keys not named by the schema are carried over untouched.
#[derive(Clone)]
pub struct ObjectField<P = Required> {
    messages: FieldMessages,
    schema: Option<SchemaMap>,
    _presence: PhantomData<P>,
}

pub fn object_field(name: &str, options: ObjectFieldOptions) -> ObjectField<Required> {
    ObjectField {
        messages: FieldMessages::new(name, &options.base, "must be an object"),
        schema: options.schema,
        _presence: PhantomData,
    }
}

pub fn optional_object(name: &str, options: ObjectFieldOptions) -> ObjectField<Optional> {
    object_field(name, options).optional()
}

impl Default for ObjectField<Required> {
    fn default() -> Self {
        object_field("Object", ObjectFieldOptions::default())
    }
}

impl<P: Presence> ObjectField<P> {
    pub fn optional(self) -> ObjectField<Optional> {
        ObjectField {
            messages: self.messages,
            schema: self.schema,
            _presence: PhantomData,
        }
    }

    fn apply_schema(&self, schema: &SchemaMap, input: &Record) -> FieldValidationResult<Record> {
        let mut output = input.clone();
        for (key, validator) in schema.iter() {
            let raw = input.get(key).unwrap_or(&FieldValue::Null);
            match validator.validate_dyn(raw) {
                Ok(Some(value)) => {
                    output.insert(key.to_string(), value);
                }
                Ok(None) => {
                    output.remove(key);
                }
                Err(err) => {
                    let message = format!("{}.{}: {}", self.messages.name, key, err.message);
                    return Err(FieldError::nested(message, err));
                }
            }
        }
        Ok(output)
    }
}

impl<P: Presence> FieldValidator for ObjectField<P> {
    type Output = P::Output<Record>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let record = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::Object(record) => record,
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        let output = match &self.schema {
            Some(schema) => self.apply_schema(schema, record)?,
            None => record.clone(),
        };

        Ok(P::present(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::fields::{
        boolean_field, optional_string, positive_number, NumberFieldOptions, StringFieldOptions,
    };
    use crate::domain::validation::FieldErrorKind;

    fn duration() -> ObjectField {
        object_field(
            "Duration",
            ObjectFieldOptions {
                schema: Some(
                    SchemaMap::new()
                        .field("value", positive_number("Duration.value", NumberFieldOptions::default()))
                        .field(
                            "isEstimated",
                            boolean_field("Duration.isEstimated", ValidatorOptions::default()),
                        ),
                ),
                ..Default::default()
            },
        )
    }

    #[test]
    fn validates_properties_against_schema() {
        let input = FieldValue::object([
            ("value", FieldValue::Number(45.0)),
            ("isEstimated", FieldValue::Bool(true)),
        ]);
        let output = duration().validate(&input).unwrap();
        assert_eq!(output.get("value"), Some(&FieldValue::Number(45.0)));
        assert_eq!(output.get("isEstimated"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn property_failure_is_prefixed_with_path() {
        let input = FieldValue::object([
            ("value", FieldValue::Number(0.0)),
            ("isEstimated", FieldValue::Bool(true)),
        ]);
        let err = duration().validate(&input).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Nested);
        assert_eq!(
            err.message,
            "Duration.value: Duration.value must be greater than 0"
        );
    }

    #[test]
    fn first_failing_property_wins() {
        let input = FieldValue::object([
            ("value", FieldValue::from("soon")),
            ("isEstimated", FieldValue::from("yes")),
        ]);
        assert_eq!(
            duration().validate(&input).unwrap_err().message,
            "Duration.value: Duration.value must be a number"
        );
    }

    #[test]
    fn unknown_keys_pass_through() {
        let input = FieldValue::object([
            ("value", FieldValue::Number(10.0)),
            ("isEstimated", FieldValue::Bool(false)),
            ("unit", FieldValue::from("minutes")),
        ]);
        let output = duration().validate(&input).unwrap();
        assert_eq!(output.get("unit"), Some(&FieldValue::from("minutes")));
    }

    #[test]
    fn absent_optional_properties_are_removed() {
        let profile = object_field(
            "Profile",
            ObjectFieldOptions {
                schema: Some(SchemaMap::new().field(
                    "bio",
                    optional_string("Profile.bio", StringFieldOptions::default()),
                )),
                ..Default::default()
            },
        );
        let input = FieldValue::object([("bio", FieldValue::from("   "))]);
        let output = profile.validate(&input).unwrap();
        assert!(!output.contains_key("bio"));
    }

    #[test]
    fn arrays_and_scalars_are_not_objects() {
        for bad in [FieldValue::Array(vec![]), FieldValue::from("x")] {
            assert_eq!(
                duration().validate(&bad).unwrap_err().message,
                "Duration must be an object"
            );
        }
    }

    #[test]
    fn absence_follows_presence() {
        assert_eq!(
            duration().validate(&FieldValue::Null).unwrap_err().message,
            "Duration is required"
        );
        let optional = duration().optional();
        assert_eq!(optional.validate(&FieldValue::Null), Ok(None));
    }

    #[test]
    fn without_schema_any_object_is_accepted() {
        let meta = object_field("Meta", ObjectFieldOptions::default());
        let mut record = Record::new();
        record.insert("k".to_string(), FieldValue::Number(1.0));
        assert_eq!(meta.validate(&FieldValue::Object(record.clone())), Ok(record));
    }

    #[test]
    fn default_field_is_named_object() {
        assert_eq!(
            ObjectField::<Required>::default().validate(&FieldValue::Null).unwrap_err().message,
            "Object is required"
        );
    }
}
