//! Record-level schemas composed from field validators.

use super::error::{FieldValidationResult, ValidationError};
use super::validator::{DynFieldValidator, FieldValidator};
use super::value::{FieldValue, IntoFieldValue, Record};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Ordered mapping from record key to field validator.
#[derive(Clone, Default)]
pub struct SchemaMap {
    fields: Vec<(String, Arc<dyn DynFieldValidator>)>,
}

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the validator for `key`.
    pub fn field<V>(mut self, key: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
        V::Output: IntoFieldValue,
    {
        let key = key.into();
        let validator: Arc<dyn DynFieldValidator> = Arc::new(validator);
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = validator,
            None => self.fields.push((key, validator)),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &dyn DynFieldValidator)> {
        self.fields
            .iter()
            .map(|(key, validator)| (key.as_str(), validator.as_ref()))
    }
}

impl fmt::Debug for SchemaMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// Validates whole records and decodes them into `T`.
///
/// Unlike a nested object field, a schema checks every key and reports all
/// failures together.
pub struct ValidationSchema<T> {
    fields: SchemaMap,
    _target: PhantomData<fn() -> T>,
}

/// Builds a schema from its field validators.
pub fn create_validation_schema<T: DeserializeOwned>(fields: SchemaMap) -> ValidationSchema<T> {
    ValidationSchema {
        fields,
        _target: PhantomData,
    }
}

impl<T> Clone for ValidationSchema<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            _target: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> ValidationSchema<T> {
    /// Validates `payload` and decodes the accepted record.
    pub fn validate(&self, payload: &FieldValue) -> Result<T, ValidationError> {
        let record = self.validate_record(payload)?;
        let json = FieldValue::Object(record.clone()).to_json();

        serde_json::from_value(json).map_err(|e| {
            tracing::error!(error = %e, "validated record does not decode into target type");
            let mut errors = BTreeMap::new();
            errors.insert(
                "payload".to_string(),
                format!("Payload could not be decoded: {}", e),
            );
            ValidationError::new(errors, record)
        })
    }

    /// Convenience for JSON request bodies.
    pub fn validate_json(&self, payload: serde_json::Value) -> Result<T, ValidationError> {
        self.validate(&FieldValue::from(payload))
    }

    /// Validates `payload` without decoding.
    ///
    /// The record holds only schema keys, with absent optionals left out.
    /// A non-object payload reads as one with every key missing.
    pub fn validate_record(&self, payload: &FieldValue) -> Result<Record, ValidationError> {
        let mut record = Record::new();
        let mut errors = BTreeMap::new();

        for (key, validator) in self.fields.iter() {
            let outcome: FieldValidationResult<Option<FieldValue>> =
                validator.validate_dyn(payload.get(key));
            match outcome {
                Ok(Some(value)) => {
                    record.insert(key.to_string(), value);
                }
                Ok(None) => {}
                Err(err) => {
                    errors.insert(key.to_string(), err.message);
                }
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "schema validation failed");
            Err(ValidationError::new(errors, record))
        }
    }

    pub fn fields(&self) -> &SchemaMap {
        &self.fields
    }
}
