//! Declarative field validation.
//!
//! Field validators turn one untyped [`FieldValue`] into a typed, normalized
//! value or a [`FieldError`]. A [`ValidationSchema`] runs a set of them over
//! a record, gathers every failure into a [`ValidationError`], and decodes
//! the accepted record into a request type.
//!
//! Presence is part of a validator's type: required fields yield `T`,
//! optional ones yield `Option<T>`.

mod error;
pub mod fields;
mod options;
mod sanitize;
mod schema;
mod validator;
mod value;

pub use error::{FieldError, FieldErrorKind, FieldValidationResult, ValidationError};
pub use options::{transform, Optional, Presence, Required, Transform, ValidatorOptions};
pub use sanitize::{sanitize_string, SanitizeOptions};
pub use schema::{create_validation_schema, SchemaMap, ValidationSchema};
pub use validator::{from_fn, AnyValue, DynFieldValidator, FieldValidator, FnValidator};
pub use value::{FieldValue, IntoFieldValue, Record};
