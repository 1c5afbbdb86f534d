//! Field validator constructors.
//!
//! Every constructor takes the field's display name (used in messages) and
//! an options struct; each has an `optional_*` twin and every field type
//! offers `.optional()`.

mod array;
mod boolean;
mod date;
mod enumeration;
mod number;
mod object;
mod string;
mod uuid;

pub use array::{array_field, optional_array, ArrayField, ArrayFieldOptions};
pub use boolean::{boolean_field, optional_boolean, BooleanField};
pub use date::{date_field, optional_date, parse_date, DateField, DateFieldOptions};
pub use enumeration::{enum_field, optional_enum, EnumField, EnumFieldOptions};
pub use number::{
    number_field, number_in_range, optional_number, positive_number, NumberField,
    NumberFieldOptions,
};
pub use object::{object_field, optional_object, ObjectField, ObjectFieldOptions};
pub use string::{
    email_field, optional_email, optional_string, optional_url, string_field, url_field, Pattern,
    StringField, StringFieldOptions,
};
pub use self::uuid::{optional_uuid, uuid_field, UuidField};
