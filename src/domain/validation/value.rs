//! Dynamic input model for the validation engine.
//!
//! Request payloads reach the engine untyped. `FieldValue` is the tagged
//! variant every field validator decodes from; a validator never assumes a
//! shape it has not matched on.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Object payload: key to raw value.
pub type Record = BTreeMap<String, FieldValue>;

/// An untyped value awaiting validation.
///
/// `Null` covers both an explicit null and a missing key; the engine treats
/// them identically when checking presence.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Object(Record),
}

static NULL: FieldValue = FieldValue::Null;

impl FieldValue {
    /// Builds an object value from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        FieldValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Converts any serializable value through its JSON representation.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(FieldValue::from)
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Reads a property of an object value.
    ///
    /// Non-objects and missing keys both read as `Null`.
    pub fn get(&self, key: &str) -> &FieldValue {
        match self {
            FieldValue::Object(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Short runtime type name, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::Date(_) => "date",
            FieldValue::Array(_) => "array",
            FieldValue::Object(_) => "object",
        }
    }

    /// Converts back into JSON.
    ///
    /// Dates render as RFC 3339 with millisecond precision; non-finite
    /// numbers become `null`. Whole numbers are emitted as JSON integers so
    /// they decode into integer fields.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Number(n) => number_to_json(*n),
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Date(dt) => Value::String(dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            FieldValue::Array(items) => Value::Array(items.iter().map(FieldValue::to_json).collect()),
            FieldValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    const I64_BOUND: f64 = 9_007_199_254_740_992.0;

    if n.is_finite() && n.fract() == 0.0 && n.abs() <= I64_BOUND {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => FieldValue::Array(items.into_iter().map(FieldValue::from).collect()),
            Value::Object(map) => {
                FieldValue::Object(map.into_iter().map(|(k, v)| (k, FieldValue::from(v))).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(value: Vec<FieldValue>) -> Self {
        FieldValue::Array(value)
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        FieldValue::Object(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Conversion of a validator's typed output back into the dynamic model.
///
/// `None` means "absent": the schema composer leaves the key out of the
/// assembled record.
pub trait IntoFieldValue {
    fn into_field_value(self) -> Option<FieldValue>;
}

impl IntoFieldValue for FieldValue {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(self)
    }
}

impl IntoFieldValue for String {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::String(self))
    }
}

impl IntoFieldValue for f64 {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::Number(self))
    }
}

impl IntoFieldValue for bool {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::Bool(self))
    }
}

impl IntoFieldValue for DateTime<Utc> {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::Date(self))
    }
}

impl IntoFieldValue for Record {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::Object(self))
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    fn into_field_value(self) -> Option<FieldValue> {
        Some(FieldValue::Array(
            self.into_iter()
                .map(|item| item.into_field_value().unwrap_or(FieldValue::Null))
                .collect(),
        ))
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    fn into_field_value(self) -> Option<FieldValue> {
        self.and_then(IntoFieldValue::into_field_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn converts_json_payload_recursively() {
        let value = FieldValue::from(json!({
            "title": "Rust book",
            "topicIds": ["a", "b"],
            "duration": { "value": 90, "isEstimated": true },
            "notes": null
        }));

        assert_eq!(value.get("title"), &FieldValue::from("Rust book"));
        assert_eq!(
            value.get("topicIds"),
            &FieldValue::Array(vec!["a".into(), "b".into()])
        );
        assert_eq!(value.get("duration").get("value"), &FieldValue::Number(90.0));
        assert!(value.get("notes").is_null());
    }

    #[test]
    fn missing_keys_and_non_objects_read_as_null() {
        let value = FieldValue::object([("a", FieldValue::from(1))]);
        assert!(value.get("b").is_null());
        assert!(FieldValue::from("text").get("a").is_null());
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(FieldValue::Number(10.0).to_json(), json!(10));
        assert_eq!(FieldValue::Number(2.5).to_json(), json!(2.5));
        assert_eq!(FieldValue::Number(f64::NAN).to_json(), json!(null));
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Date(dt).to_json(),
            json!("2024-03-01T00:00:00.000Z")
        );
    }

    #[test]
    fn optional_outputs_collapse_to_absent() {
        assert_eq!(None::<String>.into_field_value(), None);
        assert_eq!(
            Some("x".to_string()).into_field_value(),
            Some(FieldValue::from("x"))
        );
        assert_eq!(
            vec![Some(1.0), None].into_field_value(),
            Some(FieldValue::Array(vec![FieldValue::Number(1.0), FieldValue::Null]))
        );
    }

    #[test]
    fn from_serializable_uses_json_shape() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Request {
            resource_id: String,
            notes: Option<String>,
        }

        let value = FieldValue::from_serializable(&Request {
            resource_id: "abc".to_string(),
            notes: None,
        })
        .unwrap();

        assert_eq!(value.get("resourceId"), &FieldValue::from("abc"));
        assert!(value.get("notes").is_null());
    }
}
