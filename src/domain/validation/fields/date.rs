//! Date fields.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    FieldMessages, Optional, Presence, Required, Transform, ValidatorOptions,
};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::marker::PhantomData;

#[derive(Clone, Default)]
pub struct DateFieldOptions {
    pub base: ValidatorOptions,
    /// Inclusive lower bound.
    pub min: Option<DateTime<Utc>>,
    /// Inclusive upper bound.
    pub max: Option<DateTime<Utc>>,
    /// Accept date strings as well as date values.
    pub parse_string: bool,
    pub transform: Option<Transform<DateTime<Utc>>>,
}

#[derive(Clone)]
pub struct DateField<P = Required> {
    messages: FieldMessages,
    options: DateFieldOptions,
    _presence: PhantomData<P>,
}

pub fn date_field(name: &str, options: DateFieldOptions) -> DateField<Required> {
    DateField {
        messages: FieldMessages::new(name, &options.base, "must be a valid date"),
        options,
        _presence: PhantomData,
    }
}

pub fn optional_date(name: &str, options: DateFieldOptions) -> DateField<Optional> {
    date_field(name, options).optional()
}

impl Default for DateField<Required> {
    fn default() -> Self {
        date_field("Date", DateFieldOptions::default())
    }
}

/// Parses RFC 3339 timestamps, bare `YYYY-MM-DD` dates (midnight UTC), and
/// offset-less date-times (read as UTC).
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}

fn iso(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<P: Presence> DateField<P> {
    pub fn optional(self) -> DateField<Optional> {
        DateField {
            messages: self.messages,
            options: self.options,
            _presence: PhantomData,
        }
    }

    fn coerce(&self, value: &FieldValue) -> Option<DateTime<Utc>> {
        match value {
            FieldValue::Date(dt) => Some(*dt),
            FieldValue::String(s) if self.options.parse_string => parse_date(s),
            _ => None,
        }
    }
}

impl<P: Presence> FieldValidator for DateField<P> {
    type Output = P::Output<DateTime<Utc>>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        if value.is_null() {
            return P::absent(&self.messages.required);
        }

        let date = self
            .coerce(value)
            .ok_or_else(|| FieldError::wrong_type(&self.messages.invalid_type))?;

        if let Some(min) = &self.options.min {
            if date < *min {
                return Err(FieldError::constraint(
                    self.messages.rule(format_args!("must be on or after {}", iso(min))),
                ));
            }
        }
        if let Some(max) = &self.options.max {
            if date > *max {
                return Err(FieldError::constraint(
                    self.messages.rule(format_args!("must be on or before {}", iso(max))),
                ));
            }
        }

        Ok(P::present(match &self.options.transform {
            Some(f) => f(date),
            None => date,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn bounded() -> DateField {
        date_field(
            "Due",
            DateFieldOptions {
                min: Some(utc(2024, 1, 1)),
                max: Some(utc(2024, 12, 31)),
                parse_string: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn accepts_date_values() {
        let due = date_field("Due", DateFieldOptions::default());
        let dt = utc(2024, 5, 1);
        assert_eq!(due.validate(&FieldValue::Date(dt)), Ok(dt));
    }

    #[test]
    fn strings_rejected_unless_parsing_enabled() {
        let due = date_field("Due", DateFieldOptions::default());
        assert_eq!(
            due.validate(&"2024-05-01".into()).unwrap_err().message,
            "Due must be a valid date"
        );
        assert_eq!(bounded().validate(&"2024-05-01".into()), Ok(utc(2024, 5, 1)));
    }

    #[test]
    fn unparseable_strings_fail_type_check() {
        assert_eq!(
            bounded().validate(&"next tuesday".into()).unwrap_err().message,
            "Due must be a valid date"
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(bounded().validate(&FieldValue::Date(utc(2024, 1, 1))).is_ok());
        assert!(bounded().validate(&FieldValue::Date(utc(2024, 12, 31))).is_ok());
    }

    #[test]
    fn bound_messages_include_iso_timestamp() {
        assert_eq!(
            bounded().validate(&FieldValue::Date(utc(2023, 12, 31))).unwrap_err().message,
            "Due must be on or after 2024-01-01T00:00:00.000Z"
        );
        assert_eq!(
            bounded().validate(&"2025-01-01T10:00:00Z".into()).unwrap_err().message,
            "Due must be on or before 2024-12-31T00:00:00.000Z"
        );
    }

    #[test]
    fn absence_follows_presence() {
        assert_eq!(
            bounded().validate(&FieldValue::Null).unwrap_err().message,
            "Due is required"
        );
        let optional = optional_date("Due", DateFieldOptions::default());
        assert_eq!(optional.validate(&FieldValue::Null), Ok(None));
    }

    #[test]
    fn parses_supported_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        assert_eq!(parse_date("2024-03-01T12:30:00Z"), Some(expected));
        assert_eq!(parse_date("2024-03-01T14:30:00+02:00"), Some(expected));
        assert_eq!(parse_date("2024-03-01T12:30:00"), Some(expected));
        assert_eq!(parse_date("2024-03-01T12:30"), Some(expected));
        assert_eq!(parse_date("2024-03-01"), Some(utc(2024, 3, 1)));
        assert_eq!(parse_date("03/01/2024"), None);
    }

    #[test]
    fn default_field_is_named_date() {
        assert_eq!(
            DateField::<Required>::default().validate(&FieldValue::Bool(true)).unwrap_err().message,
            "Date must be a valid date"
        );
    }
}
