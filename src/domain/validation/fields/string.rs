//! String fields, plus the URL and email presets built on them.

use crate::domain::validation::error::{FieldError, FieldValidationResult};
use crate::domain::validation::options::{
    transform, FieldMessages, Optional, Presence, Required, Transform, ValidatorOptions,
};
use crate::domain::validation::validator::FieldValidator;
use crate::domain::validation::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::marker::PhantomData;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/A-Za-z0-9_ .-]*)*/?$")
        .unwrap_or_else(|e| unreachable!("URL pattern is valid: {}", e))
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .unwrap_or_else(|e| unreachable!("email pattern is valid: {}", e))
});

/// A regular expression the trimmed value must match.
#[derive(Debug, Clone)]
pub struct Pattern {
    pub regex: Regex,
    /// Replaces "`<Field>` has invalid format".
    pub message: Option<String>,
}

impl Pattern {
    pub fn new(regex: Regex) -> Self {
        Self {
            regex,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[derive(Clone)]
pub struct StringFieldOptions {
    pub base: ValidatorOptions,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    /// Trim surrounding whitespace before every other check.
    pub trim: bool,
    /// Accept "" as a value instead of treating it as missing.
    pub allow_empty: bool,
    pub transform: Option<Transform<String>>,
}

impl Default for StringFieldOptions {
    fn default() -> Self {
        Self {
            base: ValidatorOptions::default(),
            min_length: None,
            max_length: None,
            pattern: None,
            trim: true,
            allow_empty: false,
            transform: None,
        }
    }
}

/// Validates strings. Lengths count characters, not bytes.
#[derive(Clone)]
pub struct StringField<P = Required> {
    messages: FieldMessages,
    options: StringFieldOptions,
    _presence: PhantomData<P>,
}

/// Required string field.
pub fn string_field(name: &str, options: StringFieldOptions) -> StringField<Required> {
    StringField {
        messages: FieldMessages::new(name, &options.base, "must be a string"),
        options,
        _presence: PhantomData,
    }
}

/// Optional string field.
pub fn optional_string(name: &str, options: StringFieldOptions) -> StringField<Optional> {
    string_field(name, options).optional()
}

impl Default for StringField<Required> {
    fn default() -> Self {
        string_field("Field", StringFieldOptions::default())
    }
}

impl<P: Presence> StringField<P> {
    pub fn optional(self) -> StringField<Optional> {
        StringField {
            messages: self.messages,
            options: self.options,
            _presence: PhantomData,
        }
    }

    fn check_constraints(&self, value: &str) -> FieldValidationResult<()> {
        let length = value.chars().count();

        if let Some(min) = self.options.min_length {
            if length < min {
                return Err(FieldError::constraint(
                    self.messages.rule(format_args!("must be at least {} characters", min)),
                ));
            }
        }

        if let Some(max) = self.options.max_length {
            if length > max {
                return Err(FieldError::constraint(
                    self.messages.rule(format_args!("must be at most {} characters", max)),
                ));
            }
        }

        if let Some(pattern) = &self.options.pattern {
            if !pattern.regex.is_match(value) {
                return Err(FieldError::constraint(
                    pattern
                        .message
                        .clone()
                        .unwrap_or_else(|| self.messages.rule("has invalid format")),
                ));
            }
        }

        Ok(())
    }
}

impl<P: Presence> FieldValidator for StringField<P> {
    type Output = P::Output<String>;

    fn validate(&self, value: &FieldValue) -> FieldValidationResult<Self::Output> {
        let raw = match value {
            FieldValue::Null => return P::absent(&self.messages.required),
            FieldValue::String(s) => s.as_str(),
            _ => return Err(FieldError::wrong_type(&self.messages.invalid_type)),
        };

        let processed = if self.options.trim { raw.trim() } else { raw };

        if processed.is_empty() {
            if self.options.allow_empty {
                return Ok(P::present(String::new()));
            }
            return P::absent(&self.messages.required);
        }

        self.check_constraints(processed)?;

        let accepted = processed.to_string();
        Ok(P::present(match &self.options.transform {
            Some(f) => f(accepted),
            None => accepted,
        }))
    }
}

/// Required URL field. Scheme is optional; only http and https are accepted
/// when present.
pub fn url_field(name: &str, mut options: StringFieldOptions) -> StringField<Required> {
    options.pattern = Some(
        Pattern::new(URL_PATTERN.clone()).with_message(format!("{} must be a valid URL", name)),
    );
    string_field(name, options)
}

/// Optional URL field.
pub fn optional_url(name: &str, options: StringFieldOptions) -> StringField<Optional> {
    url_field(name, options).optional()
}

/// Required email field. Accepted values are lowercased; any caller
/// transform is replaced.
pub fn email_field(name: &str, mut options: StringFieldOptions) -> StringField<Required> {
    options.pattern = Some(
        Pattern::new(EMAIL_PATTERN.clone())
            .with_message(format!("{} must be a valid email address", name)),
    );
    options.transform = Some(transform(|s: String| s.to_lowercase()));
    string_field(name, options)
}

/// Optional email field.
pub fn optional_email(name: &str, options: StringFieldOptions) -> StringField<Optional> {
    email_field(name, options).optional()
}
