//! Validation of sign-up payloads.

use crate::domain::validation::fields::{
    email_field, optional_string, optional_uuid, string_field, Pattern, StringFieldOptions,
};
use crate::domain::validation::{
    create_validation_schema, FieldValue, SchemaMap, ValidationError, ValidationSchema,
    ValidatorOptions,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validated sign-up data. The password is still plaintext here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_name: Option<String>,
    pub password: String,
    pub bio: Option<String>,
    pub avatar: Option<Uuid>,
}

static USER_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+$")
        .unwrap_or_else(|e| unreachable!("user name pattern is valid: {}", e))
});

static REGISTRATION_SCHEMA: Lazy<ValidationSchema<Registration>> = Lazy::new(|| {
    let name = StringFieldOptions {
        max_length: Some(100),
        ..Default::default()
    };

    create_validation_schema(
        SchemaMap::new()
            .field("firstName", string_field("FirstName", name.clone()))
            .field("lastName", string_field("LastName", name))
            .field("email", email_field("Email", StringFieldOptions::default()))
            .field(
                "userName",
                optional_string(
                    "UserName",
                    StringFieldOptions {
                        min_length: Some(3),
                        max_length: Some(30),
                        pattern: Some(Pattern::new(USER_NAME_PATTERN.clone()).with_message(
                            "UserName may only contain letters, digits, '.', '_' and '-'",
                        )),
                        ..Default::default()
                    },
                ),
            )
            .field(
                "password",
                string_field(
                    "Password",
                    StringFieldOptions {
                        min_length: Some(MIN_PASSWORD_LENGTH),
                        max_length: Some(128),
                        trim: false,
                        ..Default::default()
                    },
                ),
            )
            .field(
                "bio",
                optional_string(
                    "Bio",
                    StringFieldOptions {
                        max_length: Some(1000),
                        ..Default::default()
                    },
                ),
            )
            .field("avatar", optional_uuid("Avatar", ValidatorOptions::default())),
    )
});

/// Validates a raw sign-up payload.
pub fn validate_registration(payload: &FieldValue) -> Result<Registration, ValidationError> {
    REGISTRATION_SCHEMA.validate(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "firstName": " Ada ",
            "lastName": "Lovelace",
            "email": "Ada@Example.com",
            "userName": "ada_l",
            "password": "correct horse",
        })
    }

    #[test]
    fn accepts_and_normalizes_valid_payload() {
        let registration = validate_registration(&payload().into()).unwrap();
        assert_eq!(registration.first_name, "Ada");
        assert_eq!(registration.email, "ada@example.com");
        assert_eq!(registration.user_name.as_deref(), Some("ada_l"));
        assert!(registration.bio.is_none());
    }

    #[test]
    fn reports_every_invalid_field() {
        let mut body = payload();
        body["email"] = json!("not-an-email");
        body["password"] = json!("short");
        body["userName"] = json!("a b");

        let err = validate_registration(&body.into()).unwrap_err();
        assert_eq!(err.error_for("email"), Some("Email must be a valid email address"));
        assert_eq!(err.error_for("password"), Some("Password must be at least 8 characters"));
        assert_eq!(
            err.error_for("userName"),
            Some("UserName may only contain letters, digits, '.', '_' and '-'")
        );
    }

    #[test]
    fn password_whitespace_is_preserved() {
        let mut body = payload();
        body["password"] = json!("  spaced out  ");
        let registration = validate_registration(&body.into()).unwrap();
        assert_eq!(registration.password, "  spaced out  ");
    }

    #[test]
    fn avatar_must_be_uuid() {
        let mut body = payload();
        body["avatar"] = json!("nope");
        let err = validate_registration(&body.into()).unwrap_err();
        assert_eq!(err.error_for("avatar"), Some("Avatar must be a valid UUID"));
    }
}
