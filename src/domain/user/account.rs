//! User account aggregate.

use super::person::Person;
use super::registration::Registration;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::CryptoService;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    person: Person,
    user_name: Option<String>,
    email_verified: bool,
    hashed_password: String,
    enabled: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Creates an enabled, unverified account from validated sign-up data.
    ///
    /// The id and the password hash both come from `crypto`.
    pub async fn register(
        registration: Registration,
        crypto: &dyn CryptoService,
    ) -> Result<Self, DomainError> {
        let id = UserId::from_uuid(crypto.generate_uuid().await?);
        let hashed_password = crypto.hash_password(&registration.password).await?;
        let now = Timestamp::now();

        Ok(Self {
            id,
            person: Person {
                first_name: registration.first_name,
                last_name: registration.last_name,
                email: registration.email,
                bio: registration.bio,
                avatar: registration.avatar,
            },
            user_name: registration.user_name,
            email_verified: false,
            hashed_password,
            enabled: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn email_verified(&self) -> bool {
        self.email_verified
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Disabled accounts never match.
    pub async fn verify_password(
        &self,
        password: &str,
        crypto: &dyn CryptoService,
    ) -> Result<bool, DomainError> {
        if !self.enabled {
            return Ok(false);
        }
        crypto.compare_password(password, &self.hashed_password).await
    }

    pub fn verify_email(&mut self) {
        self.email_verified = true;
        self.updated_at = Timestamp::now();
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Timestamp::now();
    }
}
