//! Crypto service port.
//!
//! Password hashing, identifier generation and opaque tokens. Hashing is
//! deliberately slow, so implementations should not be called while holding
//! locks.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CryptoService: Send + Sync {
    /// Hash a plaintext password into a self-describing encoded string.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the hasher fails
    async fn hash_password(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed hash compares as `false`.
    async fn compare_password(&self, password: &str, hashed: &str) -> Result<bool, DomainError>;

    /// New random (v4) UUID.
    async fn generate_uuid(&self) -> Result<Uuid, DomainError>;

    /// New URL-safe random token.
    async fn generate_random_token(&self) -> Result<String, DomainError>;
}
