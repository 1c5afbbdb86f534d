//! Argon2id-backed crypto service.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CryptoService;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use uuid::Uuid;

pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Hashes with Argon2id (default parameters) on the blocking pool.
#[derive(Debug, Clone)]
pub struct Argon2CryptoService {
    token_bytes: usize,
}

impl Argon2CryptoService {
    pub fn new(token_bytes: usize) -> Self {
        Self { token_bytes }
    }

    pub fn token_bytes(&self) -> usize {
        self.token_bytes
    }
}

impl Default for Argon2CryptoService {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

fn hash_blocking(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::new(ErrorCode::InternalError, format!("Password hashing failed: {}", e)))
}

fn verify_blocking(password: &str, hashed: &str) -> bool {
    match PasswordHash::new(hashed) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

fn join_error(e: tokio::task::JoinError) -> DomainError {
    DomainError::new(ErrorCode::InternalError, format!("Crypto task failed: {}", e))
}

#[async_trait]
impl CryptoService for Argon2CryptoService {
    async fn hash_password(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(&password))
            .await
            .map_err(join_error)?
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<bool, DomainError> {
        let password = password.to_owned();
        let hashed = hashed.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &hashed))
            .await
            .map_err(join_error)
    }

    async fn generate_uuid(&self) -> Result<Uuid, DomainError> {
        Ok(Uuid::new_v4())
    }

    async fn generate_random_token(&self) -> Result<String, DomainError> {
        let mut bytes = vec![0u8; self.token_bytes];
        OsRng.fill_bytes(&mut bytes);
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hashed_password_verifies() {
        let crypto = Argon2CryptoService::default();
        let hash = crypto.hash_password("s3cret-pass").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(crypto.compare_password("s3cret-pass", &hash).await.unwrap());
        assert!(!crypto.compare_password("other", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_differently() {
        let crypto = Argon2CryptoService::default();
        let a = crypto.hash_password("pw").await.unwrap();
        let b = crypto.hash_password("pw").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_hash_does_not_match() {
        let crypto = Argon2CryptoService::default();
        assert!(!crypto.compare_password("pw", "not-a-hash").await.unwrap());
    }

    #[tokio::test]
    async fn tokens_have_configured_length_and_are_url_safe() {
        let crypto = Argon2CryptoService::new(48);
        let token = crypto.generate_random_token().await.unwrap();

        // 48 bytes encode to exactly 64 characters without padding
        assert_eq!(token.len(), 64);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_ne!(token, crypto.generate_random_token().await.unwrap());
    }

    #[tokio::test]
    async fn generated_uuids_are_v4() {
        let id = Argon2CryptoService::default().generate_uuid().await.unwrap();
        assert_eq!(id.get_version_num(), 4);
    }
}
