//! Security configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::crypto::{Argon2CryptoService, DEFAULT_TOKEN_BYTES};

pub const MIN_TOKEN_BYTES: usize = 16;
pub const MAX_TOKEN_BYTES: usize = 128;

/// Security configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Random bytes per generated token
    #[serde(default = "default_token_bytes")]
    pub token_bytes: usize,
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(MIN_TOKEN_BYTES..=MAX_TOKEN_BYTES).contains(&self.token_bytes) {
            return Err(ValidationError::InvalidTokenLength {
                min: MIN_TOKEN_BYTES,
                max: MAX_TOKEN_BYTES,
                actual: self.token_bytes,
            });
        }
        Ok(())
    }

    /// Builds the crypto adapter for these settings.
    pub fn crypto_service(&self) -> Argon2CryptoService {
        Argon2CryptoService::new(self.token_bytes)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            token_bytes: default_token_bytes(),
        }
    }
}

fn default_token_bytes() -> usize {
    DEFAULT_TOKEN_BYTES
}
