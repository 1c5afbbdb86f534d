//! Crypto adapters.

mod argon2_service;

pub use argon2_service::{Argon2CryptoService, DEFAULT_TOKEN_BYTES};
