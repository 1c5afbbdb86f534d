//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories for tests and single-process use
//! - `crypto` - Argon2 password hashing and random tokens

pub mod crypto;
pub mod memory;
