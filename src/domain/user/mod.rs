//! User accounts.
//!
//! Sign-up payloads are checked by [`validate_registration`] before
//! [`User::register`] hashes the password.

mod account;
mod person;
mod registration;

pub use account::User;
pub use person::Person;
pub use registration::{validate_registration, Registration, MIN_PASSWORD_LENGTH};
