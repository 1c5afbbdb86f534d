//! Error types shared by the domain, ports and application layers.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
///
/// The `Display` form is the machine-readable name collaborating HTTP layers
/// put in their response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidData,

    // Not found errors
    NotFound,
    LearningResourceNotFound,

    // Authorization errors
    Unauthorized,

    // Infrastructure errors
    Unexpected,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// HTTP-style status associated with the code.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorCode::ValidationFailed | ErrorCode::InvalidData => 400,
            ErrorCode::Unauthorized => 401,
            ErrorCode::NotFound | ErrorCode::LearningResourceNotFound => 404,
            ErrorCode::Unexpected | ErrorCode::DatabaseError | ErrorCode::InternalError => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_ERROR",
            ErrorCode::InvalidData => "INVALID_DATA_ERROR",
            ErrorCode::NotFound => "NOT_FOUND_ERROR",
            ErrorCode::LearningResourceNotFound => "LEARNING_RESOURCE_NOT_FOUND_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED_ERROR",
            ErrorCode::Unexpected => "UNEXPECTED_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: BTreeMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: BTreeMap::new(),
        }
    }

    /// Creates a not-found error naming the missing resource kind and id.
    pub fn not_found(resource: impl Into<String>, id: impl fmt::Display) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
            .with_detail("resource", resource)
            .with_detail("id", id.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// HTTP-style status for this error.
    pub fn status_code(&self) -> u16 {
        self.code.status_code()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
