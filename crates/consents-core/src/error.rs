//! Error types for the consents system.

use thiserror::Error;

/// A single field-level validation failure, produced by the upstream
/// validation layer and surfaced unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("Consent not found with id: {id}")]
    NotFound { id: String },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Validation failed on {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldViolation> },

    #[error("Store error: {0}")]
    Store(String),

    #[error("External info provider error: {0}")]
    Provider(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ConsentResult<T> = Result<T, ConsentError>;
