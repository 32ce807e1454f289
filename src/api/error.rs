// ==========================================
// SRV Planner - API error types
// ==========================================
// Responsibility: user-facing error messages; converts repository
// errors into business errors. Every message carries its explicit
// reason.
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer errors
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Validation errors
    // ==========================================
    /// Pre-save gate: objective weights must total 100.0 (+/- 0.01).
    /// The message reports the actual total to one decimal place.
    #[error("weight sum invalid: objective weights total {total_weight:.1}%, expected 100.0%")]
    WeightSumInvalid { total_weight: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("data validation failed: {0}")]
    ValidationError(String),

    // ==========================================
    // Business errors
    // ==========================================
    #[error("resource not found: {0}")]
    NotFound(String),

    // ==========================================
    // Data access errors
    // ==========================================
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    // ==========================================
    // Generic errors
    // ==========================================
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// From RepositoryError
// Purpose: map technical repository errors to user-facing ones
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} with id={}", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::DatabaseTransactionError(msg) => {
                ApiError::DatabaseTransactionError(msg)
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::FieldValueError { field, message } => {
                ApiError::ValidationError(format!("{}: {}", field, message))
            }
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
