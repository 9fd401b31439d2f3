//! Error types for water-rights services.

use thiserror::Error;

/// Result type alias using WaterError.
pub type WaterResult<T> = Result<T, WaterError>;

/// Primary error type for water-rights operations.
#[derive(Debug, Error)]
pub enum WaterError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    #[error("Filter '{0}' is active but carries no usable value")]
    EmptyFilterValue(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // === Data Errors ===
    #[error("Water right not found: {0}")]
    WaterRightNotFound(String),

    #[error("No usage locations with withdrawal rates in the selected area")]
    NoWithdrawalRates,

    #[error("Failed to decode stored value: {0}")]
    DecodeFailure(String),

    #[error("Projection error: {0}")]
    ProjectionError(String),

    // === Infrastructure Errors ===
    #[error("Database error during {operation}: {message}")]
    DatabaseError { operation: String, message: String },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl WaterError {
    /// Wrap a store error with the name of the failed operation.
    pub fn database(operation: &str, err: impl std::fmt::Display) -> Self {
        WaterError::DatabaseError {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            WaterError::MissingParameter(_)
            | WaterError::InvalidParameter { .. }
            | WaterError::EmptyFilterValue(_)
            | WaterError::InvalidBody(_) => 400,

            WaterError::WaterRightNotFound(_) | WaterError::NoWithdrawalRates => 404,

            WaterError::DecodeFailure(_)
            | WaterError::ProjectionError(_)
            | WaterError::DatabaseError { .. }
            | WaterError::InternalError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for WaterError {
    fn from(err: serde_json::Error) -> Self {
        WaterError::InternalError(format!("JSON error: {}", err))
    }
}
