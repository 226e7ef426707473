use thiserror::Error;

/// A required field of the snapshot was absent.
///
/// `field` is the dotted path from the snapshot root, e.g. `technicals.sma_50`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing required field '{field}'")]
pub struct MissingDataError {
    pub field: &'static str,
}

impl MissingDataError {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Validation and contract errors exposed by `dossier-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be a calendar date YYYY-MM-DD: '{value}'")]
    InvalidCalendarDate { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Missing(#[from] MissingDataError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("snapshot document error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("could not read snapshot: {0}")]
    Io(#[from] std::io::Error),
}
