use dossier_core::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] dossier_core::ValidationError),

    #[error("command error: {0}")]
    Command(String),

    #[error("snapshot rejected: {message}")]
    Rejected { code: String, message: String },

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::Missing(_)) => 3,
            Self::Rejected { code, .. } if code == "missing_data" => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Core(_)
            | Self::Command(_)
            | Self::Rejected { .. }
            | Self::Serialization(_)
            | Self::Io(_) => 10,
        }
    }
}
