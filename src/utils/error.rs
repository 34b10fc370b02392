use thiserror::Error;

use crate::domain::model::DiffReport;

#[derive(Error, Debug)]
pub enum SnapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Snapshot mismatch for {name}")]
    SnapshotMismatch {
        name: String,
        path: String,
        diff: DiffReport,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, SnapError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Snapshot,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SnapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SnapError::IoError(_) => ErrorCategory::Io,
            SnapError::SerializationError(_) | SnapError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
            SnapError::ConfigValidationError { .. }
            | SnapError::MissingConfigError { .. }
            | SnapError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SnapError::SnapshotMismatch { .. } => ErrorCategory::Snapshot,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SnapError::IoError(_) => ErrorSeverity::High,
            SnapError::SerializationError(_) => ErrorSeverity::High,
            SnapError::ProcessingError { .. } => ErrorSeverity::Medium,
            SnapError::ConfigValidationError { .. }
            | SnapError::MissingConfigError { .. }
            | SnapError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
            SnapError::SnapshotMismatch { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SnapError::IoError(_) => {
                "Check that the snapshot directory exists and is writable".to_string()
            }
            SnapError::SerializationError(_) => {
                "Check that the value serializes to valid JSON".to_string()
            }
            SnapError::ConfigValidationError { field, .. }
            | SnapError::MissingConfigError { field }
            | SnapError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting and re-run", field)
            }
            SnapError::SnapshotMismatch { .. } => {
                "To update this snapshot, re-run with --update".to_string()
            }
            SnapError::ProcessingError { .. } => {
                "Inspect the snapshot file; deleting it regenerates it on the next run".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SnapError::SnapshotMismatch { name, path, diff } => {
                format!(
                    "Snapshot mismatch for {}\nSnapshot file: {}\n\n{}",
                    name, path, diff
                )
            }
            other => other.to_string(),
        }
    }
}
