//! Application layer errors.
//!
//! These represent orchestration failures — transport, filesystem,
//! rendering. Business-rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during task orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The transport could not execute a script at all (connection refused,
    /// ssh binary missing). Distinct from a remote command exiting non-zero.
    #[error("transport failed: {reason}")]
    TransportFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Shared state access failed (lock poisoned).
    #[error("runner state error")]
    StateLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TransportFailed { reason } => vec![
                format!("Transport failure: {}", reason),
                "Check that the host is reachable and ssh works non-interactively".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Check the template for malformed placeholders".into(),
            ],
            Self::StateLockError => vec![
                "The command runner state is poisoned".into(),
                "Re-run the task".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TransportFailed { .. }
            | Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::StateLockError => ErrorCategory::Internal,
        }
    }
}
