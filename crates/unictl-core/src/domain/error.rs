//! Domain error types.
//!
//! All errors are:
//! - Cloneable (for reporting at multiple layers)
//! - Categorizable (for CLI display and exit codes)
//! - Actionable (provide suggestions)

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The install-mode setting holds a value other than `user` or `system`.
    ///
    /// This gates privilege and path decisions downstream, so it must fail
    /// hard rather than fall back to a default.
    #[error("invalid system_or_user setting '{value}': must be 'user' or 'system'")]
    InvalidInstallMode { value: String },

    /// A required setting is absent or empty.
    #[error("missing required setting '{key}'")]
    MissingSetting { key: &'static str },

    /// The remote host is not running systemd.
    #[error("remote host has no systemd: {detail}")]
    SystemdUnavailable { detail: String },

    /// A privileged remote step was refused (linger, daemon-reload).
    #[error("permission denied: {message}")]
    PermissionDenied { message: String, hint: String },

    /// The local template target already exists.
    #[error("unit template already exists at {path}")]
    TemplateExists { path: PathBuf },

    /// A remote command exited non-zero and carried no specific mapping.
    #[error("remote command failed: {command}")]
    CommandFailed { command: String, detail: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInstallMode { value } => vec![
                format!("'{}' is not a recognised install mode", value),
                "Set system_or_user = \"user\" for a per-user unit".into(),
                "Set system_or_user = \"system\" for a system-wide unit".into(),
            ],
            Self::MissingSetting { key } => vec![
                format!("Add '{}' to config/deploy.toml", key),
                format!("Or export UNICTL_{}", key.to_uppercase()),
            ],
            Self::SystemdUnavailable { .. } => vec![
                "unictl manages systemd units and needs systemd as init".into(),
                "Check the remote host: test -d /run/systemd/system".into(),
            ],
            Self::PermissionDenied { hint, .. } => vec![hint.clone()],
            Self::TemplateExists { path } => vec![
                format!("Remove it to regenerate: rm {}", path.display()),
                "The existing file may carry local customizations".into(),
            ],
            Self::CommandFailed { detail, .. } => {
                if detail.is_empty() {
                    vec!["Re-run with -v for the full remote output".into()]
                } else {
                    vec![format!("Remote output: {}", detail)]
                }
            }
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInstallMode { .. } | Self::MissingSetting { .. } => {
                ErrorCategory::Configuration
            }
            Self::TemplateExists { .. } => ErrorCategory::Validation,
            Self::SystemdUnavailable { .. }
            | Self::PermissionDenied { .. }
            | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
    Internal,
}
