//! Installation mode: per-user vs system-wide units.
//!
//! # Design
//!
//! The mode is parsed exactly once, at `ServiceConfig` construction, and the
//! enum variant carries everything that used to be re-derived at call sites:
//! the `--user` flag and the unit-directory rule. Code downstream matches on
//! nothing — it asks the mode.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::DomainError;

/// Where the unit is installed and which systemd manager owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    /// Unit under the acting user's home config tree, managed by
    /// `systemctl --user`. Requires lingering to survive logout.
    User,
    /// Root-owned unit under `/etc/systemd/system`, managed by the system
    /// manager. Mutating verbs need elevation.
    System,
}

impl InstallMode {
    /// Parse the `system_or_user` setting.
    ///
    /// # Errors
    ///
    /// Any value other than the two literals — including an empty string —
    /// is [`DomainError::InvalidInstallMode`]. There is deliberately no
    /// default: the mode gates privilege and path decisions.
    pub fn from_setting(value: &str) -> Result<Self, DomainError> {
        match value {
            "user" => Ok(Self::User),
            "system" => Ok(Self::System),
            other => Err(DomainError::InvalidInstallMode { value: other.to_string() }),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }

    /// The scope flag every systemd invocation in this mode carries.
    pub const fn scope_flag(&self) -> Option<&'static str> {
        match self {
            Self::User => Some("--user"),
            Self::System => None,
        }
    }

    /// Remote directory the unit file lives in.
    ///
    /// The `User` path contains a literal `$HOME` — it is expanded by the
    /// remote shell, not locally, so the invoking machine's home never
    /// leaks into remote paths.
    pub fn unit_dir(&self) -> &'static str {
        match self {
            Self::User => "$HOME/.config/systemd/user",
            Self::System => "/etc/systemd/system",
        }
    }

    /// Full remote path of the unit file for `service_name`.
    pub fn unit_path(&self, service_name: &str) -> String {
        format!("{}/{}", self.unit_dir(), service_name)
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_literal_parses() {
        assert_eq!(InstallMode::from_setting("user"), Ok(InstallMode::User));
    }

    #[test]
    fn system_literal_parses() {
        assert_eq!(InstallMode::from_setting("system"), Ok(InstallMode::System));
    }

    #[test]
    fn anything_else_is_an_error() {
        for bad in ["", "User", "SYSTEM", "both", "root", " user"] {
            assert_eq!(
                InstallMode::from_setting(bad),
                Err(DomainError::InvalidInstallMode { value: bad.to_string() }),
                "value {bad:?} must not parse"
            );
        }
    }

    #[test]
    fn user_mode_carries_the_scope_flag() {
        assert_eq!(InstallMode::User.scope_flag(), Some("--user"));
        assert_eq!(InstallMode::System.scope_flag(), None);
    }

    #[test]
    fn unit_path_interpolates_service_name() {
        assert_eq!(
            InstallMode::User.unit_path("unicorn-blog.service"),
            "$HOME/.config/systemd/user/unicorn-blog.service"
        );
        assert_eq!(
            InstallMode::System.unit_path("unicorn-blog.service"),
            "/etc/systemd/system/unicorn-blog.service"
        );
    }
}
