//! Deployment settings as plain data.
//!
//! The original tool read these lazily from an ambient key/value store.
//! Here they are materialised exactly once per invocation — the CLI layer
//! loads them (file + environment) and hands the finished value down; core
//! code never reaches into globals.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Raw settings consumed by every task.
///
/// `system_or_user` is kept as the raw string on purpose: validation into
/// [`crate::domain::InstallMode`] happens in `ServiceConfig::resolve`, and
/// must fail loudly there rather than be silently defaulted at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeploySettings {
    /// Application name; the unit name is derived from it.
    pub application_name: String,
    /// `"user"` or `"system"`. Anything else is a configuration error.
    pub system_or_user: String,
    /// Remote host the transport connects to.
    pub host: String,
    /// Acting ssh identity.
    pub user: String,
    /// Optional elevated identity for privileged steps.
    #[serde(default)]
    pub setup_user: Option<String>,
    /// Base directory for shared runtime artifacts (socket lives here).
    pub shared_path: String,
    /// Application checkout path interpolated into the unit template.
    /// Defaults to the sibling `current` of `shared_path`.
    #[serde(default)]
    pub current_path: Option<String>,
}

impl DeploySettings {
    /// Validate presence of the settings every task depends on.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.application_name.is_empty() {
            return Err(DomainError::MissingSetting { key: "application_name" });
        }
        if self.host.is_empty() {
            return Err(DomainError::MissingSetting { key: "host" });
        }
        if self.user.is_empty() {
            return Err(DomainError::MissingSetting { key: "user" });
        }
        if self.shared_path.is_empty() {
            return Err(DomainError::MissingSetting { key: "shared_path" });
        }
        Ok(())
    }

    /// The identity privileged steps run as: `setup_user` when set and
    /// non-empty, else the plain acting user.
    pub fn effective_setup_user(&self) -> &str {
        match self.setup_user.as_deref() {
            Some(u) if !u.is_empty() => u,
            _ => &self.user,
        }
    }

    /// Checkout path for the unit template, derived when not set explicitly.
    pub fn effective_current_path(&self) -> String {
        match self.current_path.as_deref() {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => match self.shared_path.rsplit_once('/') {
                Some((base, _)) if !base.is_empty() => format!("{base}/current"),
                _ => format!("{}/current", self.shared_path),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> DeploySettings {
        DeploySettings {
            application_name: "blog".into(),
            system_or_user: "user".into(),
            host: "app.example.com".into(),
            user: "deploy".into(),
            setup_user: None,
            shared_path: "/var/www/blog/shared".into(),
            current_path: None,
        }
    }

    #[test]
    fn valid_settings_pass() {
        assert!(settings().validate().is_ok());
    }

    #[test]
    fn empty_application_name_is_missing() {
        let mut s = settings();
        s.application_name.clear();
        assert_eq!(
            s.validate(),
            Err(DomainError::MissingSetting { key: "application_name" })
        );
    }

    #[test]
    fn empty_host_is_missing() {
        let mut s = settings();
        s.host.clear();
        assert!(matches!(
            s.validate(),
            Err(DomainError::MissingSetting { key: "host" })
        ));
    }

    #[test]
    fn setup_user_falls_back_to_user() {
        assert_eq!(settings().effective_setup_user(), "deploy");

        let mut s = settings();
        s.setup_user = Some(String::new());
        assert_eq!(s.effective_setup_user(), "deploy");

        s.setup_user = Some("root".into());
        assert_eq!(s.effective_setup_user(), "root");
    }

    #[test]
    fn current_path_derived_from_shared() {
        assert_eq!(settings().effective_current_path(), "/var/www/blog/current");
    }

    #[test]
    fn explicit_current_path_wins() {
        let mut s = settings();
        s.current_path = Some("/srv/blog/live".into());
        assert_eq!(s.effective_current_path(), "/srv/blog/live");
    }
}
