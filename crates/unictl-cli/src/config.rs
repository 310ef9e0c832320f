//! Deployment settings loading.
//!
//! Settings are resolved once per invocation and handed to the core as a
//! plain [`DeploySettings`] value. The CLI layer owns loading; the core
//! never sees files or environment variables.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `UNICTL_*` environment variables
//! 2. The file passed via `--config` (must exist when given)
//! 3. `config/deploy.toml` in the working directory
//! 4. The per-user settings file (e.g. `~/.config/unictl/settings.toml`)
//!
//! Missing values stay empty here — presence is validated in the core,
//! where an absent install mode is a hard configuration error rather than
//! a silent default.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use unictl_core::domain::DeploySettings;

/// Project-local settings file consulted when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "config/deploy.toml";

/// Settings as they appear on disk / in the environment — everything
/// optional, nothing validated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSettings {
    pub application_name: Option<String>,
    pub system_or_user: Option<String>,
    pub host: Option<String>,
    pub user: Option<String>,
    pub setup_user: Option<String>,
    pub shared_path: Option<String>,
    pub current_path: Option<String>,
}

impl RawSettings {
    /// Load settings from files and environment.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder
                    .add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                if let Some(global) = user_settings_path() {
                    builder =
                        builder.add_source(config::File::from(global).required(false));
                }
                builder = builder.add_source(
                    config::File::from(PathBuf::from(DEFAULT_SETTINGS_FILE)).required(false),
                );
            }
        }

        builder = builder.add_source(config::Environment::with_prefix("UNICTL"));

        let raw = builder
            .build()
            .context("failed to read deployment settings")?
            .try_deserialize::<RawSettings>()
            .context("failed to parse deployment settings")?;

        Ok(raw)
    }

    /// Assemble the value handed to the core. The acting user falls back to
    /// the invoking OS user; everything else stays as loaded.
    pub fn into_deploy_settings(self) -> DeploySettings {
        DeploySettings {
            application_name: self.application_name.unwrap_or_default(),
            system_or_user: self.system_or_user.unwrap_or_default(),
            host: self.host.unwrap_or_default(),
            user: self
                .user
                .filter(|u| !u.is_empty())
                .or_else(|| std::env::var("USER").ok())
                .unwrap_or_default(),
            setup_user: self.setup_user.filter(|u| !u.is_empty()),
            shared_path: self.shared_path.unwrap_or_default(),
            current_path: self.current_path.filter(|p| !p.is_empty()),
        }
    }
}

/// Path to the per-user settings file.
///
/// Uses `directories::ProjectDirs` for cross-platform correctness.
pub fn user_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "unictl", "unictl")
        .map(|d| d.config_dir().join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_resolve_to_empty_strings() {
        let settings = RawSettings::default().into_deploy_settings();
        assert!(settings.application_name.is_empty());
        assert!(settings.system_or_user.is_empty());
        assert!(settings.setup_user.is_none());
    }

    #[test]
    fn acting_user_falls_back_to_os_user() {
        let settings = RawSettings::default().into_deploy_settings();
        let expected = std::env::var("USER").unwrap_or_default();
        assert_eq!(settings.user, expected);
    }

    #[test]
    fn explicit_user_wins_over_os_user() {
        let raw = RawSettings { user: Some("deploy".into()), ..Default::default() };
        assert_eq!(raw.into_deploy_settings().user, "deploy");
    }

    #[test]
    fn empty_setup_user_is_dropped() {
        let raw = RawSettings { setup_user: Some(String::new()), ..Default::default() };
        assert_eq!(raw.into_deploy_settings().setup_user, None);
    }

    #[test]
    fn file_values_are_parsed() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("deploy.toml");
        std::fs::write(
            &path,
            r#"
application_name = "blog"
system_or_user = "user"
host = "app.example.com"
user = "deploy"
shared_path = "/var/www/blog/shared"
"#,
        )
        .unwrap();

        let raw = RawSettings::load(Some(&path)).unwrap();
        let settings = raw.into_deploy_settings();
        assert_eq!(settings.application_name, "blog");
        assert_eq!(settings.system_or_user, "user");
        assert_eq!(settings.host, "app.example.com");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = RawSettings::load(Some(Path::new("/does/not/exist.toml"))).unwrap_err();
        assert!(err.to_string().contains("deployment settings"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("deploy.toml");
        std::fs::write(&path, "aplication_name = \"typo\"\n").unwrap();

        assert!(RawSettings::load(Some(&path)).is_err());
    }
}
