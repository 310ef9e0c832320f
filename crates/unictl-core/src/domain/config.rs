//! Resolved service identity.
//!
//! `ServiceConfig` is the immutable product of one settings resolution:
//! constructed once per CLI invocation, then passed by reference through the
//! call chain. Nothing mutates it afterwards, so the unit name and paths are
//! guaranteed stable across every operation in one run.

use crate::domain::error::DomainError;
use crate::domain::mode::InstallMode;
use crate::domain::settings::DeploySettings;

/// Identity and placement of the managed unit, resolved from settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    application_name: String,
    service_name: String,
    install_mode: InstallMode,
    unit_path: String,
    socket_path: String,
    current_path: String,
    user: String,
}

impl ServiceConfig {
    /// Resolve settings into a config. The only constructor.
    ///
    /// # Errors
    ///
    /// [`DomainError::MissingSetting`] for absent required settings and
    /// [`DomainError::InvalidInstallMode`] for an unrecognised mode value.
    pub fn resolve(settings: &DeploySettings) -> Result<Self, DomainError> {
        settings.validate()?;
        let install_mode = InstallMode::from_setting(&settings.system_or_user)?;

        let service_name = format!("unicorn-{}.service", settings.application_name);
        let unit_path = install_mode.unit_path(&service_name);
        let socket_path = format!("{}/unicorn.sock", settings.shared_path);

        Ok(Self {
            application_name: settings.application_name.clone(),
            service_name,
            install_mode,
            unit_path,
            socket_path,
            current_path: settings.effective_current_path(),
            user: settings.user.clone(),
        })
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// The systemd unit name, e.g. `unicorn-blog.service`.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn install_mode(&self) -> InstallMode {
        self.install_mode
    }

    /// Remote path of the installed unit file. May contain `$HOME` for the
    /// remote shell to expand.
    pub fn unit_path(&self) -> &str {
        &self.unit_path
    }

    /// Socket path handed to the reverse proxy template. Lifecycle logic
    /// never reads this.
    pub fn socket_path(&self) -> &str {
        &self.socket_path
    }

    /// Application checkout path interpolated into the unit template.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// The plain (non-elevated) acting user.
    pub fn user(&self) -> &str {
        &self.user
    }
}
