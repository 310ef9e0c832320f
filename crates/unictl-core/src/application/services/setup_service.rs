//! Remote unit installation (`setup`).
//!
//! Installs the rendered unit file at the resolved remote path and reloads
//! the systemd manager. Idempotent: re-running overwrites the installed
//! file. Does not start or enable the unit.

use std::path::Path;

use tracing::{info, instrument};

use crate::application::elevation::with_elevation;
use crate::application::ports::{CommandRunner, Filesystem, TemplateRenderer};
use crate::application::unit_template;
use crate::domain::{
    InstallMode, RenderContext, RunReport, Script, ServiceConfig, ShellCommand, StepFailure,
    SystemdCtl,
};
use crate::error::DeployResult;

/// Orchestrates the `setup` task.
pub struct SetupService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    builtin_template: String,
}

impl SetupService {
    pub fn new(
        runner: Box<dyn CommandRunner>,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        builtin_template: impl Into<String>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            renderer,
            builtin_template: builtin_template.into(),
        }
    }

    /// Install the unit on the remote host.
    ///
    /// The rendered content, target path, and linger user are all captured
    /// *before* elevation — later lookups would observe the setup identity
    /// instead of the deploy identity.
    #[instrument(skip_all, fields(service = %config.service_name(), mode = %config.install_mode()))]
    pub fn run(
        &self,
        config: &ServiceConfig,
        setup_user: &str,
        project_root: &Path,
    ) -> DeployResult<RunReport> {
        let source = unit_template::resolve(self.filesystem.as_ref(), project_root);
        let template =
            unit_template::load(self.filesystem.as_ref(), &source, &self.builtin_template)?;
        let rendered = self
            .renderer
            .render(&template, &RenderContext::for_config(config))?;

        info!(source = %source.describe(), "rendered unit template");

        let script = build_setup_script(config, &rendered);
        let report =
            with_elevation(self.runner.as_ref(), setup_user, || {
                self.runner.run_remote(&script)
            })?;

        info!(path = %config.unit_path(), "unit installed and manager reloaded");
        Ok(report)
    }
}

/// Assemble the remote step queue for `setup`.
///
/// Ordering is a contract: the systemd probe runs before any mutation, and
/// the daemon-reload runs last so the manager sees the written file.
pub fn build_setup_script(config: &ServiceConfig, rendered_unit: &str) -> Script {
    let ctl = SystemdCtl::new(config.install_mode(), config.service_name());
    let target = config.unit_path();
    let mut script = Script::new();

    script.comment("Check for systemd on remote host");
    script.run_or(
        &ShellCommand::new("test").arg("-d").arg("/run/systemd/system"),
        StepFailure::Platform {
            message: "systemd not found, but unictl needs it".into(),
        },
    );

    if config.install_mode() == InstallMode::User {
        script.comment("Ensure PAM systemd integration is installed");
        script.run(
            &ShellCommand::new("env")
                .arg("DEBIAN_FRONTEND=noninteractive")
                .args(["apt-get", "install", "-yqq", "libpam-systemd"]),
        );

        script.comment(format!("Enable linger for user {}", config.user()));
        script.run_or(
            &ShellCommand::new("loginctl").arg("enable-linger").arg(config.user()),
            StepFailure::Permission {
                message: format!("could not enable linger for user {}", config.user()),
                hint: "user-mode services stop at logout without lingering; \
                       loginctl enable-linger needs a working logind session"
                    .into(),
            },
        );
    }

    script.comment(format!("Installing unit file to {target}"));
    script.run(
        &ShellCommand::new("mkdir")
            .arg("-p")
            .raw_arg(format!("\"$(dirname \"{target}\")\"")),
    );
    script.upload(target, rendered_unit);

    script.comment("Reloading systemd configuration");
    script.run_or(
        &ctl.daemon_reload(),
        StepFailure::Permission {
            message: "systemd daemon-reload failed".into(),
            hint: "in user mode this usually means UsePAM is disabled in \
                   /etc/ssh/sshd_config; the user manager needs PAM to start"
                .into(),
        },
    );

    script
}
