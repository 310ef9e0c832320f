//! Read-only inspection (`print`, `print-remote`).
//!
//! `print` renders the resolved template locally for dry-run review before
//! a deployment. `print-remote` fetches the currently installed remote
//! file; it is a best-effort diagnostic and degrades to a placeholder
//! message instead of failing.

use std::path::Path;

use tracing::instrument;

use crate::application::ports::{CommandRunner, Filesystem, TemplateRenderer};
use crate::application::unit_template;
use crate::domain::shell::expandable_path;
use crate::domain::{RenderContext, RunReport, Script, ServiceConfig, ShellCommand, TemplateSource};
use crate::error::DeployResult;

/// Orchestrates the inspection tasks.
pub struct InspectService {
    runner: Box<dyn CommandRunner>,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    builtin_template: String,
}

impl InspectService {
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

    /// Render the resolved template locally.
    #[instrument(skip_all)]
    pub fn print(
        &self,
        config: &ServiceConfig,
        project_root: &Path,
    ) -> DeployResult<(TemplateSource, String)> {
        let source = unit_template::resolve(self.filesystem.as_ref(), project_root);
        let template =
            unit_template::load(self.filesystem.as_ref(), &source, &self.builtin_template)?;
        let rendered = self
            .renderer
            .render(&template, &RenderContext::for_config(config))?;
        Ok((source, rendered))
    }

    /// Fetch the installed unit file from the remote host.
    ///
    /// Never elevates and never fails on a missing file — the fallback
    /// message is part of the command chain.
    #[instrument(skip_all, fields(path = %config.unit_path()))]
    pub fn print_remote(&self, config: &ServiceConfig) -> DeployResult<RunReport> {
        let script = build_print_remote_script(config);
        self.runner.run_remote(&script)
    }
}

/// Build the best-effort remote read.
pub fn build_print_remote_script(config: &ServiceConfig) -> Script {
    let path = config.unit_path();
    let cat = ShellCommand::new("cat").raw_arg(expandable_path(path));
    let fallback =
        ShellCommand::new("echo").arg(format!("no unit file installed at {path}"));

    let mut script = Script::new();
    script.comment(format!("Printing content of {path} from remote host"));
    script.run_line(format!("{} || {}", cat.render(), fallback.render()));
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeploySettings, Step};

    fn config(mode: &str) -> ServiceConfig {
        ServiceConfig::resolve(&DeploySettings {
            application_name: "blog".into(),
            system_or_user: mode.into(),
            host: "app.example.com".into(),
            user: "deploy".into(),
            setup_user: None,
            shared_path: "/var/www/blog/shared".into(),
            current_path: None,
        })
        .unwrap()
    }

    #[test]
    fn remote_read_has_echo_fallback() {
        let script = build_print_remote_script(&config("system"));
        let line = script.command_lines()[0];

        assert!(line.starts_with("cat \"/etc/systemd/system/unicorn-blog.service\""));
        assert!(line.contains("|| echo"));
        assert!(line.contains("no unit file installed at"));
    }

    #[test]
    fn user_mode_path_left_for_remote_expansion() {
        let script = build_print_remote_script(&config("user"));
        let line = script.command_lines()[0];

        // $HOME must stay double-quoted raw, not single-quoted literal.
        assert!(line.contains("cat \"$HOME/.config/systemd/user/unicorn-blog.service\""));
    }

    #[test]
    fn comment_names_the_remote_path() {
        let script = build_print_remote_script(&config("system"));
        match &script.steps()[0] {
            Step::Comment(text) => {
                assert!(text.contains("/etc/systemd/system/unicorn-blog.service"));
            }
            other => panic!("expected comment, got {other:?}"),
        }
    }
}
