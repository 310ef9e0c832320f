//! Lifecycle verb execution (`status`, `start`, `stop`, `restart`,
//! `enable`, `disable`).
//!
//! Each verb maps to one systemctl invocation against the resolved unit.
//! Mutating verbs render as the action/confirm/journal chain so the
//! operator always sees either a confirmed status or the unit's log output.
//! `status` issues the raw query directly and never elevates.

use tracing::{info, instrument};

use crate::application::elevation::with_elevation;
use crate::application::ports::CommandRunner;
use crate::domain::{LifecycleVerb, RunReport, Script, ServiceConfig, SystemdCtl};
use crate::error::DeployResult;

/// Orchestrates lifecycle verbs.
pub struct LifecycleService {
    runner: Box<dyn CommandRunner>,
}

impl LifecycleService {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Execute one verb against the configured unit.
    #[instrument(skip_all, fields(verb = %verb, service = %config.service_name()))]
    pub fn run(
        &self,
        config: &ServiceConfig,
        setup_user: &str,
        verb: LifecycleVerb,
    ) -> DeployResult<RunReport> {
        let script = build_verb_script(config, verb);

        let report = if verb.requires_elevation(config.install_mode()) {
            with_elevation(self.runner.as_ref(), setup_user, || {
                self.runner.run_remote(&script)
            })?
        } else {
            self.runner.run_remote(&script)?
        };

        info!("{} completed", verb);
        Ok(report)
    }
}

/// Build the remote script for one verb.
///
/// `status` is the raw query; everything else is the compound chain whose
/// exit status reflects the last command run (a successful journal dump
/// after a failed action reports success — documented behavior).
pub fn build_verb_script(config: &ServiceConfig, verb: LifecycleVerb) -> Script {
    let ctl = SystemdCtl::new(config.install_mode(), config.service_name());
    let mut script = Script::new();

    if verb == LifecycleVerb::Status {
        script.run(&ctl.verb(LifecycleVerb::Status));
    } else {
        let chain = ctl.verb_command(verb).render();
        script.comment(chain.clone());
        script.run_line(chain);
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{DeploySettings, InstallMode, Step};
    use crate::error::DeployError;
    use std::sync::RwLock;

    fn config(mode: &str) -> ServiceConfig {
        ServiceConfig::resolve(&DeploySettings {
            application_name: "blog".into(),
            system_or_user: mode.into(),
            host: "app.example.com".into(),
            user: "deploy".into(),
            setup_user: Some("root".into()),
            shared_path: "/var/www/blog/shared".into(),
            current_path: None,
        })
        .unwrap()
    }

    /// Runner that records which user executed each script.
    struct TracingRunner {
        user: RwLock<String>,
        executions: RwLock<Vec<(String, Script)>>,
    }

    impl TracingRunner {
        fn new(user: &str) -> Self {
            Self {
                user: RwLock::new(user.to_string()),
                executions: RwLock::new(Vec::new()),
            }
        }

        fn executions(&self) -> Vec<(String, Script)> {
            self.executions.read().unwrap().clone()
        }
    }

    impl CommandRunner for TracingRunner {
        fn acting_user(&self) -> DeployResult<String> {
            Ok(self.user.read().map_err(|_| ApplicationError::StateLockError)?.clone())
        }

        fn set_acting_user(&self, user: &str) -> DeployResult<()> {
            *self.user.write().map_err(|_| ApplicationError::StateLockError)? =
                user.to_string();
            Ok(())
        }

        fn run_remote(&self, script: &Script) -> DeployResult<RunReport> {
            let user = self.acting_user()?;
            self.executions.write().unwrap().push((user, script.clone()));
            Ok(RunReport::default())
        }
    }

    #[test]
    fn status_is_a_single_raw_query() {
        let script = build_verb_script(&config("user"), LifecycleVerb::Status);
        assert_eq!(
            script.command_lines(),
            vec!["systemctl --user status unicorn-blog.service"]
        );
        // No comment, no fallback chain.
        assert_eq!(script.steps().len(), 1);
    }

    #[test]
    fn start_system_mode_has_fallback_and_no_user_flag() {
        let script = build_verb_script(&config("system"), LifecycleVerb::Start);
        let line = script.command_lines()[0];

        assert!(!line.contains("--user"));
        assert!(line.contains("systemctl start unicorn-blog.service"));
        assert!(line.contains("journalctl"));
        assert!(line.contains("InvocationID"));
        assert!(line.contains("unicorn-blog.service"));
    }

    #[test]
    fn verb_chain_is_echoed_as_comment() {
        let script = build_verb_script(&config("user"), LifecycleVerb::Restart);
        match &script.steps()[0] {
            Step::Comment(text) => assert!(text.contains("systemctl --user restart")),
            other => panic!("expected comment, got {other:?}"),
        }
    }

    // ── elevation decisions ───────────────────────────────────────────────

    /// Box-able wrapper sharing an Arc'd runner with the test body.
    struct Shared<R: CommandRunner>(std::sync::Arc<R>);

    impl<R: CommandRunner> CommandRunner for Shared<R> {
        fn acting_user(&self) -> DeployResult<String> {
            self.0.acting_user()
        }
        fn set_acting_user(&self, user: &str) -> DeployResult<()> {
            self.0.set_acting_user(user)
        }
        fn run_remote(&self, script: &Script) -> DeployResult<RunReport> {
            self.0.run_remote(script)
        }
    }

    #[test]
    fn user_mode_verbs_never_elevate() {
        let runner = std::sync::Arc::new(TracingRunner::new("deploy"));
        let service = LifecycleService::new(Box::new(Shared(runner.clone())));

        service.run(&config("user"), "root", LifecycleVerb::Enable).unwrap();

        let execs = runner.executions();
        assert_eq!(execs.len(), 1);
        assert_eq!(execs[0].0, "deploy");
    }

    #[test]
    fn system_mode_verbs_elevate_and_restore() {
        let runner = std::sync::Arc::new(TracingRunner::new("deploy"));
        let service = LifecycleService::new(Box::new(Shared(runner.clone())));

        service.run(&config("system"), "root", LifecycleVerb::Start).unwrap();

        let execs = runner.executions();
        assert_eq!(execs[0].0, "root", "script must run as the setup user");
        assert_eq!(runner.acting_user().unwrap(), "deploy", "identity restored");
    }

    #[test]
    fn status_never_elevates_even_in_system_mode() {
        let runner = std::sync::Arc::new(TracingRunner::new("deploy"));
        let service = LifecycleService::new(Box::new(Shared(runner.clone())));

        service.run(&config("system"), "root", LifecycleVerb::Status).unwrap();

        assert_eq!(runner.executions()[0].0, "deploy");
    }

    #[test]
    fn elevation_uses_the_mode_from_config_not_the_verb_name() {
        assert!(LifecycleVerb::Stop.requires_elevation(InstallMode::System));
        assert!(!LifecycleVerb::Stop.requires_elevation(InstallMode::User));
    }

    #[test]
    fn failed_run_still_restores_identity() {
        struct FailingRunner(TracingRunner);

        impl CommandRunner for FailingRunner {
            fn acting_user(&self) -> DeployResult<String> {
                self.0.acting_user()
            }
            fn set_acting_user(&self, user: &str) -> DeployResult<()> {
                self.0.set_acting_user(user)
            }
            fn run_remote(&self, _script: &Script) -> DeployResult<RunReport> {
                Err(ApplicationError::TransportFailed { reason: "down".into() }.into())
            }
        }

        let runner = std::sync::Arc::new(FailingRunner(TracingRunner::new("deploy")));
        let service = LifecycleService::new(Box::new(Shared(runner.clone())));

        let result = service.run(&config("system"), "root", LifecycleVerb::Restart);
        assert!(matches!(result, Err(DeployError::Application(_))));
        assert_eq!(runner.acting_user().unwrap(), "deploy");
    }

}
