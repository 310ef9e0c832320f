//! ssh-backed command runner.
//!
//! Executes script steps by spawning the `ssh` binary once per step, as the
//! current acting user. No shell runs locally: every step travels as one
//! argument, and upload content is piped through stdin so it never touches
//! a command line.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use unictl_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::shell::expandable_path,
    domain::{DomainError, RunReport, Script, Step, StepOutput},
    error::DeployResult,
};

/// Production runner shelling out to `ssh`.
pub struct SshRunner {
    host: String,
    acting_user: Arc<RwLock<String>>,
}

impl SshRunner {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            acting_user: Arc::new(RwLock::new(user.into())),
        }
    }

    /// `user@host` destination for the current acting user.
    fn destination(&self) -> DeployResult<String> {
        Ok(format!("{}@{}", self.acting_user()?, self.host))
    }

    /// Argument vector for executing one remote line.
    ///
    /// `BatchMode=yes` keeps ssh from prompting — a deployment task must
    /// fail fast rather than hang on a password prompt.
    fn remote_invocation(&self, line: &str) -> DeployResult<Vec<String>> {
        Ok(vec![
            "-o".into(),
            "BatchMode=yes".into(),
            self.destination()?,
            "--".into(),
            line.to_string(),
        ])
    }

    fn run_step(&self, line: &str, stdin: Option<&str>) -> DeployResult<StepOutput> {
        let args = self.remote_invocation(line)?;
        debug!(line, "executing remote step");

        let mut command = Command::new("ssh");
        command
            .args(&args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|e| ApplicationError::TransportFailed {
            reason: format!("failed to spawn ssh: {e}"),
        })?;

        if let Some(content) = stdin {
            let mut handle = child.stdin.take().ok_or_else(|| {
                ApplicationError::TransportFailed { reason: "ssh stdin unavailable".into() }
            })?;
            handle
                .write_all(content.as_bytes())
                .map_err(|e| ApplicationError::TransportFailed {
                    reason: format!("failed to stream upload content: {e}"),
                })?;
            // Dropping the handle closes stdin so the remote cat terminates.
        }

        let output = child.wait_with_output().map_err(|e| ApplicationError::TransportFailed {
            reason: format!("failed to collect ssh output: {e}"),
        })?;

        Ok(StepOutput {
            heading: line.to_string(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        })
    }
}

impl CommandRunner for SshRunner {
    fn acting_user(&self) -> DeployResult<String> {
        Ok(self
            .acting_user
            .read()
            .map_err(|_| ApplicationError::StateLockError)?
            .clone())
    }

    fn set_acting_user(&self, user: &str) -> DeployResult<()> {
        *self
            .acting_user
            .write()
            .map_err(|_| ApplicationError::StateLockError)? = user.to_string();
        Ok(())
    }

    fn run_remote(&self, script: &Script) -> DeployResult<RunReport> {
        let mut report = RunReport::default();

        for step in script.steps() {
            match step {
                Step::Comment(text) => {
                    info!(%text, "remote script");
                    report.steps.push(StepOutput {
                        heading: text.clone(),
                        exit_code: None,
                        ..Default::default()
                    });
                }
                Step::Run { line, failure } => {
                    let output = self.run_step(line, None)?;
                    let ok = output.exit_code == Some(0);
                    let stderr = output.stderr.clone();
                    report.steps.push(output);

                    if !ok {
                        warn!(line, %stderr, "remote step failed, aborting queue");
                        return Err(match failure.clone() {
                            Some(tag) => tag.into_error(&stderr).into(),
                            None => DomainError::CommandFailed {
                                command: line.clone(),
                                detail: stderr.trim().to_string(),
                            }
                            .into(),
                        });
                    }
                }
                Step::Upload { path, content } => {
                    let line = format!("cat > {}", expandable_path(path));
                    let output = self.run_step(&line, Some(content))?;
                    let ok = output.exit_code == Some(0);
                    let stderr = output.stderr.clone();
                    report.steps.push(output);

                    if !ok {
                        warn!(path, %stderr, "upload failed, aborting queue");
                        return Err(DomainError::CommandFailed {
                            command: line,
                            detail: stderr.trim().to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(report)
    }
}
