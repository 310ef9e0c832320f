//! Recording command runner for testing.
//!
//! Records every script together with the acting user that executed it,
//! and replays scripted outcomes. Clones share state, so a test can hold
//! one handle while the service under test owns another.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use unictl_core::{
    application::{ApplicationError, ports::CommandRunner},
    domain::{RunReport, Script, Step, StepOutput},
    error::{DeployError, DeployResult},
};

/// One recorded execution.
#[derive(Debug, Clone)]
pub struct Execution {
    /// Acting user at execution time.
    pub user: String,
    pub script: Script,
}

#[derive(Debug, Default)]
struct RecordingInner {
    user: String,
    executions: Vec<Execution>,
    user_history: Vec<String>,
    outcomes: VecDeque<Result<RunReport, DeployError>>,
}

/// Test double implementing [`CommandRunner`].
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<RecordingInner>>,
}

impl RecordingRunner {
    pub fn new(user: impl Into<String>) -> Self {
        let runner = Self::default();
        runner.inner.write().unwrap().user = user.into();
        runner
    }

    /// Queue a canned outcome for the next execution. With no queued
    /// outcome, executions succeed with a synthesized empty report.
    pub fn push_outcome(&self, outcome: Result<RunReport, DeployError>) {
        self.inner.write().unwrap().outcomes.push_back(outcome);
    }

    /// All executions so far, in order.
    pub fn executions(&self) -> Vec<Execution> {
        self.inner.read().unwrap().executions.clone()
    }

    /// Every value the acting-user slot has held, including the initial one.
    pub fn user_history(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap();
        let mut history = inner.user_history.clone();
        history.push(inner.user.clone());
        history
    }

    /// Synthesize a successful report mirroring the script's steps.
    fn synthesize(script: &Script) -> RunReport {
        RunReport {
            steps: script
                .steps()
                .iter()
                .map(|step| match step {
                    Step::Comment(text) => StepOutput {
                        heading: text.clone(),
                        exit_code: None,
                        ..Default::default()
                    },
                    Step::Run { line, .. } => StepOutput {
                        heading: line.clone(),
                        exit_code: Some(0),
                        ..Default::default()
                    },
                    Step::Upload { path, .. } => StepOutput {
                        heading: format!("cat > \"{path}\""),
                        exit_code: Some(0),
                        ..Default::default()
                    },
                })
                .collect(),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn acting_user(&self) -> DeployResult<String> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StateLockError)?
            .user
            .clone())
    }

    fn set_acting_user(&self, user: &str) -> DeployResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;
        let previous = std::mem::replace(&mut inner.user, user.to_string());
        inner.user_history.push(previous);
        Ok(())
    }

    fn run_remote(&self, script: &Script) -> DeployResult<RunReport> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StateLockError)?;

        let user = inner.user.clone();
        inner.executions.push(Execution { user, script: script.clone() });

        match inner.outcomes.pop_front() {
            Some(outcome) => outcome,
            None => Ok(Self::synthesize(script)),
        }
    }
}
