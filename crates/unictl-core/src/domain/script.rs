//! Remote command scripts.
//!
//! A [`Script`] is the ordered step queue one task sends over the transport.
//! Steps execute sequentially; the first failing step aborts the remainder.
//! Each command step may carry a [`StepFailure`] naming the domain error a
//! non-zero exit maps to, so precondition probes surface as the right error
//! kind instead of a generic "command failed".

use crate::domain::error::DomainError;
use crate::domain::shell::ShellCommand;

/// How a failed step is reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The remote host lacks systemd. Fatal, raised before any mutation.
    Platform { message: String },
    /// A privileged operation was refused. Fatal, carries a remediation
    /// hint shown alongside the error.
    Permission { message: String, hint: String },
}

impl StepFailure {
    /// Build the domain error for this failure, attaching captured output.
    pub fn into_error(self, detail: &str) -> DomainError {
        match self {
            Self::Platform { message } => DomainError::SystemdUnavailable {
                detail: join_detail(&message, detail),
            },
            Self::Permission { message, hint } => DomainError::PermissionDenied {
                message: join_detail(&message, detail),
                hint,
            },
        }
    }
}

fn join_detail(message: &str, detail: &str) -> String {
    let detail = detail.trim();
    if detail.is_empty() {
        message.to_string()
    } else {
        format!("{message}: {detail}")
    }
}

/// One entry in a script.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Operator-facing annotation; echoed, never executed.
    Comment(String),
    /// One shell line, serialized from a typed builder.
    Run {
        line: String,
        failure: Option<StepFailure>,
    },
    /// Write `content` to `path` on the remote host, overwriting. Content
    /// travels out-of-band (stdin), never spliced into a shell line.
    Upload { path: String, content: String },
}

/// Ordered remote step queue for one task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Comment(text.into()));
        self
    }

    /// Queue a command whose failure maps to a generic execution error.
    pub fn run(&mut self, command: &ShellCommand) -> &mut Self {
        self.steps.push(Step::Run { line: command.render(), failure: None });
        self
    }

    /// Queue an already-serialized compound line (e.g. an `&&`/`||` chain).
    pub fn run_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Run { line: line.into(), failure: None });
        self
    }

    /// Queue a command whose failure maps to a specific domain error.
    pub fn run_or(&mut self, command: &ShellCommand, failure: StepFailure) -> &mut Self {
        self.steps.push(Step::Run { line: command.render(), failure: Some(failure) });
        self
    }

    pub fn upload(&mut self, path: impl Into<String>, content: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Upload { path: path.into(), content: content.into() });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Every queued command line, in order. Comments and uploads excluded.
    pub fn command_lines(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|s| match s {
                Step::Run { line, .. } => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Captured output of one executed step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutput {
    /// The command line, upload path, or comment text.
    pub heading: String,
    pub stdout: String,
    pub stderr: String,
    /// Comments carry no execution, so no exit code.
    pub exit_code: Option<i32>,
}

/// Ordered step outputs of one script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub steps: Vec<StepOutput>,
}

impl RunReport {
    /// Concatenated stdout of all executed steps.
    pub fn stdout(&self) -> String {
        self.steps
            .iter()
            .filter(|s| s.exit_code.is_some())
            .map(|s| s.stdout.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}
