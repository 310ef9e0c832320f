//! systemctl command generation.
//!
//! Every lifecycle verb maps to one systemctl invocation against the
//! resolved unit, scoped with `--user` iff the install mode is per-user.
//! Mutating verbs are wrapped in a [`VerbCommand`]: the action, a
//! confirming status query, and a journal fallback correlated through the
//! unit's invocation ID — so a verb either shows its post-action status or
//! actionable log output, never a bare non-zero exit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::mode::InstallMode;
use crate::domain::shell::ShellCommand;

/// The lifecycle verbs exposed as CLI tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleVerb {
    Status,
    Start,
    Stop,
    Restart,
    Enable,
    Disable,
}

impl LifecycleVerb {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }

    /// Whether this verb mutates manager state. `status` is the only
    /// read-only verb.
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Status)
    }

    /// Whether running this verb needs the elevated identity.
    ///
    /// System-mode units live in a root-owned path, so every mutating verb
    /// elevates there. User-mode units are owned by the acting user, and
    /// `status` never elevates in either mode.
    pub const fn requires_elevation(&self, mode: InstallMode) -> bool {
        self.is_mutating() && matches!(mode, InstallMode::System)
    }
}

impl fmt::Display for LifecycleVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds systemctl/journalctl invocations for one mode + unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemdCtl {
    mode: InstallMode,
    unit: String,
}

impl SystemdCtl {
    pub fn new(mode: InstallMode, unit: impl Into<String>) -> Self {
        Self { mode, unit: unit.into() }
    }

    /// `systemctl [--user] <verb> <unit>`
    pub fn verb(&self, verb: LifecycleVerb) -> ShellCommand {
        ShellCommand::new("systemctl")
            .flag(self.mode.scope_flag())
            .arg(verb.as_str())
            .arg(self.unit.as_str())
    }

    /// `systemctl [--user] daemon-reload`
    pub fn daemon_reload(&self) -> ShellCommand {
        ShellCommand::new("systemctl")
            .flag(self.mode.scope_flag())
            .arg("daemon-reload")
    }

    /// Journal query scoped to the unit's current invocation ID.
    ///
    /// The inner `systemctl show` runs remotely inside `$(…)`, so the ID is
    /// read on the host at execution time.
    pub fn journal_for_invocation(&self) -> ShellCommand {
        let show = ShellCommand::new("systemctl")
            .flag(self.mode.scope_flag())
            .args(["show", "-p", "InvocationID", "--value"])
            .arg(self.unit.as_str());

        ShellCommand::new("journalctl")
            .flag(self.mode.scope_flag())
            .arg("--no-pager")
            .raw_arg(format!("_SYSTEMD_INVOCATION_ID=$({})", show.render()))
    }

    /// The action/confirm/fallback descriptor for a mutating verb.
    pub fn verb_command(&self, verb: LifecycleVerb) -> VerbCommand {
        VerbCommand {
            action: self.verb(verb),
            confirm: self.verb(LifecycleVerb::Status),
            fallback: self.journal_for_invocation(),
        }
    }
}

/// One lifecycle action with its confirmation and diagnostic fallback.
///
/// Serialized as `(action && confirm) || fallback`: success surfaces the
/// post-action status, failure of either half surfaces the unit's journal.
/// The exit status of the whole chain is the exit status of the last command
/// run — a successful journal dump masks the original failure, which is the
/// documented behavior of these tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbCommand {
    pub action: ShellCommand,
    pub confirm: ShellCommand,
    pub fallback: ShellCommand,
}

impl VerbCommand {
    /// Serialize the chain to one remote shell line.
    pub fn render(&self) -> String {
        format!(
            "({} && {}) || {}",
            self.action.render(),
            self.confirm.render(),
            self.fallback.render()
        )
    }
}
