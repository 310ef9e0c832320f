//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use unictl_core::domain::LifecycleVerb;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "unictl",
    bin_name = "unictl",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Manage a Unicorn app server as a remote systemd unit",
    long_about = "unictl installs and drives a systemd-managed Unicorn \
                  application server on a remote host, from a local \
                  deployment session.",
    after_help = "EXAMPLES:\n\
        \x20 unictl generate                 # copy the unit template into the project\n\
        \x20 unictl setup                    # install the unit on the remote host\n\
        \x20 unictl start\n\
        \x20 unictl status\n\
        \x20 unictl print                    # preview the rendered unit locally",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the bundled unit template into the project for customization.
    #[command(
        visible_alias = "gen",
        about = "Generate the unit template in the local repo",
        after_help = "Creates config/deploy/templates/unicorn.service.tmpl.\n\
                      Fails if the file already exists."
    )]
    Generate,

    /// Install the unit on the remote host (does not start it).
    #[command(about = "Set up the systemd unit on the remote host")]
    Setup,

    /// Query the unit's status.
    #[command(about = "Status of the remote unit")]
    Status,

    /// Start the unit.
    #[command(about = "Start the remote unit")]
    Start,

    /// Stop the unit.
    #[command(about = "Stop the remote unit")]
    Stop,

    /// Restart the unit.
    #[command(about = "Restart the remote unit")]
    Restart,

    /// Enable the unit at boot/login.
    #[command(about = "Enable the remote unit")]
    Enable,

    /// Disable the unit.
    #[command(about = "Disable the remote unit")]
    Disable,

    /// Render the resolved template locally and print it.
    #[command(about = "Print the unit rendered from the local template")]
    Print,

    /// Print the unit file currently installed on the remote host.
    #[command(
        name = "print-remote",
        about = "Print the installed unit from the remote host"
    )]
    PrintRemote,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 unictl completions bash > ~/.local/share/bash-completion/completions/unictl\n\
            \x20 unictl completions zsh  > ~/.zfunc/_unictl\n\
            \x20 unictl completions fish > ~/.config/fish/completions/unictl.fish"
    )]
    Completions(CompletionsArgs),
}

impl Commands {
    /// The lifecycle verb this subcommand maps to, if any.
    pub fn lifecycle_verb(&self) -> Option<LifecycleVerb> {
        match self {
            Self::Status => Some(LifecycleVerb::Status),
            Self::Start => Some(LifecycleVerb::Start),
            Self::Stop => Some(LifecycleVerb::Stop),
            Self::Restart => Some(LifecycleVerb::Restart),
            Self::Enable => Some(LifecycleVerb::Enable),
            Self::Disable => Some(LifecycleVerb::Disable),
            _ => None,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `unictl completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
