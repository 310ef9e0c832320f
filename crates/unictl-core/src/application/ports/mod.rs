//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define the interfaces the application
//! needs from the outside world. Adapters in `unictl-adapters` implement
//! them.
//!
//! - `CommandRunner`: sequential remote script execution over a transport
//! - `Filesystem`: local file operations
//! - `TemplateRenderer`: placeholder substitution

use std::path::Path;

use crate::domain::{RenderContext, RunReport, Script};
use crate::error::DeployResult;

/// Port for remote script execution.
///
/// Implemented by:
/// - `unictl_adapters::runner::SshRunner` (production)
/// - `unictl_adapters::runner::RecordingRunner` (testing)
///
/// ## Design notes
///
/// Steps run strictly in order; the first failing step aborts the rest and
/// surfaces the error mapped from its failure tag. The runner owns the one
/// piece of ambient mutable state in the system — the acting-user slot —
/// which only [`crate::application::elevation`] touches.
pub trait CommandRunner: Send + Sync {
    /// The identity remote commands currently run as.
    fn acting_user(&self) -> DeployResult<String>;

    /// Replace the acting identity. Callers must restore the previous value;
    /// use [`crate::application::elevation::with_elevation`] instead of
    /// calling this directly.
    fn set_acting_user(&self, user: &str) -> DeployResult<()>;

    /// Execute a script on the remote host as the acting user.
    fn run_remote(&self, script: &Script) -> DeployResult<RunReport>;
}

/// Port for local filesystem operations.
///
/// Implemented by:
/// - `unictl_adapters::filesystem::LocalFilesystem` (production)
/// - `unictl_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Write content to a file, overwriting.
    fn write_file(&self, path: &Path, content: &str) -> DeployResult<()>;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> DeployResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `unictl_adapters::renderer::SubstitutionRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with the given context.
    fn render(&self, template: &str, context: &RenderContext) -> DeployResult<String>;
}
