//! Infrastructure adapters for unictl.
//!
//! This crate implements the ports defined in
//! `unictl_core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod builtin_template;
pub mod filesystem;
pub mod renderer;
pub mod runner;

// Re-export commonly used adapters
pub use builtin_template::BUILTIN_UNIT_TEMPLATE;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SubstitutionRenderer;
pub use runner::{RecordingRunner, SshRunner};
