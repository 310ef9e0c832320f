//! unictl core — hexagonal architecture implementation.
//!
//! This crate provides the domain and application layers for the unictl
//! deployment tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           unictl-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Setup, Lifecycle, Generate, Inspect)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (CommandRunner, Filesystem, Renderer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    unictl-adapters (Infrastructure)     │
//! │  (SshRunner, LocalFilesystem, etc.)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ServiceConfig, InstallMode, SystemdCtl)│
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use unictl_core::domain::{DeploySettings, LifecycleVerb, ServiceConfig};
//! use unictl_core::application::LifecycleService;
//!
//! # fn demo(settings: DeploySettings, runner: Box<dyn unictl_core::application::ports::CommandRunner>) -> unictl_core::error::DeployResult<()> {
//! // 1. Resolve the immutable service configuration once.
//! let config = ServiceConfig::resolve(&settings)?;
//!
//! // 2. Drive a verb through the service (with injected adapters).
//! let service = LifecycleService::new(runner);
//! service.run(&config, settings.effective_setup_user(), LifecycleVerb::Restart)?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, InspectService, LifecycleService, RunId, SetupService,
        ports::{CommandRunner, Filesystem, TemplateRenderer},
        with_elevation,
    };
    pub use crate::domain::{
        DeploySettings, InstallMode, LifecycleVerb, RenderContext, RunReport, Script,
        ServiceConfig, Step, StepFailure, SystemdCtl, TemplateSource,
    };
    pub use crate::error::{DeployError, DeployResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
