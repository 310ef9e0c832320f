//! Command handlers.
//!
//! Each handler translates CLI arguments into core service calls and
//! displays results. No business logic lives here.

pub mod completions;
pub mod generate;
pub mod lifecycle;
pub mod print;
pub mod setup;

use unictl_core::domain::{DeploySettings, ServiceConfig};

use crate::{
    cli::GlobalArgs,
    config::RawSettings,
    error::{CliError, CliResult},
};

/// Load settings and resolve the immutable service configuration.
///
/// Shared by every command that talks to the remote host. `generate` and
/// `completions` deliberately skip this — they must work in a repo that has
/// no deploy settings yet.
pub(crate) fn resolve_config(global: &GlobalArgs) -> CliResult<(DeploySettings, ServiceConfig)> {
    let raw = RawSettings::load(global.config.as_deref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;

    let settings = raw.into_deploy_settings();
    let config = ServiceConfig::resolve(&settings).map_err(|e| CliError::Core(e.into()))?;
    Ok((settings, config))
}
