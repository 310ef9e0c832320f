//! `unictl setup` — install the unit on the remote host.

use tracing::{info, instrument};

use unictl_adapters::{BUILTIN_UNIT_TEMPLATE, LocalFilesystem, SshRunner, SubstitutionRenderer};
use unictl_core::application::SetupService;

use crate::{
    cli::GlobalArgs,
    commands::resolve_config,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `setup` command.
#[instrument(skip_all)]
pub fn execute(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let (settings, config) = resolve_config(&global)?;

    output.header(&format!(
        "Installing {} on {} ({} mode)",
        config.service_name(),
        settings.host,
        config.install_mode()
    ))?;

    let runner = SshRunner::new(&settings.host, &settings.user);
    let service = SetupService::new(
        Box::new(runner),
        Box::new(LocalFilesystem::new()),
        Box::new(SubstitutionRenderer::new()),
        BUILTIN_UNIT_TEMPLATE,
    );

    let project_root = std::env::current_dir()?;
    info!(host = %settings.host, unit = %config.service_name(), "setup started");

    let report = service
        .run(&config, settings.effective_setup_user(), &project_root)
        .map_err(CliError::Core)?;
    output.render_report(&report)?;

    output.success(&format!(
        "{} installed and manager reloaded (unit not started)",
        config.service_name()
    ))?;
    Ok(())
}
