//! `unictl print` and `unictl print-remote` — read-only inspection.

use tracing::instrument;

use unictl_adapters::{BUILTIN_UNIT_TEMPLATE, LocalFilesystem, SshRunner, SubstitutionRenderer};
use unictl_core::application::InspectService;

use crate::{
    cli::GlobalArgs,
    commands::resolve_config,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// `print`: render the resolved template locally and emit it.
#[instrument(skip_all)]
pub fn execute_print(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let (settings, config) = resolve_config(&global)?;
    let service = build_service(&settings);

    let project_root = std::env::current_dir()?;
    let (source, rendered) = service
        .print(&config, &project_root)
        .map_err(CliError::Core)?;

    output.info(&format!("Rendered from {}", source.describe()))?;
    output.payload(&rendered)?;
    Ok(())
}

/// `print-remote`: best-effort read of the installed remote file.
#[instrument(skip_all)]
pub fn execute_print_remote(global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let (settings, config) = resolve_config(&global)?;
    let service = build_service(&settings);

    let report = service.print_remote(&config).map_err(CliError::Core)?;
    output.render_report(&report)?;
    Ok(())
}

fn build_service(settings: &unictl_core::domain::DeploySettings) -> InspectService {
    InspectService::new(
        Box::new(SshRunner::new(&settings.host, &settings.user)),
        Box::new(LocalFilesystem::new()),
        Box::new(SubstitutionRenderer::new()),
        BUILTIN_UNIT_TEMPLATE,
    )
}
