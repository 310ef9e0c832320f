//! `unictl generate` — copy the bundled unit template into the project.

use tracing::instrument;

use unictl_adapters::{BUILTIN_UNIT_TEMPLATE, LocalFilesystem};
use unictl_core::application::GenerateService;

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `generate` command.
#[instrument(skip_all)]
pub fn execute(_global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = GenerateService::new(Box::new(LocalFilesystem::new()), BUILTIN_UNIT_TEMPLATE);

    let project_root = std::env::current_dir()?;
    let path = service.run(&project_root).map_err(CliError::Core)?;

    output.success(&format!("Unit template generated at {}", path.display()))?;
    output.print("Customize it, then run 'unictl setup' to install it remotely.")?;
    Ok(())
}
