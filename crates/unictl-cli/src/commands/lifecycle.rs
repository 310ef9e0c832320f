//! Lifecycle verb commands (`status`, `start`, `stop`, `restart`,
//! `enable`, `disable`).

use tracing::{info, instrument};

use unictl_adapters::SshRunner;
use unictl_core::application::LifecycleService;
use unictl_core::domain::LifecycleVerb;

use crate::{
    cli::GlobalArgs,
    commands::resolve_config,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute one lifecycle verb.
#[instrument(skip_all, fields(verb = %verb))]
pub fn execute(verb: LifecycleVerb, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let (settings, config) = resolve_config(&global)?;

    let runner = SshRunner::new(&settings.host, &settings.user);
    let service = LifecycleService::new(Box::new(runner));

    info!(host = %settings.host, unit = %config.service_name(), "dispatching verb");

    let report = service
        .run(&config, settings.effective_setup_user(), verb)
        .map_err(CliError::Core)?;
    output.render_report(&report)?;

    if verb.is_mutating() {
        output.success(&format!("{} {}", config.service_name(), past_tense(verb)))?;
    }
    Ok(())
}

fn past_tense(verb: LifecycleVerb) -> &'static str {
    match verb {
        LifecycleVerb::Status => "queried",
        LifecycleVerb::Start => "started",
        LifecycleVerb::Stop => "stopped",
        LifecycleVerb::Restart => "restarted",
        LifecycleVerb::Enable => "enabled",
        LifecycleVerb::Disable => "disabled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_tense_covers_every_verb() {
        for verb in [
            LifecycleVerb::Status,
            LifecycleVerb::Start,
            LifecycleVerb::Stop,
            LifecycleVerb::Restart,
            LifecycleVerb::Enable,
            LifecycleVerb::Disable,
        ] {
            assert!(!past_tense(verb).is_empty());
        }
    }
}
