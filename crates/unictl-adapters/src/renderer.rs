//! Placeholder substitution renderer.

use tracing::instrument;

use unictl_core::{
    application::ports::TemplateRenderer,
    domain::RenderContext,
    error::DeployResult,
};

/// Renderer using `{{key}}` variable substitution.
///
/// Unknown placeholders pass through unchanged, so a template typo shows up
/// in the rendered unit instead of disappearing silently.
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    /// Create a new substitution renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstitutionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all)]
    fn render(&self, template: &str, context: &RenderContext) -> DeployResult<String> {
        Ok(context.render(template))
    }
}
