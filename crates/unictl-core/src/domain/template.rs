//! Unit template identity and render context.
//!
//! The template resolves to exactly one of two candidates: a project-local
//! override (committed next to the deploy config so it can be customized)
//! or the bundled default shipped with the tool. Content is opaque text;
//! rendering is `{{key}}` substitution.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::config::ServiceConfig;

/// Project-relative location of the override template. `generate` creates
/// it; `setup`/`print` prefer it over the bundled default when present.
pub const UNIT_TEMPLATE_OVERRIDE: &str = "config/deploy/templates/unicorn.service.tmpl";

/// Which template a task will render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// The project-local override at [`UNIT_TEMPLATE_OVERRIDE`].
    Override(PathBuf),
    /// The default template bundled with the tool.
    Builtin,
}

impl TemplateSource {
    /// Human-readable origin for operator output.
    pub fn describe(&self) -> String {
        match self {
            Self::Override(path) => format!("custom template at {}", path.display()),
            Self::Builtin => "bundled default template".to_string(),
        }
    }
}

/// Placeholder values substituted into the unit template.
///
/// Keys are stable lowercase identifiers; a `{{key}}` occurrence in the
/// template is replaced with the value. Unknown placeholders are left
/// untouched so a typo is visible in the rendered output instead of
/// silently vanishing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    /// Context for the resolved service configuration.
    pub fn for_config(config: &ServiceConfig) -> Self {
        let mut values = BTreeMap::new();
        values.insert("application_name".into(), config.application_name().to_string());
        values.insert("service_name".into(), config.service_name().to_string());
        values.insert("socket_path".into(), config.socket_path().to_string());
        values.insert("current_path".into(), config.current_path().to_string());
        values.insert("user".into(), config.user().to_string());
        Self { values }
    }

    /// Add or override one placeholder value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Substitute every known `{{key}}` in `template`.
    pub fn render(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (key, value) in &self.values {
            out = out.replace(&format!("{{{{{key}}}}}"), value);
        }
        out
    }
}
