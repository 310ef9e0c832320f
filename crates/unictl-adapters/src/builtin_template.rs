//! The default unit template bundled with the tool.
//!
//! `generate` copies it into the project for customization; `setup` and
//! `print` fall back to it when no project override exists.

/// Default Unicorn unit template, `{{key}}` placeholders included.
pub const BUILTIN_UNIT_TEMPLATE: &str = include_str!("templates/unicorn.service.tmpl");
