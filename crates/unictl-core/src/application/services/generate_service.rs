//! Local template generation (`generate`).
//!
//! Copies the bundled default template into the project so it can be
//! customized and committed. Refuses to overwrite: an existing file may
//! carry local edits, and `setup` will already prefer it.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::ports::Filesystem;
use crate::domain::template::UNIT_TEMPLATE_OVERRIDE;
use crate::domain::DomainError;
use crate::error::DeployResult;

/// Orchestrates the `generate` task.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
    builtin_template: String,
}

impl GenerateService {
    pub fn new(filesystem: Box<dyn Filesystem>, builtin_template: impl Into<String>) -> Self {
        Self {
            filesystem,
            builtin_template: builtin_template.into(),
        }
    }

    /// Write the override template. Returns its path.
    ///
    /// # Errors
    ///
    /// [`DomainError::TemplateExists`] when the target already exists; no
    /// filesystem write happens in that case.
    #[instrument(skip_all, fields(root = %project_root.display()))]
    pub fn run(&self, project_root: &Path) -> DeployResult<PathBuf> {
        let target = project_root.join(UNIT_TEMPLATE_OVERRIDE);

        if self.filesystem.exists(&target) {
            return Err(DomainError::TemplateExists { path: target }.into());
        }

        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&target, &self.builtin_template)?;

        info!(path = %target.display(), "unit template generated");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::error::DeployError;
    use std::collections::{HashMap, HashSet};
    use std::sync::{Arc, RwLock};

    /// Shared-state filesystem stub; clones observe the same tree.
    #[derive(Clone, Default)]
    struct StubFs {
        files: Arc<RwLock<HashMap<PathBuf, String>>>,
        dirs: Arc<RwLock<HashSet<PathBuf>>>,
    }

    impl Filesystem for StubFs {
        fn create_dir_all(&self, path: &Path) -> DeployResult<()> {
            self.dirs.write().unwrap().insert(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> DeployResult<()> {
            self.files.write().unwrap().insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> DeployResult<String> {
            self.files.read().unwrap().get(path).cloned().ok_or_else(|| {
                DeployError::Application(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                })
            })
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path)
                || self.dirs.read().unwrap().contains(path)
        }
    }

    #[test]
    fn writes_builtin_content_to_the_override_path() {
        let fs = StubFs::default();
        let service = GenerateService::new(Box::new(fs.clone()), "[Unit]\nbuiltin\n");

        let path = service.run(Path::new("/project")).unwrap();

        assert_eq!(
            path,
            PathBuf::from("/project/config/deploy/templates/unicorn.service.tmpl")
        );
        assert_eq!(fs.read_to_string(&path).unwrap(), "[Unit]\nbuiltin\n");
        assert!(fs.exists(Path::new("/project/config/deploy/templates")));
    }

    #[test]
    fn second_run_fails_without_writing() {
        let fs = StubFs::default();
        let service = GenerateService::new(Box::new(fs.clone()), "v1");

        let path = service.run(Path::new("/project")).unwrap();

        // Simulate a local customization.
        fs.write_file(&path, "customized").unwrap();

        let err = service.run(Path::new("/project")).unwrap_err();
        assert!(matches!(
            err,
            DeployError::Domain(DomainError::TemplateExists { .. })
        ));
        // The customization survived.
        assert_eq!(fs.read_to_string(&path).unwrap(), "customized");
    }
}
