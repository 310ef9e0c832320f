//! Unit template resolution and loading.
//!
//! Resolution is a pure function of local filesystem state: the project
//! override wins when it exists, otherwise the bundled default applies.
//! The bundled content itself ships with the adapters crate and is passed
//! in by the caller, keeping this layer free of embedded assets.

use std::path::Path;

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::template::{TemplateSource, UNIT_TEMPLATE_OVERRIDE};
use crate::error::DeployResult;

/// Decide which template a task will use.
pub fn resolve(fs: &dyn Filesystem, project_root: &Path) -> TemplateSource {
    let override_path = project_root.join(UNIT_TEMPLATE_OVERRIDE);
    if fs.exists(&override_path) {
        debug!(path = %override_path.display(), "using override template");
        TemplateSource::Override(override_path)
    } else {
        debug!("using bundled template");
        TemplateSource::Builtin
    }
}

/// Load the resolved template's content.
pub fn load(
    fs: &dyn Filesystem,
    source: &TemplateSource,
    builtin: &str,
) -> DeployResult<String> {
    match source {
        TemplateSource::Override(path) => fs.read_to_string(path),
        TemplateSource::Builtin => Ok(builtin.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::RwLock;

    /// Filesystem stub backed by a path→content map.
    struct MapFs {
        files: RwLock<HashMap<PathBuf, String>>,
    }

    impl MapFs {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: RwLock::new(
                    files
                        .iter()
                        .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                        .collect(),
                ),
            }
        }
    }

    impl Filesystem for MapFs {
        fn create_dir_all(&self, _path: &Path) -> DeployResult<()> {
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> DeployResult<()> {
            self.files.write().unwrap().insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> DeployResult<String> {
            self.files.read().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.read().unwrap().contains_key(path)
        }
    }

    #[test]
    fn override_wins_when_present() {
        let fs = MapFs::new(&[(
            "/project/config/deploy/templates/unicorn.service.tmpl",
            "[Unit]\n",
        )]);
        let source = resolve(&fs, Path::new("/project"));
        assert_eq!(
            source,
            TemplateSource::Override(PathBuf::from(
                "/project/config/deploy/templates/unicorn.service.tmpl"
            ))
        );
        assert_eq!(load(&fs, &source, "builtin").unwrap(), "[Unit]\n");
    }

    #[test]
    fn builtin_when_no_override() {
        let fs = MapFs::new(&[]);
        let source = resolve(&fs, Path::new("/project"));
        assert_eq!(source, TemplateSource::Builtin);
        assert_eq!(load(&fs, &source, "builtin content").unwrap(), "builtin content");
    }
}
