//! Templates read from a `<root>/<template_name>/<file_name>` tree.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use ddd_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateRef,
    error::ScaffoldResult,
};

use crate::filesystem::map_io_error;

/// Store backed by a directory on disk.
///
/// Sources are re-read on every [`load`](TemplateStore::load); edits to the
/// directory are picked up without restarting.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a template file, or `None` when either component would escape
    /// the root.
    fn path_of(&self, template: &TemplateRef) -> Option<PathBuf> {
        let plain = |s: &str| {
            let mut components = Path::new(s).components();
            matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            )
        };

        (plain(&template.template_name) && plain(&template.file_name))
            .then(|| self.root.join(&template.template_name).join(&template.file_name))
    }
}

impl TemplateStore for DirectoryStore {
    fn load(&self, template: &TemplateRef) -> ScaffoldResult<String> {
        let not_found = || ApplicationError::TemplateNotFound {
            template: template.id(),
        };

        let path = self.path_of(template).ok_or_else(not_found)?;
        if !path.is_file() {
            debug!(path = %path.display(), "template file missing");
            return Err(not_found().into());
        }

        std::fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read template"))
    }

    fn list(&self) -> ScaffoldResult<Vec<TemplateRef>> {
        let mut templates = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(2).max_depth(2) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable template entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let template_name = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().into_owned());
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if let Some(template_name) = template_name {
                templates.push(TemplateRef::new(template_name, file_name));
            }
        }

        templates.sort();
        Ok(templates)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
