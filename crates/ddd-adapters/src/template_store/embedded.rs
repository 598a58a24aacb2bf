//! The template library compiled into the binary.

use std::path::{Path, PathBuf};

use tracing::info;

use ddd_core::{
    application::{ApplicationError, ports::{Filesystem, TemplateStore}},
    domain::TemplateRef,
    error::ScaffoldResult,
};

macro_rules! bundled {
    ($dir:literal, $file:literal) => {
        (
            $dir,
            $file,
            include_str!(concat!("../../templates/", $dir, "/", $file)),
        )
    };
}

/// `(template_name, file_name, source)`, sorted.
static LIBRARY: &[(&str, &str, &str)] = &[
    bundled!("api", "apiview_views.py"),
    bundled!("api", "viewset_views.py"),
    bundled!("dto", "class_dataclass.py"),
    bundled!("dto", "class_pydantic.py"),
    bundled!("dto", "imports_dataclass.py"),
    bundled!("dto", "imports_pydantic.py"),
    bundled!("entity", "class_dataclass.py"),
    bundled!("entity", "class_pydantic.py"),
    bundled!("entity", "exceptions.py"),
    bundled!("entity", "imports_dataclass.py"),
    bundled!("entity", "imports_pydantic.py"),
    bundled!("entity", "schemas_pydantic.py"),
    bundled!("repository", "class.py"),
    bundled!("repository", "exceptions.py"),
    bundled!("repository", "mappers_dataclass.py"),
    bundled!("repository", "mappers_pydantic.py"),
    bundled!("routers", "api_apiview_urls.py"),
    bundled!("routers", "api_viewset_urls.py"),
    bundled!("routers", "web_urls.py"),
    bundled!("serializer", "class.py"),
    bundled!("serializer", "imports.py"),
    bundled!("service", "class.py"),
    bundled!("service", "class_crud.py"),
    bundled!("service", "function.py"),
    bundled!("service", "function_crud.py"),
    bundled!("service", "imports.py"),
    bundled!("utils", "filter_dict.py"),
    bundled!("utils", "is_integer.py"),
    bundled!("utils", "is_uuid.py"),
    bundled!("view", "web_forms.py"),
    bundled!("view", "web_views.py"),
];

/// Store serving the bundled library. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    pub fn new() -> Self {
        Self
    }

    /// Write the whole library below `dir` so it can be customised and used
    /// with `--templates`. Existing files are left alone unless `overwrite`.
    ///
    /// Returns the files written.
    pub fn export(
        &self,
        filesystem: &dyn Filesystem,
        dir: &Path,
        overwrite: bool,
    ) -> ScaffoldResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (template_name, file_name, source) in LIBRARY {
            let target_dir = dir.join(template_name);
            let target = target_dir.join(file_name);
            if !overwrite && filesystem.exists(&target) {
                continue;
            }
            filesystem.create_dir_all(&target_dir)?;
            filesystem.write_file(&target, source)?;
            written.push(target);
        }

        info!(dir = %dir.display(), count = written.len(), "exported template library");
        Ok(written)
    }
}

impl TemplateStore for EmbeddedStore {
    fn load(&self, template: &TemplateRef) -> ScaffoldResult<String> {
        LIBRARY
            .iter()
            .find(|(t, f, _)| *t == template.template_name && *f == template.file_name)
            .map(|(_, _, source)| source.to_string())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    template: template.id(),
                }
                .into()
            })
    }

    fn list(&self) -> ScaffoldResult<Vec<TemplateRef>> {
        Ok(LIBRARY
            .iter()
            .map(|(t, f, _)| TemplateRef::new(*t, *f))
            .collect())
    }

    fn describe(&self) -> String {
        "built-in library".to_string()
    }
}
