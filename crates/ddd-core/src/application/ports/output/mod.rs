//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ddd-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{RenderParams, TemplateRef};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ddd_adapters::filesystem::LocalFilesystem` (production)
/// - `ddd_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed through as given; the caller joins them onto the
/// project root.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Append content to a file, creating it when missing.
    fn append_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `ddd_adapters::template_store::DirectoryStore` (a `templates/` tree on disk)
/// - `ddd_adapters::template_store::EmbeddedStore` (library bundled in the binary)
#[cfg_attr(test, automock)]
pub trait TemplateStore: Send + Sync {
    /// Load the source of `templates/<template_name>/<file_name>`.
    fn load(&self, template: &TemplateRef) -> ScaffoldResult<String>;

    /// List every template the store can load, sorted.
    fn list(&self) -> ScaffoldResult<Vec<TemplateRef>>;

    /// Human readable origin, e.g. a directory path.
    fn describe(&self) -> String;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `ddd_adapters::renderer::JinjaRenderer` (`[% %]` / `[[ ]]` delimiters)
#[cfg_attr(test, automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` (loaded from `template`) with `params`.
    ///
    /// # Arguments
    ///
    /// * `template` - Where the source came from, for error messages
    /// * `source` - Raw template text
    /// * `params` - Placeholder values
    fn render(
        &self,
        template: &TemplateRef,
        source: &str,
        params: &RenderParams,
    ) -> ScaffoldResult<String>;
}
