//! File materialization: turning rendered text into files on disk, and
//! keeping `__init__.py` package markers in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::{ports::Filesystem, report::StepOutcome},
    domain::{WriteMode, WriteStep},
    error::ScaffoldResult,
};

/// Name of the Python package marker.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Writes rendered steps below a project root.
///
/// All paths handed in are relative to `root`.
pub struct FileMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> FileMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.filesystem.exists(&self.resolve(path))
    }

    /// `mkdir -p` plus package markers. Returns the markers created.
    pub fn prepare_directory(&self, dir: &Path) -> ScaffoldResult<Vec<PathBuf>> {
        if dir.as_os_str().is_empty() {
            return Ok(Vec::new());
        }
        self.filesystem.create_dir_all(&self.resolve(dir))?;
        self.ensure_package_markers(dir)
    }

    /// Create `__init__.py` in `dir` and each ancestor, stopping at the first
    /// one that already has a marker.
    ///
    /// The walk ends at the first component without a name (`""`, `/`, `.`
    /// or `..`), so a relative `dir` never leaves the project root.
    pub fn ensure_package_markers(&self, dir: &Path) -> ScaffoldResult<Vec<PathBuf>> {
        let mut created = Vec::new();
        let mut current = dir;

        while current.file_name().is_some() {
            let marker = current.join(PACKAGE_MARKER);
            if self.exists(&marker) {
                break;
            }

            self.filesystem.write_file(&self.resolve(&marker), "")?;
            debug!(marker = %marker.display(), "Created package marker");
            created.push(marker);

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(created)
    }

    /// A non-simulated `Create` step whose destination exists is skipped
    /// without rendering.
    pub fn should_skip(&self, step: &WriteStep, simulate: bool) -> bool {
        !simulate && step.mode == WriteMode::Create && self.exists(&step.destination)
    }

    /// Write `content` for `step`.
    ///
    /// Simulation never touches the filesystem. Otherwise the content is
    /// framed by newlines and written or appended according to the step mode.
    pub fn materialize(
        &self,
        step: &WriteStep,
        content: &str,
        simulate: bool,
    ) -> ScaffoldResult<StepOutcome> {
        if simulate {
            return Ok(StepOutcome::Simulated {
                content: content.to_string(),
            });
        }

        let path = self.resolve(&step.destination);
        let payload = format!("\n{}\n", content);

        match step.mode {
            WriteMode::Create => {
                if self.filesystem.exists(&path) {
                    return Ok(StepOutcome::Skipped);
                }
                self.filesystem.write_file(&path, &payload)?;
                Ok(StepOutcome::Written)
            }
            WriteMode::Append => {
                self.filesystem.append_file(&path, &payload)?;
                Ok(StepOutcome::Appended)
            }
        }
    }
}
