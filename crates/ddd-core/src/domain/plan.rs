//! Scaffold plans: the pure description of what a `create-*` command does.
//!
//! A plan is built from a [`ScaffoldRequest`](super::ScaffoldRequest) without
//! touching the filesystem. The application layer executes it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::DomainError;
use super::template_ref::{RenderParams, TemplateRef};

/// How a rendered template reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Write a fresh file; an existing destination is skipped.
    Create,
    /// Append to the destination, creating it when missing.
    Append,
}

/// One template rendered into one destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteStep {
    pub template: TemplateRef,
    pub params: RenderParams,
    /// Relative to the project root.
    pub destination: PathBuf,
    pub mode: WriteMode,
    /// Abort the whole command when this step fails.
    pub fail_if_error: bool,
}

impl WriteStep {
    pub fn create(
        template: TemplateRef,
        params: RenderParams,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template,
            params,
            destination: destination.into(),
            mode: WriteMode::Create,
            fail_if_error: true,
        }
    }

    pub fn append(
        template: TemplateRef,
        params: RenderParams,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            mode: WriteMode::Append,
            ..Self::create(template, params, destination)
        }
    }

    /// Mark this step as non-fatal: failures are reported and the command
    /// moves on.
    pub fn best_effort(mut self) -> Self {
        self.fail_if_error = false;
        self
    }

    /// Directory the destination lives in.
    pub fn directory(&self) -> &Path {
        self.destination.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Halt the command before anything is written when `path` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guard {
    pub path: PathBuf,
}

impl Guard {
    pub fn exists(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Complete description of a command's effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldPlan {
    pub command: String,
    pub guards: Vec<Guard>,
    pub steps: Vec<WriteStep>,
}

impl ScaffoldPlan {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            guards: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn guard(mut self, guard: Guard) -> Self {
        self.guards.push(guard);
        self
    }

    pub fn step(mut self, step: WriteStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Distinct step directories, in first-use order.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        self.steps
            .iter()
            .map(|s| s.directory().to_path_buf())
            .filter(|d| seen.insert(d.clone()))
            .collect()
    }

    /// Check structural invariants.
    ///
    /// - at least one step
    /// - every path relative
    /// - a `Create` destination is never written twice by `Create` steps
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.steps.is_empty() {
            return Err(DomainError::EmptyPlan {
                command: self.command.clone(),
            });
        }

        let paths = self
            .steps
            .iter()
            .map(|s| &s.destination)
            .chain(self.guards.iter().map(|g| &g.path));
        for path in paths {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }

        let mut created = HashSet::new();
        for step in self.steps.iter().filter(|s| s.mode == WriteMode::Create) {
            if !created.insert(&step.destination) {
                return Err(DomainError::DuplicateDestination {
                    path: step.destination.display().to_string(),
                });
            }
        }

        Ok(())
    }
}
