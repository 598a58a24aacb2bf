//! What a scaffold run did, step by step.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{TemplateRef, WriteMode};

/// Result of a single write step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// A fresh file was written.
    Written,
    /// Content was appended (the file may have been created).
    Appended,
    /// `Create` step whose destination already existed.
    Skipped,
    /// Simulation: rendered but not written.
    Simulated { content: String },
    /// Non-fatal failure; the command carried on.
    Failed { reason: String },
}

impl StepOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Appended => "appended",
            Self::Skipped => "skipped",
            Self::Simulated { .. } => "simulated",
            Self::Failed { .. } => "failed",
        }
    }

    pub fn touched_disk(&self) -> bool {
        matches!(self, Self::Written | Self::Appended)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub template: TemplateRef,
    /// Relative to the project root.
    pub destination: PathBuf,
    pub mode: WriteMode,
    pub outcome: StepOutcome,
}

/// Everything a `create-*` command did, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaffoldReport {
    pub command: String,
    pub root: PathBuf,
    pub simulate: bool,
    /// Package markers created, relative to the root.
    pub markers: Vec<PathBuf>,
    pub steps: Vec<StepReport>,
}

impl ScaffoldReport {
    pub fn new(command: impl Into<String>, root: impl Into<PathBuf>, simulate: bool) -> Self {
        Self {
            command: command.into(),
            root: root.into(),
            simulate,
            markers: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Absolute (or root-relative) location of a step's destination.
    pub fn resolve(&self, destination: &Path) -> PathBuf {
        self.root.join(destination)
    }

    pub fn count(&self, label: &str) -> usize {
        self.steps
            .iter()
            .filter(|s| s.outcome.label() == label)
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Files written or appended, deduplicated, in step order.
    pub fn touched_files(&self) -> Vec<&Path> {
        let mut out: Vec<&Path> = Vec::new();
        for step in self.steps.iter().filter(|s| s.outcome.touched_disk()) {
            if !out.contains(&step.destination.as_path()) {
                out.push(&step.destination);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(dest: &str, outcome: StepOutcome) -> StepReport {
        StepReport {
            template: TemplateRef::new("entity", "class_dataclass.py"),
            destination: dest.into(),
            mode: WriteMode::Append,
            outcome,
        }
    }

    #[test]
    fn counts_and_touched_files() {
        let mut report = ScaffoldReport::new("create-entity", ".", false);
        report.steps = vec![
            step("a/entities.py", StepOutcome::Skipped),
            step("a/entities.py", StepOutcome::Appended),
            step("a/exceptions.py", StepOutcome::Appended),
            step("a/entities.py", StepOutcome::Appended),
        ];

        assert_eq!(report.count("appended"), 3);
        assert_eq!(report.count("skipped"), 1);
        assert!(!report.has_failures());
        assert_eq!(
            report.touched_files(),
            [Path::new("a/entities.py"), Path::new("a/exceptions.py")]
        );
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(StepOutcome::Failed {
            reason: "nope".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "reason": "nope"}));

        let json = serde_json::to_value(StepOutcome::Written).unwrap();
        assert_eq!(json, serde_json::json!({"status": "written"}));
    }
}
