//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the `create-*` workflow:
//! 1. Build and validate the plan for a request
//! 2. Check guards and prepare directories (markers included)
//! 3. Render every step and materialize it
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        report::{ScaffoldReport, StepOutcome, StepReport},
        services::materializer::FileMaterializer,
    },
    domain::{DomainValidator as validator, RenderParams, ScaffoldPlan, ScaffoldRequest, TemplateRef},
    error::ScaffoldResult,
};

/// Where and how a plan is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Project root that app paths are relative to.
    pub root: PathBuf,
    /// Render and report, but never touch the filesystem.
    pub simulate: bool,
}

impl ScaffoldOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            simulate: false,
        }
    }

    pub fn simulate(mut self, simulate: bool) -> Self {
        self.simulate = simulate;
        self
    }
}

/// Main scaffolding service.
///
/// Orchestrates the plan, render, and write workflow.
pub struct ScaffoldService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use ddd_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Run a `create-*` request.
    #[instrument(
        skip_all,
        fields(
            command = request.command_name(),
            app = %request.app(),
            simulate = options.simulate
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult<ScaffoldReport> {
        let plan = request.plan();
        self.execute(&plan, options)
    }

    /// Execute an already built plan.
    ///
    /// Guards are checked before anything is created. A step failure aborts
    /// the run when the step is marked `fail_if_error`; otherwise it is
    /// recorded and the next step runs. Nothing is rolled back.
    pub fn execute(
        &self,
        plan: &ScaffoldPlan,
        options: &ScaffoldOptions,
    ) -> ScaffoldResult<ScaffoldReport> {
        validator::validate_plan(plan)?;

        let materializer = FileMaterializer::new(self.filesystem.as_ref(), &options.root);
        let mut report = ScaffoldReport::new(&plan.command, &options.root, options.simulate);

        if !options.simulate {
            for guard in &plan.guards {
                if materializer.exists(&guard.path) {
                    warn!(path = %guard.path.display(), "Target exists, nothing written");
                    return Err(ApplicationError::TargetExists {
                        path: guard.path.clone(),
                    }
                    .into());
                }
            }

            for dir in plan.directories() {
                let markers = materializer.prepare_directory(&dir)?;
                report.markers.extend(markers);
            }
        }

        for step in &plan.steps {
            let outcome = if materializer.should_skip(step, options.simulate) {
                StepOutcome::Skipped
            } else {
                let attempt = self
                    .render(&step.template, &step.params)
                    .and_then(|content| {
                        materializer.materialize(step, &content, options.simulate)
                    });

                match attempt {
                    Ok(outcome) => outcome,
                    Err(e) if step.fail_if_error => return Err(e),
                    Err(e) => {
                        warn!(
                            template = %step.template,
                            error = %e,
                            "Step failed, continuing"
                        );
                        StepOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            };

            match &outcome {
                StepOutcome::Written | StepOutcome::Appended => info!(
                    template = %step.template,
                    path = %step.destination.display(),
                    outcome = outcome.label(),
                    "File materialized"
                ),
                _ => debug!(
                    template = %step.template,
                    path = %step.destination.display(),
                    outcome = outcome.label(),
                    "Step finished"
                ),
            }

            report.steps.push(StepReport {
                template: step.template.clone(),
                destination: step.destination.clone(),
                mode: step.mode,
                outcome,
            });
        }

        info!(
            steps = report.steps.len(),
            markers = report.markers.len(),
            "Scaffold completed"
        );
        Ok(report)
    }

    /// Load and render one template.
    pub fn render(&self, template: &TemplateRef, params: &RenderParams) -> ScaffoldResult<String> {
        let source = self.store.load(template)?;
        self.renderer.render(template, &source, params)
    }
}
