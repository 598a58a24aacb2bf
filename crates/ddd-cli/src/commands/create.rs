//! Implementation of the `ddd create-*` commands.
//!
//! Responsibility: translate CLI arguments into a [`ScaffoldRequest`], run it
//! through the core scaffold service, and display the report.

use tracing::{debug, instrument};

use ddd_adapters::{JinjaRenderer, LocalFilesystem};
use ddd_core::{
    application::{ScaffoldOptions, ScaffoldReport, ScaffoldService, StepOutcome},
    domain::{AppPath, ModelStyle, Name, ScaffoldRequest, ServiceFormat, ViewKind, WriteMode},
};

use crate::{
    cli::{
        DtoArgs, EntityArgs, GlobalArgs, RepositoryArgs, SerializerArgs, ServiceArgs, StyleArgs,
        ViewArgs,
    },
    config::{AppConfig, Defaults},
    error::CliResult,
    output::OutputManager,
};

/// Execute a `create-*` command.
///
/// Dispatch sequence:
/// 1. Resolve the template store (flag, config, env, bundled)
/// 2. Run the request through `ScaffoldService`
/// 3. Print the report (human lines, or JSON)
#[instrument(skip_all, fields(command = request.command_name(), app = %request.app()))]
pub fn execute(
    request: ScaffoldRequest,
    simulate: bool,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let (store, origin) = super::open_store(global, config)?;
    debug!(origin = %super::describe_origin(&origin), "template store resolved");

    let service = ScaffoldService::new(
        store,
        Box::new(JinjaRenderer::new()?),
        Box::new(LocalFilesystem::new()),
    );
    let options = ScaffoldOptions::new(global.project_root()).simulate(simulate);

    let report = service.scaffold(&request, &options)?;
    print_report(&report, output)
}

fn print_report(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    for marker in &report.markers {
        output.print(&format!("  + {}", report.resolve(marker).display()))?;
    }

    for step in &report.steps {
        let path = report.resolve(&step.destination);
        match &step.outcome {
            StepOutcome::Simulated { content } => {
                if step.mode == WriteMode::Create {
                    output.header(&format!(
                        "---Simulating file creation: {}...",
                        path.display()
                    ))?;
                }
                output.print(content)?;
            }
            StepOutcome::Written => {
                output.success(&format!("Written {} ({})", path.display(), step.template))?
            }
            StepOutcome::Appended => {
                output.success(&format!("Appended {} ({})", path.display(), step.template))?
            }
            StepOutcome::Skipped => {
                output.info(&format!("Skipped {} (already exists)", path.display()))?
            }
            StepOutcome::Failed { reason } => output.warning(&format!(
                "Failed {} ({}): {}",
                path.display(),
                step.template,
                reason
            ))?,
        }
    }

    if report.simulate {
        output.info("Simulation only; nothing was written.")?;
    } else {
        output.print(&summary(report))?;
    }
    Ok(())
}

fn summary(report: &ScaffoldReport) -> String {
    let mut line = format!(
        "{}: {} written, {} appended, {} skipped",
        report.command,
        report.count("written"),
        report.count("appended"),
        report.count("skipped"),
    );
    if report.has_failures() {
        line.push_str(&format!(", {} failed", report.count("failed")));
    }
    if !report.markers.is_empty() {
        line.push_str(&format!(", {} package markers", report.markers.len()));
    }
    line
}

// ── argument translation ──────────────────────────────────────────────────────

impl StyleArgs {
    fn resolve(&self, default: ModelStyle) -> ModelStyle {
        if self.pydantic {
            ModelStyle::Pydantic
        } else if self.dataclass {
            ModelStyle::Dataclass
        } else {
            default
        }
    }
}

impl EntityArgs {
    pub fn to_request(&self, defaults: &Defaults) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::Entity {
            app: AppPath::parse(self.app.app_path.as_str()),
            entity: Name::parse("entity", &self.entity)?,
            style: self.style.resolve(defaults.style),
            split: self.split,
        })
    }
}

impl ServiceArgs {
    pub fn to_request(&self) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::Service {
            app: AppPath::parse(self.app.app_path.as_str()),
            service: Name::parse("service", &self.service)?,
            entity: Name::parse("entity", &self.entity)?,
            format: ServiceFormat {
                class_based: self.class_format,
                include_crud: self.include_crud,
            },
            split: self.split,
        })
    }
}

impl RepositoryArgs {
    pub fn to_request(&self, defaults: &Defaults) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::Repository {
            app: AppPath::parse(self.app.app_path.as_str()),
            entity: Name::parse("entity", &self.entity)?,
            style: self.style.resolve(defaults.style),
        })
    }
}

impl DtoArgs {
    pub fn to_request(&self, defaults: &Defaults) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::Dto {
            app: AppPath::parse(self.app.app_path.as_str()),
            dto: Name::parse("DTO", &self.dto)?,
            style: self.style.resolve(defaults.style),
            split: self.split,
        })
    }
}

impl SerializerArgs {
    pub fn to_request(&self) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::Serializer {
            app: AppPath::parse(self.app.app_path.as_str()),
            serializer: Name::parse("serializer", &self.serializer)?,
            split: self.split,
        })
    }
}

impl ViewArgs {
    pub fn to_request(&self, kind: ViewKind) -> CliResult<ScaffoldRequest> {
        Ok(ScaffoldRequest::View {
            app: AppPath::parse(self.app.app_path.as_str()),
            entity: Name::parse("entity", &self.entity)?,
            kind,
        })
    }
}
