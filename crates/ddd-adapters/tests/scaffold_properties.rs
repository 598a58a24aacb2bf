//! Cross-command properties of the scaffold workflow, checked through the
//! public API only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ddd_adapters::MemoryFilesystem;
use ddd_core::prelude::*;

fn snapshot(fs: &MemoryFilesystem) -> BTreeMap<PathBuf, String> {
    fs.list_files()
        .into_iter()
        .filter_map(|p| fs.read_file(&p).map(|c| (p, c)))
        .collect()
}

struct IdStore;

impl TemplateStore for IdStore {
    fn load(&self, template: &TemplateRef) -> ScaffoldResult<String> {
        Ok(template.id())
    }

    fn list(&self) -> ScaffoldResult<Vec<TemplateRef>> {
        Ok(Vec::new())
    }

    fn describe(&self) -> String {
        "ids".into()
    }
}

struct Echo;

impl TemplateRenderer for Echo {
    fn render(
        &self,
        _template: &TemplateRef,
        source: &str,
        _params: &RenderParams,
    ) -> ScaffoldResult<String> {
        Ok(source.to_string())
    }
}

fn service(fs: &MemoryFilesystem) -> ScaffoldService {
    ScaffoldService::new(Box::new(IdStore), Box::new(Echo), Box::new(fs.clone()))
}

fn all_requests() -> Vec<ScaffoldRequest> {
    let app = AppPath::parse("apps/manager/app1");
    let name = |raw| Name::parse("test", raw).unwrap();
    let mut requests = Vec::new();

    for split in [false, true] {
        for style in [ModelStyle::Dataclass, ModelStyle::Pydantic] {
            requests.push(ScaffoldRequest::Entity {
                app: app.clone(),
                entity: name("Product"),
                style,
                split,
            });
            requests.push(ScaffoldRequest::Dto {
                app: app.clone(),
                dto: name("ProductInput"),
                style,
                split,
            });
        }
        requests.push(ScaffoldRequest::Service {
            app: app.clone(),
            service: name("Catalog"),
            entity: name("Product"),
            format: ServiceFormat {
                class_based: split,
                include_crud: !split,
            },
            split,
        });
        requests.push(ScaffoldRequest::Serializer {
            app: app.clone(),
            serializer: name("Product"),
            split,
        });
    }

    for style in [ModelStyle::Dataclass, ModelStyle::Pydantic] {
        requests.push(ScaffoldRequest::Repository {
            app: app.clone(),
            entity: name("Product"),
            style,
        });
    }

    for kind in [ViewKind::Web, ViewKind::ApiView, ViewKind::ViewSet] {
        requests.push(ScaffoldRequest::View {
            app: app.clone(),
            entity: name("Product"),
            kind,
        });
    }

    requests
}

#[test]
fn simulate_never_writes_for_any_command() {
    let fs = MemoryFilesystem::new();
    let svc = service(&fs);
    let options = ScaffoldOptions::new("/proj").simulate(true);

    for request in all_requests() {
        let report = svc.scaffold(&request, &options).unwrap();
        assert!(
            report
                .steps
                .iter()
                .all(|s| matches!(s.outcome, StepOutcome::Simulated { .. })),
            "{} did not simulate every step",
            request.command_name()
        );
    }

    assert!(fs.list_files().is_empty());
    assert!(!fs.exists(Path::new("/proj")));
}

#[test]
fn marker_chain_is_complete_after_every_command() {
    for request in all_requests() {
        let fs = MemoryFilesystem::new();
        let report = service(&fs)
            .scaffold(&request, &ScaffoldOptions::new("/proj"))
            .unwrap();

        for file in report.touched_files() {
            let mut dir = file.parent();
            while let Some(d) = dir.filter(|d| d.file_name().is_some()) {
                assert!(
                    fs.read_file(&Path::new("/proj").join(d).join("__init__.py"))
                        .is_some(),
                    "{}: missing marker in {}",
                    request.command_name(),
                    d.display()
                );
                dir = d.parent();
            }
        }
    }
}

#[test]
fn rerunning_never_loses_existing_content() {
    for request in all_requests() {
        let fs = MemoryFilesystem::new();
        let svc = service(&fs);
        let options = ScaffoldOptions::new("/proj");

        svc.scaffold(&request, &options).unwrap();
        let before = snapshot(&fs);

        // guarded commands refuse; the rest append or skip
        match svc.scaffold(&request, &options) {
            Ok(_) => {}
            Err(e) => assert!(e.is_target_exists(), "{}: {e}", request.command_name()),
        }

        let after = snapshot(&fs);
        for (path, old) in &before {
            let new = &after[path];
            assert!(
                new.starts_with(old.as_str()),
                "{}: {} was overwritten",
                request.command_name(),
                path.display()
            );
        }
    }
}
