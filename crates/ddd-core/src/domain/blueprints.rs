//! Plan builders for every `create-*` command.
//!
//! Each builder lays out destinations below the app directory, the guards
//! that stop a command early, and the ordered write steps. Nothing here
//! touches the filesystem.

use std::path::PathBuf;

use super::app_path::AppPath;
use super::name::Name;
use super::plan::{Guard, ScaffoldPlan, WriteStep};
use super::request::{ModelStyle, ServiceFormat, ViewKind};
use super::template_ref::TemplateRef;

fn tpl(template_name: &str, file_name: impl Into<String>) -> TemplateRef {
    TemplateRef::new(template_name, file_name)
}

/// Shared file, or a per-name file in a subdirectory when `split`.
fn layout(shared_dir: PathBuf, shared_file: &str, split: Option<(&str, String)>) -> PathBuf {
    match split {
        Some((subdir, file)) => shared_dir.join(subdir).join(file),
        None => shared_dir.join(shared_file),
    }
}

/// `create-entity`: imports + class into the entities module, plus the
/// entity's exception family and, for pydantic, shared schemas.
pub fn entity(app: &AppPath, entity: &Name, style: ModelStyle, split: bool) -> ScaffoldPlan {
    let domain = app.join("domain");
    let file = layout(
        domain.clone(),
        "entities.py",
        split.then(|| ("entities", format!("{}_entity.py", entity.lower()))),
    );
    let params = app
        .render_params()
        .with("entity_name", entity.as_str())
        .with("split", split);

    let mut plan = ScaffoldPlan::new("create-entity");
    if split {
        plan = plan.guard(Guard::exists(&file));
    }

    plan = plan
        .step(WriteStep::create(
            tpl("entity", format!("imports_{}.py", style)),
            params.clone(),
            &file,
        ))
        .step(WriteStep::append(
            tpl("entity", format!("class_{}.py", style)),
            params.clone(),
            &file,
        ))
        .step(WriteStep::append(
            tpl("entity", "exceptions.py"),
            params.clone(),
            domain.join("exceptions.py"),
        ));

    if style == ModelStyle::Pydantic {
        plan = plan.step(WriteStep::create(
            tpl("entity", "schemas_pydantic.py"),
            params,
            domain.join("schemas.py"),
        ));
    }

    plan
}

/// `create-service`: imports + one of four service shapes.
pub fn service(
    app: &AppPath,
    service: &Name,
    entity: &Name,
    format: ServiceFormat,
    split: bool,
) -> ScaffoldPlan {
    let file = layout(
        app.join("domain"),
        "services.py",
        split.then(|| ("services", format!("{}_service.py", service.lower()))),
    );
    let params = app
        .render_params()
        .with("service_name", service.as_str())
        .with("entity_name", entity.as_str());

    let mut plan = ScaffoldPlan::new("create-service");
    if split {
        plan = plan.guard(Guard::exists(&file));
    }

    plan.step(WriteStep::create(
        tpl("service", "imports.py"),
        params.clone(),
        &file,
    ))
    .step(WriteStep::append(
        tpl("service", format.template_file()),
        params,
        &file,
    ))
}

/// `create-repository`: infrastructure support files (best effort), then
/// the repository class itself.
pub fn repository(app: &AppPath, entity: &Name, style: ModelStyle) -> ScaffoldPlan {
    let infrastructure = app.join("infrastructure");
    let utils = app.join("utils");
    let repository_file = infrastructure.join(format!("{}_repository.py", entity.lower()));
    let params = app.render_params().with("entity_name", entity.as_str());

    let mut plan = ScaffoldPlan::new("create-repository")
        .guard(Guard::exists(&repository_file))
        .step(
            WriteStep::create(
                tpl("repository", format!("mappers_{}.py", style)),
                params.clone(),
                infrastructure.join("mappers.py"),
            )
            .best_effort(),
        )
        .step(
            WriteStep::create(
                tpl("repository", "exceptions.py"),
                params.clone(),
                infrastructure.join("exceptions.py"),
            )
            .best_effort(),
        );

    for helper in ["filter_dict.py", "is_integer.py", "is_uuid.py"] {
        plan = plan.step(
            WriteStep::create(tpl("utils", helper), params.clone(), utils.join(helper))
                .best_effort(),
        );
    }

    plan.step(WriteStep::create(
        tpl("repository", "class.py"),
        params,
        repository_file,
    ))
}

/// `create-dto`: imports + DTO class.
pub fn dto(app: &AppPath, dto: &Name, style: ModelStyle, split: bool) -> ScaffoldPlan {
    let file = layout(
        app.join("domain"),
        "dtos.py",
        split.then(|| ("dtos", format!("{}_dto.py", dto.lower()))),
    );
    let params = app.render_params().with("dto_name", dto.as_str());

    let mut plan = ScaffoldPlan::new("create-dto");
    if split {
        plan = plan.guard(Guard::exists(&file));
    }

    plan.step(WriteStep::create(
        tpl("dto", format!("imports_{}.py", style)),
        params.clone(),
        &file,
    ))
    .step(WriteStep::append(
        tpl("dto", format!("class_{}.py", style)),
        params,
        &file,
    ))
}

/// `create-serializer`: imports + serializer class, at the app root.
pub fn serializer(app: &AppPath, serializer: &Name, split: bool) -> ScaffoldPlan {
    let file = layout(
        app.dir().to_path_buf(),
        "serializers.py",
        split.then(|| ("serializers", format!("{}_serializer.py", serializer.lower()))),
    );
    let params = app
        .render_params()
        .with("serializer_name", serializer.as_str());

    let mut plan = ScaffoldPlan::new("create-serializer");
    if split {
        plan = plan.guard(Guard::exists(&file));
    }

    plan.step(WriteStep::create(
        tpl("serializer", "imports.py"),
        params.clone(),
        &file,
    ))
    .step(WriteStep::append(tpl("serializer", "class.py"), params, &file))
}

/// `create-view*`: views (and forms for web views) plus URL patterns, at
/// the app root. Refuses to touch an existing views or forms module.
pub fn view(app: &AppPath, entity: &Name, kind: ViewKind) -> ScaffoldPlan {
    let lower = entity.lower();
    let views = app.join(format!("{}_views.py", lower));
    let urls = app.join(format!("{}_urls.py", lower));
    let params = app.render_params().with("entity_name", entity.as_str());

    let (command, views_template, urls_template) = match kind {
        ViewKind::Web => ("create-view", tpl("view", "web_views.py"), "web_urls.py"),
        ViewKind::ApiView => (
            "create-view-api-apiview",
            tpl("api", "apiview_views.py"),
            "api_apiview_urls.py",
        ),
        ViewKind::ViewSet => (
            "create-view-api-viewset",
            tpl("api", "viewset_views.py"),
            "api_viewset_urls.py",
        ),
    };

    let mut plan = ScaffoldPlan::new(command)
        .guard(Guard::exists(&views))
        .step(WriteStep::create(views_template, params.clone(), &views));

    if kind == ViewKind::Web {
        let forms = app.join(format!("{}_forms.py", lower));
        plan = plan.guard(Guard::exists(&forms)).step(WriteStep::create(
            tpl("view", "web_forms.py"),
            params.clone(),
            forms,
        ));
    }

    plan.step(WriteStep::create(tpl("routers", urls_template), params, urls))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::domain::plan::WriteMode;
    use crate::domain::template_ref::ParamValue;

    fn app() -> AppPath {
        AppPath::parse("apps/shop")
    }

    fn name(raw: &str) -> Name {
        Name::parse("test", raw).unwrap()
    }

    fn ids(plan: &ScaffoldPlan) -> Vec<String> {
        plan.steps.iter().map(|s| s.template.id()).collect()
    }

    fn dests(plan: &ScaffoldPlan) -> Vec<&Path> {
        plan.steps.iter().map(|s| s.destination.as_path()).collect()
    }

    #[test]
    fn entity_shared_dataclass() {
        let plan = entity(&app(), &name("Product"), ModelStyle::Dataclass, false);

        assert!(plan.guards.is_empty());
        assert_eq!(
            ids(&plan),
            [
                "entity/imports_dataclass.py",
                "entity/class_dataclass.py",
                "entity/exceptions.py"
            ]
        );
        assert_eq!(
            dests(&plan),
            [
                Path::new("apps/shop/domain/entities.py"),
                Path::new("apps/shop/domain/entities.py"),
                Path::new("apps/shop/domain/exceptions.py"),
            ]
        );
        assert_eq!(plan.steps[0].mode, WriteMode::Create);
        assert_eq!(plan.steps[1].mode, WriteMode::Append);
        assert!(plan.steps.iter().all(|s| s.fail_if_error));
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn entity_split_pydantic_guards_and_adds_schemas() {
        let plan = entity(&app(), &name("Product"), ModelStyle::Pydantic, true);
        let file = Path::new("apps/shop/domain/entities/product_entity.py");

        assert_eq!(plan.guards, [Guard::exists(file)]);
        assert_eq!(plan.steps[0].destination, file);
        assert_eq!(
            ids(&plan).last().map(String::as_str),
            Some("entity/schemas_pydantic.py")
        );
        assert_eq!(
            plan.steps.last().map(|s| s.destination.as_path()),
            Some(Path::new("apps/shop/domain/schemas.py"))
        );
        assert_eq!(
            plan.steps[0].params.get("split"),
            Some(&ParamValue::Bool(true))
        );
    }

    #[test]
    fn entity_params_include_app_forms() {
        let plan = entity(
            &AppPath::parse("apps/manager/app1"),
            &name("Order"),
            ModelStyle::Dataclass,
            false,
        );
        let params = &plan.steps[1].params;

        assert_eq!(params.get_str("entity_name"), Some("Order"));
        assert_eq!(params.get_str("app_name"), Some("apps.manager.app1"));
        assert_eq!(params.get_str("last_app_name"), Some("app1"));
    }

    #[test]
    fn service_formats_and_split() {
        let format = ServiceFormat {
            class_based: true,
            include_crud: true,
        };
        let plan = service(&app(), &name("Billing"), &name("Invoice"), format, true);

        assert_eq!(ids(&plan), ["service/imports.py", "service/class_crud.py"]);
        assert_eq!(
            plan.guards,
            [Guard::exists("apps/shop/domain/services/billing_service.py")]
        );
        assert_eq!(plan.steps[1].params.get_str("service_name"), Some("Billing"));
        assert_eq!(plan.steps[1].params.get_str("entity_name"), Some("Invoice"));

        let shared = service(
            &app(),
            &name("Billing"),
            &name("Invoice"),
            ServiceFormat::default(),
            false,
        );
        assert!(shared.guards.is_empty());
        assert_eq!(ids(&shared)[1], "service/function.py");
        assert_eq!(
            shared.steps[0].destination,
            Path::new("apps/shop/domain/services.py")
        );
    }

    #[test]
    fn repository_support_files_are_best_effort() {
        let plan = repository(&app(), &name("Product"), ModelStyle::Pydantic);

        assert_eq!(
            plan.guards,
            [Guard::exists(
                "apps/shop/infrastructure/product_repository.py"
            )]
        );
        assert_eq!(
            ids(&plan),
            [
                "repository/mappers_pydantic.py",
                "repository/exceptions.py",
                "utils/filter_dict.py",
                "utils/is_integer.py",
                "utils/is_uuid.py",
                "repository/class.py",
            ]
        );

        let (last, support) = plan.steps.split_last().unwrap();
        assert!(support.iter().all(|s| !s.fail_if_error));
        assert!(last.fail_if_error);
        assert!(plan.steps.iter().all(|s| s.mode == WriteMode::Create));
        assert_eq!(
            plan.directories(),
            [
                PathBuf::from("apps/shop/infrastructure"),
                PathBuf::from("apps/shop/utils")
            ]
        );
    }

    #[test]
    fn dto_layouts() {
        let shared = dto(&app(), &name("ProductInput"), ModelStyle::Dataclass, false);
        assert_eq!(shared.steps[0].destination, Path::new("apps/shop/domain/dtos.py"));
        assert_eq!(ids(&shared), ["dto/imports_dataclass.py", "dto/class_dataclass.py"]);

        let split = dto(&app(), &name("ProductInput"), ModelStyle::Pydantic, true);
        assert_eq!(
            split.steps[0].destination,
            Path::new("apps/shop/domain/dtos/productinput_dto.py")
        );
        assert_eq!(split.steps[1].params.get_str("dto_name"), Some("ProductInput"));
    }

    #[test]
    fn serializer_lives_at_app_root() {
        let shared = serializer(&app(), &name("Product"), false);
        assert_eq!(shared.steps[0].destination, Path::new("apps/shop/serializers.py"));

        let split = serializer(&app(), &name("Product"), true);
        assert_eq!(
            split.steps[1].destination,
            Path::new("apps/shop/serializers/product_serializer.py")
        );
        assert_eq!(split.guards.len(), 1);
    }

    #[test]
    fn web_view_guards_views_and_forms() {
        let plan = view(&app(), &name("Product"), ViewKind::Web);

        assert_eq!(plan.command, "create-view");
        assert_eq!(
            plan.guards,
            [
                Guard::exists("apps/shop/product_views.py"),
                Guard::exists("apps/shop/product_forms.py"),
            ]
        );
        assert_eq!(
            ids(&plan),
            ["view/web_views.py", "view/web_forms.py", "routers/web_urls.py"]
        );
        assert_eq!(
            plan.steps[2].destination,
            Path::new("apps/shop/product_urls.py")
        );
    }

    #[test]
    fn api_views_pick_their_templates() {
        let apiview = view(&app(), &name("Product"), ViewKind::ApiView);
        assert_eq!(
            ids(&apiview),
            ["api/apiview_views.py", "routers/api_apiview_urls.py"]
        );
        assert_eq!(apiview.guards.len(), 1);

        let viewset = view(&app(), &name("Product"), ViewKind::ViewSet);
        assert_eq!(
            ids(&viewset),
            ["api/viewset_views.py", "routers/api_viewset_urls.py"]
        );
        assert_eq!(viewset.command, "create-view-api-viewset");
    }

    #[test]
    fn every_plan_validates() {
        let a = app();
        let n = name("Product");
        let plans = [
            entity(&a, &n, ModelStyle::Pydantic, true),
            service(&a, &n, &n, ServiceFormat::default(), true),
            repository(&a, &n, ModelStyle::Dataclass),
            dto(&a, &n, ModelStyle::Pydantic, true),
            serializer(&a, &n, true),
            view(&a, &n, ViewKind::Web),
            view(&a, &n, ViewKind::ApiView),
            view(&a, &n, ViewKind::ViewSet),
        ];

        for plan in plans {
            assert!(plan.validate().is_ok(), "{} should validate", plan.command);
        }
    }
}
