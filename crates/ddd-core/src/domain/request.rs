//! Scaffold requests: one variant per `create-*` command.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::app_path::AppPath;
use super::blueprints;
use super::name::Name;
use super::plan::ScaffoldPlan;

/// Model flavour for entities, repositories and DTOs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStyle {
    #[default]
    Dataclass,
    Pydantic,
}

impl ModelStyle {
    /// Suffix used in template file names (`class_dataclass.py`).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Dataclass => "dataclass",
            Self::Pydantic => "pydantic",
        }
    }

    pub fn from_flag(pydantic: bool) -> Self {
        if pydantic {
            Self::Pydantic
        } else {
            Self::Dataclass
        }
    }
}

impl fmt::Display for ModelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for ModelStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dataclass" | "dataclasses" => Ok(Self::Dataclass),
            "pydantic" => Ok(Self::Pydantic),
            other => Err(format!(
                "unknown model style '{}' (expected dataclass or pydantic)",
                other
            )),
        }
    }
}

/// Shape of a generated service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ServiceFormat {
    pub class_based: bool,
    pub include_crud: bool,
}

impl ServiceFormat {
    /// Template file under `service/`.
    pub fn template_file(self) -> &'static str {
        match (self.class_based, self.include_crud) {
            (true, true) => "class_crud.py",
            (true, false) => "class.py",
            (false, true) => "function_crud.py",
            (false, false) => "function.py",
        }
    }
}

/// Which flavour of Django view to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    /// Function views, forms and URL patterns.
    Web,
    /// DRF `APIView` classes and URL patterns.
    ApiView,
    /// DRF `ViewSet` and router.
    ViewSet,
}

/// A fully parsed `create-*` invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum ScaffoldRequest {
    Entity {
        app: AppPath,
        entity: Name,
        style: ModelStyle,
        split: bool,
    },
    Service {
        app: AppPath,
        service: Name,
        entity: Name,
        format: ServiceFormat,
        split: bool,
    },
    Repository {
        app: AppPath,
        entity: Name,
        style: ModelStyle,
    },
    Dto {
        app: AppPath,
        dto: Name,
        style: ModelStyle,
        split: bool,
    },
    Serializer {
        app: AppPath,
        serializer: Name,
        split: bool,
    },
    View {
        app: AppPath,
        entity: Name,
        kind: ViewKind,
    },
}

impl ScaffoldRequest {
    /// CLI subcommand this request corresponds to.
    pub fn command_name(&self) -> &'static str {
        match self {
            Self::Entity { .. } => "create-entity",
            Self::Service { .. } => "create-service",
            Self::Repository { .. } => "create-repository",
            Self::Dto { .. } => "create-dto",
            Self::Serializer { .. } => "create-serializer",
            Self::View { kind, .. } => match kind {
                ViewKind::Web => "create-view",
                ViewKind::ApiView => "create-view-api-apiview",
                ViewKind::ViewSet => "create-view-api-viewset",
            },
        }
    }

    pub fn app(&self) -> &AppPath {
        match self {
            Self::Entity { app, .. }
            | Self::Service { app, .. }
            | Self::Repository { app, .. }
            | Self::Dto { app, .. }
            | Self::Serializer { app, .. }
            | Self::View { app, .. } => app,
        }
    }

    /// Build the plan for this request. Pure; no I/O.
    pub fn plan(&self) -> ScaffoldPlan {
        match self {
            Self::Entity {
                app,
                entity,
                style,
                split,
            } => blueprints::entity(app, entity, *style, *split),
            Self::Service {
                app,
                service,
                entity,
                format,
                split,
            } => blueprints::service(app, service, entity, *format, *split),
            Self::Repository { app, entity, style } => blueprints::repository(app, entity, *style),
            Self::Dto {
                app,
                dto,
                style,
                split,
            } => blueprints::dto(app, dto, *style, *split),
            Self::Serializer {
                app,
                serializer,
                split,
            } => blueprints::serializer(app, serializer, *split),
            Self::View { app, entity, kind } => blueprints::view(app, entity, *kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_format_picks_template() {
        let f = |class_based, include_crud| {
            ServiceFormat {
                class_based,
                include_crud,
            }
            .template_file()
        };
        assert_eq!(f(false, false), "function.py");
        assert_eq!(f(false, true), "function_crud.py");
        assert_eq!(f(true, false), "class.py");
        assert_eq!(f(true, true), "class_crud.py");
    }

    #[test]
    fn model_style_parses_case_insensitively() {
        assert_eq!("Pydantic".parse::<ModelStyle>(), Ok(ModelStyle::Pydantic));
        assert_eq!("dataclass".parse::<ModelStyle>(), Ok(ModelStyle::Dataclass));
        assert!("attrs".parse::<ModelStyle>().is_err());
        assert_eq!(ModelStyle::from_flag(true), ModelStyle::Pydantic);
    }

    #[test]
    fn command_names_match_subcommands() {
        let app = AppPath::parse("apps/shop");
        let entity = Name::parse("entity", "Product").unwrap();
        let view = |kind| ScaffoldRequest::View {
            app: app.clone(),
            entity: entity.clone(),
            kind,
        };

        assert_eq!(view(ViewKind::Web).command_name(), "create-view");
        assert_eq!(
            view(ViewKind::ApiView).command_name(),
            "create-view-api-apiview"
        );
        assert_eq!(
            view(ViewKind::ViewSet).command_name(),
            "create-view-api-viewset"
        );
        assert_eq!(view(ViewKind::Web).app().as_str(), "apps/shop");
    }
}
