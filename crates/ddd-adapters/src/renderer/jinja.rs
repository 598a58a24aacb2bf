//! Jinja-style renderer using `minijinja` with `[% %]` / `[[ ]]` delimiters.

use minijinja::{Environment, syntax::SyntaxConfig};
use tracing::trace;

use ddd_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{Delimiters, RenderParams, TemplateRef},
    error::{ScaffoldError, ScaffoldResult},
};

/// Renders template sources with the library's custom delimiters.
///
/// Python-style string methods (`name.lower()`, `name.capitalize()`) are
/// available through `minijinja-contrib`'s pycompat layer, plus two filters:
///
/// - `capitalize_first`: uppercase the first character, keep the rest
/// - `decapitalize_first`: lowercase the first character, keep the rest
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    pub fn new() -> ScaffoldResult<Self> {
        Self::with_delimiters(Delimiters::default())
    }

    pub fn with_delimiters(delimiters: Delimiters) -> ScaffoldResult<Self> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters(delimiters.block_start, delimiters.block_end)
            .variable_delimiters(delimiters.variable_start, delimiters.variable_end)
            .comment_delimiters(delimiters.comment_start, delimiters.comment_end)
            .build()
            .map_err(|e| ScaffoldError::Configuration {
                message: format!("invalid template delimiters: {}", e),
            })?;

        let mut env = Environment::new();
        env.set_syntax(syntax);
        env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        env.add_filter("capitalize_first", capitalize_first);
        env.add_filter("decapitalize_first", decapitalize_first);

        Ok(Self { env })
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn render(
        &self,
        template: &TemplateRef,
        source: &str,
        params: &RenderParams,
    ) -> ScaffoldResult<String> {
        let name = template.id();
        trace!(template = %name, params = params.len(), "rendering");

        self.env
            .render_named_str(&name, source, params)
            .map_err(|e| {
                ApplicationError::RenderingFailed {
                    template: name.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

fn capitalize_first(value: String) -> String {
    map_first(&value, |c| c.to_uppercase().collect())
}

fn decapitalize_first(value: String) -> String {
    map_first(&value, |c| c.to_lowercase().collect())
}

fn map_first(value: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, params: &RenderParams) -> ScaffoldResult<String> {
        JinjaRenderer::new()
            .unwrap()
            .render(&TemplateRef::new("test", "t.py"), source, params)
    }

    fn entity(name: &str) -> RenderParams {
        RenderParams::new().with("entity_name", name)
    }

    #[test]
    fn substitutes_square_bracket_variables() {
        let out = render("class [[ entity_name ]]Entity:", &entity("Product")).unwrap();
        assert_eq!(out, "class ProductEntity:");
    }

    #[test]
    fn python_string_methods_work() {
        let out = render(
            "[[ entity_name.lower() ]] [[ entity_name.capitalize() ]] [[ entity_name.upper() ]]",
            &entity("product"),
        )
        .unwrap();
        assert_eq!(out, "product Product PRODUCT");
    }

    #[test]
    fn first_letter_filters_keep_the_rest() {
        let out = render(
            "[[ entity_name|capitalize_first ]]/[[ entity_name|decapitalize_first ]]",
            &entity("orderLine"),
        )
        .unwrap();
        assert_eq!(out, "OrderLine/orderLine");

        assert_eq!(capitalize_first(String::new()), "");
        assert_eq!(decapitalize_first("ÉCOLE".into()), "éCOLE");
    }

    #[test]
    fn square_bracket_blocks_work() {
        let source = "from [% if split %]..[% else %].[% endif %]exceptions import *";

        let split = render(source, &RenderParams::new().with("split", true)).unwrap();
        let shared = render(source, &RenderParams::new().with("split", false)).unwrap();

        assert_eq!(split, "from ..exceptions import *");
        assert_eq!(shared, "from .exceptions import *");
    }

    #[test]
    fn django_syntax_passes_through() {
        let source = "{% extends 'base.html' %}{{ form.as_p }} [[ entity_name ]]";
        let out = render(source, &entity("Product")).unwrap();
        assert_eq!(out, "{% extends 'base.html' %}{{ form.as_p }} Product");
    }

    #[test]
    fn single_trailing_newline_is_dropped() {
        let out = render("x = 1\n", &RenderParams::new()).unwrap();
        assert_eq!(out, "x = 1");
    }

    #[test]
    fn syntax_errors_name_the_template() {
        let err = render("[% if %]", &RenderParams::new()).unwrap_err();

        assert!(matches!(
            &err,
            ScaffoldError::Application(ApplicationError::RenderingFailed { template, .. })
                if template == "test/t.py"
        ));
    }
}
