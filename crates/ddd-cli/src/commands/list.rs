//! Implementation of `ddd list-templates` and `ddd show-template`.

use ddd_core::{application::TemplateService, domain::TemplateRef};

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat, ShowArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let (store, origin) = super::open_store(global, config)?;
    let service = TemplateService::new(store);

    // `--output-format json` implies the JSON listing.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!(
                "Available Templates ({}):",
                super::describe_origin(&origin)
            ))?;
            for (template_name, files) in service.grouped()? {
                output.print(&format!("  {:<12} {}", template_name, files.join(", ")))?;
            }
        }
        ListFormat::List => {
            for t in service.list()? {
                output.print(&t.id)?;
            }
        }
        ListFormat::Json => {
            output.json(&service.list()?)?;
        }
    }

    Ok(())
}

/// Print the raw source of a single template.
pub fn show(
    args: ShowArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let template = TemplateRef::parse(&args.template).ok_or_else(|| CliError::InvalidInput {
        message: format!(
            "'{}' is not a template id; expected <dir>/<file>, e.g. entity/exceptions.py",
            args.template
        ),
    })?;

    let (store, _) = super::open_store(global, config)?;
    let source = TemplateService::new(store).source(&template)?;
    output.print(&source)?;
    Ok(())
}
