//! One module per subcommand. Handlers translate parsed arguments into core
//! calls and print the results; no business logic lives here.

pub mod completions;
pub mod config;
pub mod create;
pub mod eject;
pub mod init;
pub mod list;

use ddd_adapters::{StoreOrigin, resolve_store};
use ddd_core::application::ports::TemplateStore;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult};

/// Open the template store for this invocation.
///
/// `--templates` beats `templates.local_path`; without either the adapters
/// fall back to `$DDD_TEMPLATES_DIR` and then the bundled library.
pub fn open_store(
    global: &GlobalArgs,
    config: &AppConfig,
) -> CliResult<(Box<dyn TemplateStore>, StoreOrigin)> {
    let explicit = global
        .templates
        .as_deref()
        .or(config.templates.local_path.as_deref());
    Ok(resolve_store(explicit)?)
}

/// One-line description of a store origin.
pub fn describe_origin(origin: &StoreOrigin) -> String {
    match origin {
        StoreOrigin::Explicit(path) => format!("templates from {}", path.display()),
        StoreOrigin::Environment(path) => {
            format!("templates from {} ($DDD_TEMPLATES_DIR)", path.display())
        }
        StoreOrigin::Builtin => "bundled templates".to_string(),
    }
}
