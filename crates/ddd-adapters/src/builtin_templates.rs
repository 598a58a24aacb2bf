//! Template store discovery.
//!
//! This module provides [`resolve_store`], the single entry-point for picking
//! the template library a command renders from. It abstracts over the
//! discovery strategy so callers do not need to know where templates live.
//!
//! # Resolution order
//!
//! 1. **Explicit directory**: `--templates DIR` or `templates.local_path` in
//!    the config file. It must exist; a typo is an error rather than a silent
//!    fallback.
//! 2. **`$DDD_TEMPLATES_DIR`**: environment override. Skipped with a warning
//!    when the directory does not exist or holds no templates.
//! 3. **Built-in library**: compiled into the binary, always available.
//!
//! `./templates` is deliberately not probed: in a Django project that
//! directory holds HTML templates.
//!
//! # Environment variable
//!
//! ```env
//! DDD_TEMPLATES_DIR=./my-ddd-templates
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use ddd_core::{
    application::ports::TemplateStore,
    error::{ScaffoldError, ScaffoldResult},
};

use crate::template_store::{DirectoryStore, EmbeddedStore};

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "DDD_TEMPLATES_DIR";

/// Where the active store came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOrigin {
    Explicit(PathBuf),
    Environment(PathBuf),
    Builtin,
}

/// Pick the store to render from. See the module docs for the order.
#[instrument]
pub fn resolve_store(
    explicit: Option<&Path>,
) -> ScaffoldResult<(Box<dyn TemplateStore>, StoreOrigin)> {
    let env_dir = std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from);
    resolve_store_from(explicit, env_dir.as_deref())
}

/// [`resolve_store`] with the environment lookup already done.
pub fn resolve_store_from(
    explicit: Option<&Path>,
    env_dir: Option<&Path>,
) -> ScaffoldResult<(Box<dyn TemplateStore>, StoreOrigin)> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            return Err(ScaffoldError::Configuration {
                message: format!("templates directory '{}' does not exist", dir.display()),
            });
        }
        info!(path = %dir.display(), "using explicit templates directory");
        return Ok((
            Box::new(DirectoryStore::new(dir)),
            StoreOrigin::Explicit(dir.to_path_buf()),
        ));
    }

    if let Some(dir) = env_dir {
        debug!(path = %dir.display(), "candidate from ${}", TEMPLATES_DIR_ENV);
        let store = DirectoryStore::new(dir);

        if dir.is_dir() && !store.list()?.is_empty() {
            info!(path = %dir.display(), "using templates from environment");
            return Ok((Box::new(store), StoreOrigin::Environment(dir.to_path_buf())));
        }
        warn!(
            path = %dir.display(),
            "${} has no templates, falling back to the built-in library",
            TEMPLATES_DIR_ENV
        );
    }

    debug!("using built-in template library");
    Ok((Box::new(EmbeddedStore::new()), StoreOrigin::Builtin))
}
