//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `DDD__SECTION__KEY`, e.g. `DDD__DEFAULTS__STYLE`
//! 3. `--config FILE`, or else `./.ddd.toml` over the user config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ddd_core::domain::ModelStyle;

use crate::cli::OutputFormat;

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".ddd.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults for `create-*` commands.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Model style used when neither `--pydantic` nor `--dataclass` is given.
    pub style: ModelStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template directory used when `--templates` is not given.
    pub local_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs (without colour) to this file.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it, the user config file and `./.ddd.toml` are both
    /// optional, the local one winning.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading explicit config file");
                builder = builder.add_source(toml_file(path).required(true));
            }
            None => {
                builder = builder
                    .add_source(toml_file(&Self::config_path()).required(false))
                    .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));
            }
        }

        let config = builder
            .add_source(
                Environment::with_prefix("DDD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.ddd.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ddd", "ddd")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `ddd init` writes to.
    pub fn init_path(local: bool) -> PathBuf {
        if local {
            PathBuf::from(LOCAL_CONFIG_FILE)
        } else {
            Self::config_path()
        }
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
