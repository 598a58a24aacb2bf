//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ddd",
    bin_name = "ddd",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "DDD boilerplate generator for Django projects",
    long_about = "ddd renders entity, service, repository, DTO, serializer and \
                  view skeletons into a Django app, following a domain / \
                  infrastructure layering.",
    after_help = "EXAMPLES:\n\
        \x20 ddd create-entity apps/shop Product --pydantic\n\
        \x20 ddd create-repository apps/shop Product\n\
        \x20 ddd create-view-api-viewset apps/shop Product --simulate\n\
        \x20 ddd completions bash > /usr/share/bash-completion/completions/ddd",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an entity (with its exceptions, and schemas in pydantic style).
    #[command(
        name = "create-entity",
        about = "Create a domain entity",
        after_help = "EXAMPLES:\n\
            \x20 ddd create-entity apps/shop Product\n\
            \x20 ddd create-entity apps/shop Product --pydantic --split"
    )]
    CreateEntity(EntityArgs),

    /// Create a domain service.
    #[command(
        name = "create-service",
        about = "Create a domain service",
        after_help = "EXAMPLES:\n\
            \x20 ddd create-service apps/shop Pricing Product\n\
            \x20 ddd create-service apps/shop Pricing Product --class-format --include-crud"
    )]
    CreateService(ServiceArgs),

    /// Create a repository with its mappers, exceptions and utils.
    #[command(name = "create-repository", about = "Create an entity repository")]
    CreateRepository(RepositoryArgs),

    /// Create a data transfer object.
    #[command(name = "create-dto", about = "Create a DTO")]
    CreateDto(DtoArgs),

    /// Create a DRF serializer.
    #[command(name = "create-serializer", about = "Create a DRF serializer")]
    CreateSerializer(SerializerArgs),

    /// Create function views, forms and URL patterns.
    #[command(name = "create-view", about = "Create web views, forms and urls")]
    CreateView(ViewArgs),

    /// Create DRF `APIView` classes and URL patterns.
    #[command(
        name = "create-view-api-apiview",
        about = "Create DRF APIView views and urls"
    )]
    CreateViewApiView(ViewArgs),

    /// Create a DRF `ViewSet` and router.
    #[command(
        name = "create-view-api-viewset",
        about = "Create a DRF ViewSet and router"
    )]
    CreateViewViewSet(ViewArgs),

    /// List available templates.
    #[command(
        name = "list-templates",
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 ddd list-templates\n\
            \x20 ddd list-templates --format json\n\
            \x20 ddd --templates ./my-templates list-templates"
    )]
    ListTemplates(ListArgs),

    /// Print the raw source of one template.
    #[command(
        name = "show-template",
        about = "Print a template's source",
        after_help = "EXAMPLES:\n\
            \x20 ddd show-template entity/class_dataclass.py"
    )]
    ShowTemplate(ShowArgs),

    /// Copy the bundled templates to a directory for customisation.
    #[command(
        name = "eject-templates",
        about = "Copy the bundled templates to a directory",
        after_help = "EXAMPLES:\n\
            \x20 ddd eject-templates\n\
            \x20 ddd eject-templates ./ddd-templates --force\n\
            \x20 ddd --templates ./ddd-templates create-entity apps/shop Product"
    )]
    EjectTemplates(EjectArgs),

    /// Initialise a ddd configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ddd init           # user config directory\n\
            \x20 ddd init --local   # ./.ddd.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ddd completions bash > ~/.local/share/bash-completion/completions/ddd\n\
            \x20 ddd completions zsh  > ~/.zfunc/_ddd\n\
            \x20 ddd completions fish > ~/.config/fish/completions/ddd.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the ddd configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ddd config get defaults.style\n\
            \x20 ddd config list\n\
            \x20 ddd config path"
    )]
    Config(ConfigCommands),
}

// ── create-* ──────────────────────────────────────────────────────────────────

/// App path argument shared by every `create-*` command.
#[derive(Debug, Args)]
pub struct AppArg {
    /// Django app path, relative to the project root.
    #[arg(value_name = "APP_PATH", help = "App path, e.g. apps/shop")]
    pub app_path: String,
}

/// Render and print instead of writing.
#[derive(Debug, Args)]
pub struct SimulateArg {
    #[arg(
        long = "simulate",
        help = "Print what would be written without touching the disk"
    )]
    pub simulate: bool,
}

/// Model flavour. Neither flag means the configured default.
#[derive(Debug, Args)]
pub struct StyleArgs {
    #[arg(long = "pydantic", help = "Generate pydantic models")]
    pub pydantic: bool,

    #[arg(
        long = "dataclass",
        conflicts_with = "pydantic",
        help = "Generate dataclasses (overrides a pydantic default)"
    )]
    pub dataclass: bool,
}

/// Arguments for `ddd create-entity`.
#[derive(Debug, Args)]
pub struct EntityArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "ENTITY", help = "Entity class name")]
    pub entity: String,

    #[command(flatten)]
    pub style: StyleArgs,

    #[arg(long = "split", help = "One file per entity under domain/entities/")]
    pub split: bool,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

/// Arguments for `ddd create-service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "SERVICE", help = "Service name")]
    pub service: String,

    #[arg(value_name = "ENTITY", help = "Entity the service works on")]
    pub entity: String,

    #[arg(long = "class-format", help = "Generate a service class")]
    pub class_format: bool,

    #[arg(long = "include-crud", help = "Include CRUD operations")]
    pub include_crud: bool,

    #[arg(long = "split", help = "One file per service under domain/services/")]
    pub split: bool,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

/// Arguments for `ddd create-repository`.
#[derive(Debug, Args)]
pub struct RepositoryArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "ENTITY", help = "Entity the repository stores")]
    pub entity: String,

    #[command(flatten)]
    pub style: StyleArgs,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

/// Arguments for `ddd create-dto`.
#[derive(Debug, Args)]
pub struct DtoArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "DTO", help = "DTO class name")]
    pub dto: String,

    #[command(flatten)]
    pub style: StyleArgs,

    #[arg(long = "split", help = "One file per DTO under domain/dtos/")]
    pub split: bool,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

/// Arguments for `ddd create-serializer`.
#[derive(Debug, Args)]
pub struct SerializerArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "SERIALIZER", help = "Serializer name")]
    pub serializer: String,

    #[arg(long = "split", help = "One file per serializer under serializers/")]
    pub split: bool,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

/// Arguments shared by the three view commands.
#[derive(Debug, Args)]
pub struct ViewArgs {
    #[command(flatten)]
    pub app: AppArg,

    #[arg(value_name = "ENTITY", help = "Entity the views expose")]
    pub entity: String,

    #[command(flatten)]
    pub simulate: SimulateArg,
}

// ── list-templates / show-template / eject-templates ──────────────────────────

/// Arguments for `ddd list-templates`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list-templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped by template directory.
    Table,
    /// One template id per line.
    List,
    /// JSON array.
    Json,
}

/// Arguments for `ddd show-template`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(value_name = "TEMPLATE", help = "Template id, e.g. entity/exceptions.py")]
    pub template: String,
}

/// Arguments for `ddd eject-templates`.
#[derive(Debug, Args)]
pub struct EjectArgs {
    #[arg(
        value_name = "DIR",
        default_value = "ddd-templates",
        help = "Destination directory"
    )]
    pub dir: PathBuf,

    #[arg(short = 'f', long = "force", help = "Overwrite existing template files")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ddd init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.ddd.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ddd completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ddd config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.style`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
