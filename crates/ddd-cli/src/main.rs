//! # ddd CLI
//!
//! DDD boilerplate generator for Django projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Load configuration (defaults + file + env).
//! 3. Initialise the tracing subscriber (logging, optional log file).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success                                   |
//! |  1   | Internal / system error                   |
//! |  2   | User / input error, target already exists |
//! |  3   | Resource (template) not found             |
//! |  4   | Configuration error                       |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use ddd_core::domain::ViewKind;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including config (DDD__* variables).
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version also arrive here and exit 0.
            let _ = e.print();
            return ExitCode::from(e.exit_code().clamp(0, 255) as u8);
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    let loaded = AppConfig::load(cli.global.config.as_ref());

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    let log_file = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.logging.file.clone());
    let _log_guard = match init_logging(&cli.global, log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e:#}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                cli.global.verbose > 0,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("ddd completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    use commands::create;

    let global = &cli.global;
    let defaults = &config.defaults;

    match cli.command {
        Commands::CreateEntity(args) => create::execute(
            args.to_request(defaults)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateService(args) => create::execute(
            args.to_request()?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateRepository(args) => create::execute(
            args.to_request(defaults)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateDto(args) => create::execute(
            args.to_request(defaults)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateSerializer(args) => create::execute(
            args.to_request()?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateView(args) => create::execute(
            args.to_request(ViewKind::Web)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateViewApiView(args) => create::execute(
            args.to_request(ViewKind::ApiView)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::CreateViewViewSet(args) => create::execute(
            args.to_request(ViewKind::ViewSet)?,
            args.simulate.simulate,
            global,
            config,
            output,
        ),
        Commands::ListTemplates(args) => commands::list::execute(args, global, config, output),
        Commands::ShowTemplate(args) => commands::list::show(args, global, config, output),
        Commands::EjectTemplates(args) => commands::eject::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Written to stderr so the message appears even when stdout is
    // redirected; colour only when stderr is a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }

    #[test]
    fn every_create_command_is_registered() {
        let cmd = Cli::command();
        for name in [
            "create-entity",
            "create-service",
            "create-repository",
            "create-dto",
            "create-serializer",
            "create-view",
            "create-view-api-apiview",
            "create-view-api-viewset",
        ] {
            assert!(cmd.find_subcommand(name).is_some(), "missing {name}");
        }
    }
}
