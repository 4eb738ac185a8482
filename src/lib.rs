//! testnudge library root.
//! Pure decision logic lives in `core`; `clients` talk to Sheets and Slack;
//! `run()` wires the CLI to both.

pub mod cli;
pub mod clients;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::JobOptions;
use crate::errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config {
            print_config,
            check,
        } => cli::commands::config::handle(config_path, *print_config, *check),
        Commands::Run { dry_run, skip_sync } => cli::commands::run::handle(
            config_path,
            JobOptions {
                dry_run: *dry_run,
                skip_sync: *skip_sync,
            },
        ),
        Commands::Sync => cli::commands::sync::handle(config_path),
        Commands::Check => cli::commands::check::handle(config_path),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    log::debug!("Using configuration file {}", config_path.display());

    dispatch(&cli, &config_path)
}
