use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for testnudge
#[derive(Parser)]
#[command(
    name = "testnudge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remind channel members who have not submitted a test result in the past week",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(global = true, long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration template
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or validate the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration (secrets masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or malformed fields")]
        check: bool,
    },

    /// Sync the roster, find untested people and send the reminder
    Run {
        #[arg(long = "dry-run", help = "Print the reminder instead of sending it")]
        dry_run: bool,

        #[arg(long = "skip-sync", help = "Do not rewrite the names column of the sheet")]
        skip_sync: bool,
    },

    /// Only write the channel member names into the sheet
    Sync,

    /// List the people who have not submitted within the window
    Check,
}
