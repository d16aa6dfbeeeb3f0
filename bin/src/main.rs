//! retenza CLI - Event-log retention storage estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use retenza_lib::prelude::ReportFormat;

#[derive(Parser)]
#[command(name = "retenza")]
#[command(about = "Estimate event-log retention storage needs from a log sample", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Report format selector for the CLI.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Project retention storage needs from a log snapshot
    Estimate {
        /// Event category to include in the filtered projection (repeatable)
        #[arg(short, long = "category", required = true)]
        categories: Vec<String>,

        /// Retention period in days
        #[arg(short, long)]
        days: i64,

        /// Path to the log snapshot exported from a collector
        #[arg(short, long)]
        input: PathBuf,

        /// Host the snapshot was taken from
        #[arg(long, default_value = "localhost")]
        host: String,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,
    },

    /// Show snapshot statistics without projecting
    Inspect {
        /// Path to the log snapshot exported from a collector
        #[arg(short, long)]
        input: PathBuf,

        /// Host the snapshot was taken from
        #[arg(long, default_value = "localhost")]
        host: String,
    },
}

/// Maps the CLI verbosity flags onto a tracing env-filter.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Estimate {
            categories,
            days,
            input,
            host,
            output,
            format,
        } => commands::estimate::estimate(
            &categories,
            days,
            &input,
            &host,
            output.as_deref(),
            format.into(),
        ),
        Commands::Inspect { input, host } => commands::inspect::inspect(&input, &host),
    }
}
