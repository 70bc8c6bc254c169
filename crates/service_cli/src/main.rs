//! pathsim CLI - Monte Carlo paths and their statistics
//!
//! Operational entry point for the pathsim workspace.
//!
//! # Commands
//!
//! - `pathsim simulate` - Run a simulation and summarise terminal values
//! - `pathsim stats` - Per-step mean, median and percentile band
//! - `pathsim paths` - Export the first paths in long format
//! - `pathsim check` - Print and validate the effective settings
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires settings from the
//! Infra layer into the simulation crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use infra_config::Settings;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::RunArgs;

/// GBM Monte Carlo path simulator
#[derive(Parser)]
#[command(name = "pathsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path, layered over config/ and under PATHSIM__* variables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and summarise the terminal values
    Simulate {
        #[command(flatten)]
        args: RunArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compute per-step mean, median and percentile band
    Stats {
        #[command(flatten)]
        args: RunArgs,

        /// Output format (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Print every k-th step in table output
        #[arg(short, long, default_value = "1")]
        every: usize,
    },

    /// Export the first paths in long format
    Paths {
        #[command(flatten)]
        args: RunArgs,

        /// Number of paths to export
        #[arg(long, default_value = "10")]
        n_plot: usize,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check system configuration
    Check {
        #[command(flatten)]
        args: RunArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let settings = Settings::load_from(cli.config.as_deref())?;
    init_thread_pool(settings.engine.thread_pool_size);

    match cli.command {
        Commands::Simulate { args, format } => {
            commands::simulate::run(&args.resolve(&settings)?, &format)
        }
        Commands::Stats {
            args,
            format,
            every,
        } => commands::stats::run(&args.resolve(&settings)?, &format, every),
        Commands::Paths {
            args,
            n_plot,
            format,
            output,
        } => commands::paths::run(
            &args.resolve(&settings)?,
            n_plot,
            &format,
            output.as_deref(),
        ),
        Commands::Check { args } => commands::check::run(&args.resolve(&settings)?),
    }
}

fn init_thread_pool(num_threads: usize) {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => info!("Rayon pool: {} threads", num_threads),
        Err(err) => warn!("Rayon pool already initialised: {}", err),
    }
}
