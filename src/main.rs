//! Timeline Metrics CLI
//!
//! Aggregates trace-event snapshots into benchmark scalar records.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use timeline_metrics::commands::{
    display_presets, display_version, execute_run, validate_args, validate_results_file,
    validate_snapshot_file, RunArgs,
};
use timeline_metrics::utils::config::FilterSpec;

/// Timeline Metrics - trace-event aggregation for benchmarks
#[derive(Parser, Debug)]
#[command(name = "timeline-metrics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a snapshot into scalar records
    Run {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Output path for result JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML filter file
        #[arg(short, long)]
        filter: Option<PathBuf>,

        /// Built-in filter preset (see `presets`)
        #[arg(long, env = "TIMELINE_METRICS_PRESET")]
        preset: Option<String>,

        /// Regex searched in thread names ('/' replaced by '_')
        #[arg(long)]
        thread_pattern: Option<String>,

        /// Regex searched in event names ('.' replaced by '_')
        #[arg(long)]
        event_pattern: Option<String>,

        /// Regex searched in counter names
        #[arg(long)]
        counter_pattern: Option<String>,

        /// Do not emit page-reported values
        #[arg(long)]
        no_page_results: bool,
    },

    /// Validate a snapshot or result JSON file
    Validate {
        /// Path to JSON file
        #[arg(short, long)]
        file: PathBuf,

        /// Treat the file as a result file instead of a snapshot
        #[arg(long)]
        results: bool,
    },

    /// List built-in filter presets
    Presets,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Run {
            snapshot,
            output,
            filter,
            preset,
            thread_pattern,
            event_pattern,
            counter_pattern,
            no_page_results,
        } => {
            let args = RunArgs {
                snapshot,
                output,
                filter_file: filter,
                filter: FilterSpec {
                    preset,
                    thread_pattern,
                    event_pattern,
                    counter_pattern,
                },
                page_results: !no_page_results,
            };

            validate_args(&args)?;
            execute_run(&args)?;
        }

        Commands::Validate { file, results } => {
            if results {
                validate_results_file(&file)?;
            } else {
                validate_snapshot_file(&file)?;
            }
        }

        Commands::Presets => display_presets(),

        Commands::Version => display_version(),
    }

    Ok(())
}
