//! Run command implementation.
//!
//! The run command:
//! 1. Reads the snapshot
//! 2. Resolves the filter (preset, filter file, CLI patterns)
//! 3. Aggregates counters and events
//! 4. Writes the result file

pub use super::models::RunArgs;
use crate::output::{
    emit_page_results, ensure_unique_names, results_to_string, to_result_file, write_results,
    ResultFile,
};
use crate::parser::read_snapshot;
use crate::pipeline::run_snapshot;
use crate::utils::config::{load_filter_file, FilterConfig};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the run command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The result file that was written
///
/// # Errors
/// * Snapshot read or parse failures
/// * Invalid filter configuration
/// * Aggregation failures (empty counter or group, invalid event,
///   colliding record names)
/// * File write errors
pub fn execute_run(args: &RunArgs) -> Result<ResultFile> {
    let start_time = Instant::now();

    info!("Step 1/4: Reading snapshot...");
    let snapshot = read_snapshot(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;

    info!("Step 2/4: Resolving filter...");
    let filter = resolve_filter(args)?;
    debug!(
        "Filter: thread={:?} event={:?} counter={:?}",
        filter.thread_pattern().as_str(),
        filter.event_pattern().as_str(),
        filter.counter_pattern().map(|re| re.as_str())
    );

    info!("Step 3/4: Aggregating...");
    let mut records = if args.page_results {
        emit_page_results(&snapshot.page_results)
    } else {
        Vec::new()
    };
    records.extend(run_snapshot(&snapshot, &filter).context("Aggregation failed")?);
    ensure_unique_names(&records).context("Page results collide with trace records")?;

    info!("Step 4/4: Writing results...");
    let results = to_result_file(snapshot.process.clone(), &filter, records);

    match &args.output {
        Some(path) => {
            write_results(&results, path).context("Failed to write results JSON")?;
            info!("✓ Results written to: {}", path.display());
        }
        None => println!("{}", results_to_string(&results)?),
    }

    let elapsed = start_time.elapsed();
    info!("Run completed in {:.2}s", elapsed.as_secs_f64());

    Ok(results)
}

/// Layer CLI patterns over the filter file, if any
///
/// **Public** - exposed for tests
pub fn resolve_filter(args: &RunArgs) -> Result<FilterConfig> {
    let base = match &args.filter_file {
        Some(path) => load_filter_file(path)
            .with_context(|| format!("Failed to load filter file {}", path.display()))?,
        None => Default::default(),
    };

    base.merge(args.filter.clone())
        .build()
        .context("Invalid filter configuration")
}

/// Validate run arguments before doing any work
///
/// **Public** - called from main.rs
pub fn validate_args(args: &RunArgs) -> Result<()> {
    if args.snapshot.as_os_str().is_empty() {
        bail!("Snapshot path cannot be empty");
    }

    if !args.snapshot.is_file() {
        bail!("Snapshot file not found: {}", args.snapshot.display());
    }

    if let Some(path) = &args.filter_file {
        if !path.is_file() {
            bail!("Filter file not found: {}", path.display());
        }
    }

    if let Some(output) = &args.output {
        if output.is_dir() {
            bail!("Output path is a directory: {}", output.display());
        }
    }

    Ok(())
}
