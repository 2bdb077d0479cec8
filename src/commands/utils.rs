use crate::output::read_results;
use crate::parser::parse_snapshot_value;
use crate::utils::config::{PRESETS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a snapshot JSON file
pub fn validate_snapshot_file(file_path: &Path) -> Result<()> {
    println!("Validating snapshot: {}", file_path.display());

    let contents = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let snapshot = parse_snapshot_value(value)?;

    println!("✓ Valid snapshot JSON");
    if let Some(process) = &snapshot.process {
        println!("  Process: {}", process);
    }
    println!("  Counters: {}", snapshot.counters.len());
    println!("  Threads: {}", snapshot.threads.len());
    println!("  Events: {}", snapshot.event_count());
    println!("  Page Results: {}", snapshot.page_results.len());

    Ok(())
}

/// Validate a result JSON file
pub fn validate_results_file(file_path: &Path) -> Result<()> {
    println!("Validating results: {}", file_path.display());

    let results = read_results(file_path)?;

    println!("✓ Valid results JSON");
    println!("  Version: {}", results.version);
    println!("  Records: {}", results.records.len());
    println!("  Generated: {}", results.generated_at);

    Ok(())
}

/// List built-in filter presets
pub fn display_presets() {
    for preset in PRESETS {
        println!("{}", preset.name);
        println!("  {}", preset.description);
        println!("  thread:  {:?}", preset.thread_pattern);
        println!("  event:   {:?}", preset.event_pattern);
        if let Some(counter) = preset.counter_pattern {
            println!("  counter: {:?}", counter);
        }
    }
}

/// Display version information
pub fn display_version() {
    println!("Timeline Metrics v{}", env!("CARGO_PKG_VERSION"));
    println!("Result Schema: v{}", SCHEMA_VERSION);
}
