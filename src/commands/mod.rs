//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use run::{execute_run, resolve_filter, validate_args, RunArgs};
pub use utils::{display_presets, display_version, validate_results_file, validate_snapshot_file};
