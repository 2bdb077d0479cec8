use crate::utils::config::FilterSpec;
use std::path::PathBuf;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Snapshot JSON to aggregate
    pub snapshot: PathBuf,

    /// Output path for the result JSON (None = stdout)
    pub output: Option<PathBuf>,

    /// Optional TOML filter file
    pub filter_file: Option<PathBuf>,

    /// Filter given on the command line; overrides the filter file
    pub filter: FilterSpec,

    /// Emit page-reported values ahead of the trace records
    pub page_results: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            snapshot: PathBuf::from("snapshot.json"),
            output: None,
            filter_file: None,
            filter: FilterSpec::default(),
            page_results: true,
        }
    }
}
