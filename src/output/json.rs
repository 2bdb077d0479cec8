//! JSON result file writer.
//!
//! Writes ResultFile structs to JSON files with proper formatting.

use crate::parser::schema::{ResultFile, ScalarRecord};
use crate::utils::config::{FilterConfig, SCHEMA_VERSION};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Wrap a record sequence into a versioned result file
///
/// **Public** - stamps schema version and generation time
pub fn to_result_file(
    process: Option<String>,
    filter: &FilterConfig,
    records: Vec<ScalarRecord>,
) -> ResultFile {
    ResultFile {
        version: SCHEMA_VERSION.to_string(),
        process,
        filter: filter.to_spec(),
        records,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Write results to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `results` - Result data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let results = to_result_file(snapshot.process.clone(), &filter, records);
/// write_results(&results, "results.json")?;
/// ```
pub fn write_results(results: &ResultFile, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing results to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, results).map_err(OutputError::SerializationFailed)?;

    info!(
        "Results written successfully ({} records)",
        results.records.len()
    );

    Ok(())
}

/// Serialize results to a pretty JSON string (for stdout)
pub fn results_to_string(results: &ResultFile) -> Result<String, OutputError> {
    serde_json::to_string_pretty(results).map_err(OutputError::SerializationFailed)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a result file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_results(input_path: impl AsRef<Path>) -> Result<ResultFile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading results from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let results: ResultFile =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Results loaded: version {}, {} records",
        results.version,
        results.records.len()
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_results() -> ResultFile {
        let filter = FilterConfig::new("IOThread", "Fetch").unwrap();
        to_result_file(
            Some("browser".to_string()),
            &filter,
            vec![
                ScalarRecord::new("gpu_mem", "count", 60.0),
                ScalarRecord::new("gpu_mem_avg", "count", 20.0),
            ],
        )
    }

    #[test]
    fn test_write_and_read_results() {
        let results = create_test_results();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_results(&results, path).unwrap();
        let loaded = read_results(path).unwrap();

        assert_eq!(loaded, results);
        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.filter.thread_pattern.as_deref(), Some("IOThread"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/results.json");

        write_results(&create_test_results(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_results_to_string_has_records() {
        let text = results_to_string(&create_test_results()).unwrap();
        assert!(text.contains("\"gpu_mem_avg\""));
        assert!(text.contains("\"generated_at\""));
    }
}
