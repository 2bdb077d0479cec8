//! Scalar record emission and result file output.
//!
//! - `records`: aggregates to named, unit-tagged records
//! - `json`: versioned result files on disk

pub mod json;
pub mod records;

// Re-export main functions
pub use crate::parser::schema::{ResultFile, ScalarRecord};
pub use json::{read_results, results_to_string, to_result_file, write_results};
pub use records::{emit_counter_results, emit_event_results, emit_page_results, ensure_unique_names};
