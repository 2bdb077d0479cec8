//! Snapshot parsing and schema definitions.
//!
//! This module handles:
//! - Parsing snapshot JSON exported by the capture side
//! - Validating snapshot format
//! - Defining output schema

pub mod schema;
pub mod snapshot;

// Re-export main types
pub use schema::{ResultFile, ScalarRecord};
pub use snapshot::{parse_snapshot, parse_snapshot_value, read_snapshot, validate_snapshot_format};
