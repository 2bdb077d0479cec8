//! Output JSON schema definitions for aggregation results.
//!
//! This module defines the structure of JSON files we write to disk.
//! Schema is versioned to allow future evolution.

use crate::utils::config::FilterSpec;
use serde::{Deserialize, Serialize};

/// Top-level result structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultFile {
    /// Schema version for compatibility checking
    pub version: String,

    /// Process label from the snapshot, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,

    /// Filter the records were produced with
    pub filter: FilterSpec,

    /// Records in emission order
    pub records: Vec<ScalarRecord>,

    /// Timestamp when results were generated
    pub generated_at: String,
}

/// One named, unit-tagged value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarRecord {
    pub name: String,
    pub unit: String,
    pub value: f64,
}

impl ScalarRecord {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            value,
        }
    }
}
