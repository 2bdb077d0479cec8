//! Timeline Metrics
//!
//! Aggregates a captured process snapshot (counters and per-thread trace
//! events) into named, unit-tagged scalar records for a benchmark
//! results store.
//!
//! ## Getting Started
//!
//! ```ignore
//! use timeline_metrics::parser::read_snapshot;
//! use timeline_metrics::pipeline::run_snapshot;
//! use timeline_metrics::utils::config::FilterConfig;
//!
//! let snapshot = read_snapshot("snapshot.json")?;
//! let filter = FilterConfig::from_preset("service_worker")?;
//! for record in run_snapshot(&snapshot, &filter)? {
//!     println!("{} = {} {}", record.name, record.value, record.unit);
//! }
//! ```

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod utils;
