//! Aggregation of counters and classified event groups.
//!
//! This module turns raw samples and grouped events into:
//! - Counter totals and averages
//! - Per-group total, maximum and average time

pub mod counters;
pub mod events;

// Re-export main types and functions
pub use counters::{aggregate_counter, aggregate_counters, CounterAggregate};
pub use events::{aggregate_event_group, EventAggregate};
