//! Counter totals and averages.

use crate::model::Counter;
use crate::utils::error::AggregateError;
use log::debug;

/// Summary of one counter
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAggregate {
    /// Counter name as recorded (unsanitized)
    pub name: String,

    /// Sum of all samples
    pub total: f64,

    /// `total / count`
    pub average: f64,

    /// Number of samples
    pub count: usize,
}

/// Aggregate every counter
///
/// # Errors
/// * `AggregateError::EmptyCounter` - a counter has no samples, so its
///   average is undefined
pub fn aggregate_counters(counters: &[Counter]) -> Result<Vec<CounterAggregate>, AggregateError> {
    counters.iter().map(aggregate_counter).collect()
}

/// Aggregate a single counter
pub fn aggregate_counter(counter: &Counter) -> Result<CounterAggregate, AggregateError> {
    let samples = counter.samples();
    if samples.is_empty() {
        return Err(AggregateError::EmptyCounter(counter.name().to_string()));
    }

    let total: f64 = samples.iter().sum();
    let count = samples.len();

    debug!("Counter '{}': {} samples, total {}", counter.name(), count, total);

    Ok(CounterAggregate {
        name: counter.name().to_string(),
        total,
        average: total / count as f64,
        count,
    })
}
