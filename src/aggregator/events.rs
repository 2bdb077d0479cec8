//! Summary statistics over a group of same-named events.
//!
//! Asynchronous groups are measured by duration, synchronous groups by
//! self time. The average is taken over the events in the group, i.e.
//! only the events that survived filtering.

use crate::model::{EventKind, TimedEvent};
use crate::utils::error::AggregateError;

/// Summary of one event group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventAggregate {
    pub total: f64,
    pub max: f64,
    pub average: f64,
    pub count: usize,
}

/// Aggregate one event group
///
/// **Public** - main entry point for event statistics
///
/// # Arguments
/// * `thread_name` - Thread the group belongs to (for error reporting)
/// * `name` - Group name
/// * `events` - Events in the group
/// * `kind` - Selects the measured field
///
/// # Errors
/// * `AggregateError::EmptyGroup` - `events` is empty
/// * `AggregateError::InvalidEvent` - a synchronous group holds an event
///   without self time
pub fn aggregate_event_group(
    thread_name: &str,
    name: &str,
    events: &[&TimedEvent],
    kind: EventKind,
) -> Result<EventAggregate, AggregateError> {
    if events.is_empty() {
        return Err(AggregateError::EmptyGroup {
            thread: thread_name.to_string(),
            event: name.to_string(),
        });
    }

    let times = events
        .iter()
        .map(|event| measure(event, kind))
        .collect::<Result<Vec<f64>, _>>()?;

    let total: f64 = times.iter().sum();
    let max = times.iter().copied().fold(f64::MIN, f64::max);
    let count = times.len();

    Ok(EventAggregate {
        total,
        max,
        average: total / count as f64,
        count,
    })
}

fn measure(event: &TimedEvent, kind: EventKind) -> Result<f64, AggregateError> {
    match kind {
        EventKind::Asynchronous => Ok(event.duration()),
        EventKind::Synchronous => event.self_time().ok_or_else(|| AggregateError::InvalidEvent {
            event: event.name().to_string(),
            thread: event.thread_name().to_string(),
            reason: "event in a synchronous group has no self_time".to_string(),
        }),
    }
}
