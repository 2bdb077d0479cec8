//! Classifier → aggregator → emitter for one process snapshot.
//!
//! Record order:
//! 1. counters, sorted by name (two records each)
//! 2. event groups, per thread in stream order; asynchronous groups
//!    before synchronous ones, first-seen order within a kind
//!
//! A run either returns every record or a single error. Nothing is
//! emitted for a partially aggregated input.

use crate::aggregator::{aggregate_counter, aggregate_event_group};
use crate::classifier::classify_by_thread;
use crate::model::{Counter, EventKind, ProcessSnapshot, TimedEvent};
use crate::output::records::{emit_counter_results, emit_event_results, ensure_unique_names};
use crate::parser::schema::ScalarRecord;
use crate::utils::config::FilterConfig;
use crate::utils::error::AggregateError;
use log::{debug, info};

/// Group kinds in emission order
const KIND_ORDER: [EventKind; 2] = [EventKind::Asynchronous, EventKind::Synchronous];

/// Run the pipeline over counters and a flat event stream
///
/// **Public** - main entry point
///
/// # Errors
/// * `AggregateError::EmptyCounter` - a selected counter has no samples
/// * `AggregateError::EmptyGroup` / `InvalidEvent` - degenerate event group
/// * `AggregateError::MixedKindGroup` - one thread has async and sync
///   groups of the same name, which would share record names
/// * `AggregateError::DuplicateRecord` - two record names collide after
///   sanitization (e.g. counters "a.b" and "a_b")
pub fn run(
    counters: &[Counter],
    events: &[TimedEvent],
    filter: &FilterConfig,
) -> Result<Vec<ScalarRecord>, AggregateError> {
    let events = events.iter().map(|event| (event.thread_name(), event));
    run_streams(counters.iter(), events, filter)
}

/// Run the pipeline over a process snapshot
///
/// Threads are flattened in order into one event stream. Each event is
/// attributed to the thread that holds it.
pub fn run_snapshot<S: ProcessSnapshot + ?Sized>(
    snapshot: &S,
    filter: &FilterConfig,
) -> Result<Vec<ScalarRecord>, AggregateError> {
    let events = snapshot.threads().iter().flat_map(|thread| {
        thread
            .events()
            .iter()
            .map(move |event| (thread.name(), event))
    });
    run_streams(snapshot.counters().iter(), events, filter)
}

fn run_streams<'a>(
    counters: impl Iterator<Item = &'a Counter>,
    events: impl Iterator<Item = (&'a str, &'a TimedEvent)>,
    filter: &FilterConfig,
) -> Result<Vec<ScalarRecord>, AggregateError> {
    let mut selected: Vec<&Counter> = counters
        .filter(|counter| filter.matches_counter(counter.name()))
        .collect();
    selected.sort_by(|a, b| a.name().cmp(b.name()));

    let counter_aggregates = selected
        .into_iter()
        .map(aggregate_counter)
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = emit_counter_results(&counter_aggregates);
    debug!("{} counter records", records.len());

    let threads = classify_by_thread(events, filter.thread_pattern(), filter.event_pattern());

    for thread in &threads {
        for kind in KIND_ORDER {
            for (name, group) in thread.groups(kind).iter() {
                if kind == EventKind::Synchronous && thread.async_groups.get(name).is_some() {
                    return Err(AggregateError::MixedKindGroup {
                        thread: thread.thread_name.clone(),
                        event: name.to_string(),
                    });
                }
                let aggregate = aggregate_event_group(&thread.thread_name, name, group, kind)?;
                debug!(
                    "{}|{} ({}): {} events, total {:.3} ms",
                    thread.thread_name,
                    name,
                    kind.as_str(),
                    aggregate.count,
                    aggregate.total
                );
                records.extend(emit_event_results(&thread.thread_name, name, &aggregate));
            }
        }
    }

    ensure_unique_names(&records)?;

    info!(
        "Produced {} records from {} counters and {} threads",
        records.len(),
        counter_aggregates.len(),
        threads.len()
    );

    Ok(records)
}
