//! Snapshot parser for exported process timelines.
//!
//! Parses snapshot JSON into the typed event model. Every event passes
//! through the validating constructors, so a bad timing fails here
//! rather than halfway through aggregation.

use crate::model::{Counter, EventKind, PageResult, Snapshot, Thread, TimedEvent};
use crate::utils::error::{AggregateError, ParseError};
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Snapshot document as exported by the capture side
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    process: Option<String>,

    /// Counter name -> sampled totals
    #[serde(default)]
    counters: BTreeMap<String, Vec<f64>>,

    #[serde(default)]
    threads: Vec<RawThread>,

    #[serde(default, alias = "pageResults")]
    page_results: BTreeMap<String, PageResult>,
}

#[derive(Debug, Deserialize)]
struct RawThread {
    name: String,

    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    name: String,

    kind: EventKind,

    duration: f64,

    #[serde(default, alias = "selfTime")]
    self_time: Option<f64>,
}

/// Parse snapshot JSON text
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::JsonError` - Invalid JSON or missing required fields
/// * `ParseError::InvalidFormat` - Top level is not an object
/// * `ParseError::InvalidEvent` - An event failed validation
pub fn parse_snapshot(json: &str) -> Result<Snapshot, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    parse_snapshot_value(value)
}

/// Parse an already-decoded snapshot JSON value
pub fn parse_snapshot_value(value: serde_json::Value) -> Result<Snapshot, ParseError> {
    validate_snapshot_format(&value)?;

    let raw: RawSnapshot = serde_json::from_value(value)?;

    let counters = raw
        .counters
        .into_iter()
        .map(|(name, samples)| Counter::new(name, samples))
        .collect::<Vec<_>>();

    let threads = raw
        .threads
        .into_iter()
        .map(convert_thread)
        .collect::<Result<Vec<_>, _>>()?;

    let snapshot = Snapshot {
        process: raw.process,
        counters,
        threads,
        page_results: raw.page_results,
    };

    debug!(
        "Parsed snapshot: {} counters, {} threads, {} events",
        snapshot.counters.len(),
        snapshot.threads.len(),
        snapshot.event_count()
    );

    Ok(snapshot)
}

/// Read and parse a snapshot file
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<Snapshot, ParseError> {
    let path = path.as_ref();
    info!("Reading snapshot: {}", path.display());

    let contents = std::fs::read_to_string(path)?;
    parse_snapshot(&contents)
}

/// Check the top-level shape before deserializing
///
/// **Public** - also usable on its own for a quick shape check
pub fn validate_snapshot_format(value: &serde_json::Value) -> Result<(), ParseError> {
    let obj = value.as_object().ok_or_else(|| {
        ParseError::InvalidFormat("Snapshot must be a JSON object".to_string())
    })?;

    if !obj.contains_key("counters") && !obj.contains_key("threads") {
        return Err(ParseError::InvalidFormat(
            "Snapshot has neither 'counters' nor 'threads'".to_string(),
        ));
    }

    Ok(())
}

fn convert_thread(raw: RawThread) -> Result<Thread, ParseError> {
    let events = raw
        .events
        .into_iter()
        .map(|event| convert_event(&raw.name, event))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Thread::new(raw.name, events))
}

fn convert_event(thread: &str, raw: RawEvent) -> Result<TimedEvent, AggregateError> {
    match (raw.kind, raw.self_time) {
        (EventKind::Synchronous, Some(self_time)) => {
            TimedEvent::synchronous(raw.name, thread, raw.duration, self_time)
        }
        (EventKind::Asynchronous, None) => TimedEvent::asynchronous(raw.name, thread, raw.duration),
        (EventKind::Synchronous, None) => Err(AggregateError::InvalidEvent {
            event: raw.name,
            thread: thread.to_string(),
            reason: "synchronous event is missing self_time".to_string(),
        }),
        (EventKind::Asynchronous, Some(_)) => Err(AggregateError::InvalidEvent {
            event: raw.name,
            thread: thread.to_string(),
            reason: "asynchronous event cannot carry self_time".to_string(),
        }),
    }
}
