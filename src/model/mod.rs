//! Typed representation of trace events, counters and process snapshots.
//!
//! Types here only validate and expose data; all behavior lives in the
//! classifier, aggregator and emitter.

pub mod event;
pub mod snapshot;

pub use event::{Counter, EventKind, TimedEvent};
pub use snapshot::{PageResult, ProcessSnapshot, Snapshot, Thread};
