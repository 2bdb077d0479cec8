//! Process snapshots: counters, threads and page-reported values.

use super::event::{Counter, TimedEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A thread timeline
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    name: String,
    events: Vec<TimedEvent>,
}

impl Thread {
    pub fn new(name: impl Into<String>, events: Vec<TimedEvent>) -> Self {
        Self {
            name: name.into(),
            events,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }
}

/// A value reported directly by the page under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub units: String,
    pub value: f64,
}

/// What the pipeline needs to know about a captured process
pub trait ProcessSnapshot {
    fn counters(&self) -> &[Counter];
    fn threads(&self) -> &[Thread];
}

/// Owned snapshot of one process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Free-form process label (e.g. "browser")
    pub process: Option<String>,

    pub counters: Vec<Counter>,

    pub threads: Vec<Thread>,

    /// Page-reported values, keyed by result name
    pub page_results: BTreeMap<String, PageResult>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process(mut self, process: impl Into<String>) -> Self {
        self.process = Some(process.into());
        self
    }

    pub fn with_counter(mut self, counter: Counter) -> Self {
        self.counters.push(counter);
        self
    }

    pub fn with_thread(mut self, thread: Thread) -> Self {
        self.threads.push(thread);
        self
    }

    pub fn with_page_result(mut self, name: impl Into<String>, result: PageResult) -> Self {
        self.page_results.insert(name.into(), result);
        self
    }

    /// Total number of events across all threads
    pub fn event_count(&self) -> usize {
        self.threads.iter().map(|t| t.events().len()).sum()
    }
}

impl ProcessSnapshot for Snapshot {
    fn counters(&self) -> &[Counter] {
        &self.counters
    }

    fn threads(&self) -> &[Thread] {
        &self.threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_builder() {
        let io = Thread::new(
            "IOThread",
            vec![
                TimedEvent::asynchronous("A", "IOThread", 1.0).unwrap(),
                TimedEvent::asynchronous("B", "IOThread", 2.0).unwrap(),
            ],
        );
        let snapshot = Snapshot::new()
            .with_process("browser")
            .with_counter(Counter::new("gpu.mem", vec![1.0]))
            .with_thread(io)
            .with_thread(Thread::new("Compositor", vec![]));

        assert_eq!(snapshot.process.as_deref(), Some("browser"));
        assert_eq!(snapshot.counters().len(), 1);
        assert_eq!(snapshot.threads().len(), 2);
        assert_eq!(snapshot.event_count(), 2);
    }
}
