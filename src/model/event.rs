//! Timed trace events and numeric counters.

use crate::utils::error::AggregateError;
use serde::{Deserialize, Serialize};

/// Whether an event is a synchronous slice or an asynchronous span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Nested slice on one thread; aggregated by self time
    #[serde(rename = "sync", alias = "synchronous")]
    Synchronous,

    /// Span that may cover many other events; aggregated by duration
    #[serde(rename = "async", alias = "asynchronous")]
    Asynchronous,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Synchronous => "sync",
            EventKind::Asynchronous => "async",
        }
    }
}

/// A single recorded trace event
///
/// Fields are private so that every instance has passed validation:
/// timings are finite and non-negative, and `self_time` is present
/// exactly for synchronous events.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    name: String,
    thread_name: String,
    kind: EventKind,
    duration: f64,
    self_time: Option<f64>,
}

impl TimedEvent {
    /// Create a synchronous event
    ///
    /// # Errors
    /// * `AggregateError::InvalidEvent` - negative or non-finite timing
    pub fn synchronous(
        name: impl Into<String>,
        thread_name: impl Into<String>,
        duration: f64,
        self_time: f64,
    ) -> Result<Self, AggregateError> {
        let event = Self {
            name: name.into(),
            thread_name: thread_name.into(),
            kind: EventKind::Synchronous,
            duration,
            self_time: Some(self_time),
        };
        event.check_time("duration", duration)?;
        event.check_time("self_time", self_time)?;
        Ok(event)
    }

    /// Create an asynchronous event
    ///
    /// # Errors
    /// * `AggregateError::InvalidEvent` - negative or non-finite duration
    pub fn asynchronous(
        name: impl Into<String>,
        thread_name: impl Into<String>,
        duration: f64,
    ) -> Result<Self, AggregateError> {
        let event = Self {
            name: name.into(),
            thread_name: thread_name.into(),
            kind: EventKind::Asynchronous,
            duration,
            self_time: None,
        };
        event.check_time("duration", duration)?;
        Ok(event)
    }

    fn check_time(&self, field: &str, value: f64) -> Result<(), AggregateError> {
        if value.is_finite() && value >= 0.0 {
            return Ok(());
        }
        Err(AggregateError::InvalidEvent {
            event: self.name.clone(),
            thread: self.thread_name.clone(),
            reason: format!("{} must be finite and non-negative, got {}", field, value),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Wall duration in milliseconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Self time in milliseconds (synchronous events only)
    pub fn self_time(&self) -> Option<f64> {
        self.self_time
    }
}

/// A named counter with its sampled totals
#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    name: String,
    samples: Vec<f64>,
}

impl Counter {
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synchronous_event() {
        let event = TimedEvent::synchronous("Paint", "CrRendererMain", 4.0, 1.5).unwrap();
        assert_eq!(event.kind(), EventKind::Synchronous);
        assert_eq!(event.duration(), 4.0);
        assert_eq!(event.self_time(), Some(1.5));
    }

    #[test]
    fn test_asynchronous_event() {
        let event = TimedEvent::asynchronous("DispatchFetchEvent", "IOThread", 5.0).unwrap();
        assert_eq!(event.kind(), EventKind::Asynchronous);
        assert_eq!(event.self_time(), None);
    }

    #[test]
    fn test_zero_times_allowed() {
        assert!(TimedEvent::synchronous("a", "t", 0.0, 0.0).is_ok());
        assert!(TimedEvent::asynchronous("a", "t", 0.0).is_ok());
    }

    #[test]
    fn test_negative_duration_rejected() {
        let err = TimedEvent::asynchronous("Fetch", "IOThread", -1.0).unwrap_err();
        match err {
            AggregateError::InvalidEvent { event, thread, reason } => {
                assert_eq!(event, "Fetch");
                assert_eq!(thread, "IOThread");
                assert!(reason.contains("duration"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_self_time_rejected() {
        let err = TimedEvent::synchronous("Layout", "Main", 2.0, f64::NAN).unwrap_err();
        assert!(err.to_string().contains("self_time"));

        assert!(TimedEvent::asynchronous("x", "t", f64::INFINITY).is_err());
    }

    #[test]
    fn test_kind_serde_aliases() {
        let kind: EventKind = serde_json::from_str("\"synchronous\"").unwrap();
        assert_eq!(kind, EventKind::Synchronous);
        let kind: EventKind = serde_json::from_str("\"async\"").unwrap();
        assert_eq!(kind, EventKind::Asynchronous);
        assert_eq!(EventKind::Asynchronous.as_str(), "async");
    }
}
