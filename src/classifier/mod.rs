//! Filter and group a raw event stream.
//!
//! Events are kept only when their (sanitized) thread name matches the
//! thread pattern and their (sanitized) event name matches the event
//! pattern. Survivors are partitioned by kind and grouped by name.
//!
//! Output order is stable: threads in order of first appearance in the
//! stream, groups in order of first appearance within their thread.

use crate::model::{EventKind, TimedEvent};
use crate::utils::names::{sanitize_event_name, sanitize_thread_name};
use log::debug;
use regex::Regex;
use std::collections::HashMap;

/// Events grouped by sanitized name, in first-seen order
#[derive(Debug, Default, Clone)]
pub struct EventGroups<'a> {
    groups: Vec<(String, Vec<&'a TimedEvent>)>,
    index: HashMap<String, usize>,
}

impl<'a> EventGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to the group for `name`, creating it if needed
    pub fn push(&mut self, name: String, event: &'a TimedEvent) {
        match self.index.get(&name) {
            Some(&i) => self.groups[i].1.push(event),
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push((name, vec![event]));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[&'a TimedEvent]> {
        self.index.get(name).map(|&i| self.groups[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[&'a TimedEvent])> {
        self.groups
            .iter()
            .map(|(name, events)| (name.as_str(), events.as_slice()))
    }

    /// Group names in first-seen order
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Classified events of one included thread
#[derive(Debug, Clone)]
pub struct ThreadGroups<'a> {
    /// Sanitized thread name
    pub thread_name: String,
    pub async_groups: EventGroups<'a>,
    pub sync_groups: EventGroups<'a>,
}

impl<'a> ThreadGroups<'a> {
    fn new(thread_name: String) -> Self {
        Self {
            thread_name,
            async_groups: EventGroups::new(),
            sync_groups: EventGroups::new(),
        }
    }

    pub fn groups(&self, kind: EventKind) -> &EventGroups<'a> {
        match kind {
            EventKind::Asynchronous => &self.async_groups,
            EventKind::Synchronous => &self.sync_groups,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.async_groups.is_empty() && self.sync_groups.is_empty()
    }
}

/// Classify an event stream
///
/// **Public** - main entry point for classification
///
/// # Arguments
/// * `events` - Events in stream order; each is attributed to the thread
///   named by its own `thread_name`
/// * `thread_pattern` - Searched in the thread name with '/' replaced by '_'
/// * `event_pattern` - Searched in the event name with '.' replaced by '_'
///
/// # Returns
/// One entry per included thread. Threads whose sanitized names coincide
/// share an entry. Included threads with no matching events are kept
/// with empty groups.
pub fn classify<'a>(
    events: impl IntoIterator<Item = &'a TimedEvent>,
    thread_pattern: &Regex,
    event_pattern: &Regex,
) -> Vec<ThreadGroups<'a>> {
    let attributed = events
        .into_iter()
        .map(|event| (event.thread_name(), event));
    classify_by_thread(attributed, thread_pattern, event_pattern)
}

/// Classify events that are attributed to an explicit thread name
///
/// Used for snapshots, where the owning thread decides which thread an
/// event belongs to regardless of the event's own `thread_name`.
pub fn classify_by_thread<'a>(
    events: impl IntoIterator<Item = (&'a str, &'a TimedEvent)>,
    thread_pattern: &Regex,
    event_pattern: &Regex,
) -> Vec<ThreadGroups<'a>> {
    let mut threads: Vec<ThreadGroups<'a>> = Vec::new();
    // sanitized thread name -> index into `threads`, None if excluded
    let mut seen: HashMap<String, Option<usize>> = HashMap::new();
    let mut total = 0usize;

    for (owner, event) in events {
        total += 1;
        let thread_name = sanitize_thread_name(owner);

        let slot = match seen.get(&thread_name) {
            Some(slot) => *slot,
            None => {
                let slot = if thread_pattern.is_match(&thread_name) {
                    threads.push(ThreadGroups::new(thread_name.clone()));
                    Some(threads.len() - 1)
                } else {
                    debug!("Skipping thread '{}'", thread_name);
                    None
                };
                seen.insert(thread_name, slot);
                slot
            }
        };

        let Some(i) = slot else {
            continue;
        };

        let event_name = sanitize_event_name(event.name());
        if !event_pattern.is_match(&event_name) {
            continue;
        }

        let thread = &mut threads[i];
        match event.kind() {
            EventKind::Asynchronous => thread.async_groups.push(event_name, event),
            EventKind::Synchronous => thread.sync_groups.push(event_name, event),
        }
    }

    debug!(
        "Classified {} events into {} threads",
        total,
        threads.len()
    );

    threads
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    fn async_event(name: &str, thread: &str, duration: f64) -> TimedEvent {
        TimedEvent::asynchronous(name, thread, duration).unwrap()
    }

    fn sync_event(name: &str, thread: &str, self_time: f64) -> TimedEvent {
        TimedEvent::synchronous(name, thread, self_time * 2.0, self_time).unwrap()
    }

    #[test]
    fn test_partition_by_kind() {
        let events = vec![
            async_event("Fetch", "IOThread", 5.0),
            sync_event("Task", "IOThread", 1.0),
            async_event("Fetch", "IOThread", 15.0),
        ];

        let threads = classify(&events, &re(""), &re(""));
        assert_eq!(threads.len(), 1);

        let io = &threads[0];
        assert_eq!(io.async_groups.get("Fetch").unwrap().len(), 2);
        assert_eq!(io.sync_groups.get("Task").unwrap().len(), 1);
        assert!(io.async_groups.get("Task").is_none());
    }

    #[test]
    fn test_thread_filter_uses_search_semantics() {
        let events = vec![
            async_event("A", "Chrome_IOThread", 1.0),
            async_event("A", "CompositorThread", 1.0),
        ];

        let threads = classify(&events, &re("IO.*"), &re(""));
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].thread_name, "Chrome_IOThread");
    }

    #[test]
    fn test_thread_name_sanitized_before_match() {
        let events = vec![async_event("A", "Chrome/IOThread", 1.0)];

        let threads = classify(&events, &re("^Chrome_IO"), &re(""));
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].thread_name, "Chrome_IOThread");
    }

    #[test]
    fn test_event_name_sanitized_and_grouped() {
        let events = vec![
            async_event("ServiceWorker.Fetch", "IO", 1.0),
            async_event("ServiceWorker_Fetch", "IO", 2.0),
        ];

        let threads = classify(&events, &re(""), &re("ServiceWorker_Fetch"));
        let groups = &threads[0].async_groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("ServiceWorker_Fetch").unwrap().len(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let events = vec![
            async_event("B", "T2", 1.0),
            async_event("Z", "T1", 1.0),
            async_event("A", "T1", 1.0),
            async_event("Z", "T1", 1.0),
        ];

        let threads = classify(&events, &re(""), &re(""));
        let names: Vec<&str> = threads.iter().map(|t| t.thread_name.as_str()).collect();
        assert_eq!(names, vec!["T2", "T1"]);
        assert_eq!(threads[1].async_groups.names(), vec!["Z", "A"]);
    }

    #[test]
    fn test_included_thread_without_matches() {
        let events = vec![async_event("Other", "IOThread", 1.0)];

        let threads = classify(&events, &re("IOThread"), &re("DispatchFetchEvent"));
        assert_eq!(threads.len(), 1);
        assert!(threads[0].is_empty());
    }

    #[test]
    fn test_owner_name_wins_over_event_thread_name() {
        let event = async_event("DispatchFetchEvent", "CompositorThread", 5.0);
        let stream = vec![("IOThread", &event)];

        let threads = classify_by_thread(stream, &re("IOThread"), &re(""));
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].thread_name, "IOThread");
        assert_eq!(threads[0].async_groups.get("DispatchFetchEvent").unwrap().len(), 1);
    }

    #[test]
    fn test_empty_stream() {
        let threads = classify(&[] as &[TimedEvent], &re(""), &re(""));
        assert!(threads.is_empty());
    }
}
