//! Name sanitization for filters and record names.
//!
//! All functions are idempotent.

use super::config::{FORBIDDEN_NAME_CHAR, NAME_REPLACEMENT_CHAR, THREAD_NAME_SEPARATOR};

/// Thread names are matched with '/' replaced (e.g. "Chrome_ChildIOThread")
pub fn sanitize_thread_name(name: &str) -> String {
    name.replace(THREAD_NAME_SEPARATOR, &NAME_REPLACEMENT_CHAR.to_string())
}

/// Event names are matched and grouped with '.' replaced
pub fn sanitize_event_name(name: &str) -> String {
    name.replace(FORBIDDEN_NAME_CHAR, &NAME_REPLACEMENT_CHAR.to_string())
}

/// Make any name component acceptable to the results store
pub fn sanitize_record_name(name: &str) -> String {
    sanitize_event_name(name)
}
