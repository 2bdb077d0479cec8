//! Convert aggregates into scalar records.
//!
//! Name components are sanitized before a record is built, so no record
//! ever carries a '.' in its name.

use crate::aggregator::{CounterAggregate, EventAggregate};
use crate::model::PageResult;
use crate::parser::schema::ScalarRecord;
use crate::utils::config::{AVG_SUFFIX, COUNT_UNIT, MAX_SUFFIX, RECORD_PATH_SEPARATOR, TIME_UNIT};
use crate::utils::error::AggregateError;
use crate::utils::names::sanitize_record_name;
use std::collections::{BTreeMap, HashSet};

/// Two records per counter: `name` and `name_avg`, both in counts
pub fn emit_counter_results(aggregates: &[CounterAggregate]) -> Vec<ScalarRecord> {
    aggregates
        .iter()
        .flat_map(|agg| {
            let name = sanitize_record_name(&agg.name);
            [
                ScalarRecord::new(name.clone(), COUNT_UNIT, agg.total),
                ScalarRecord::new(format!("{}{}", name, AVG_SUFFIX), COUNT_UNIT, agg.average),
            ]
        })
        .collect()
}

/// Three records per event group: `thread|event`, `..._max`, `..._avg`,
/// all in milliseconds
pub fn emit_event_results(
    thread_name: &str,
    event_name: &str,
    aggregate: &EventAggregate,
) -> Vec<ScalarRecord> {
    let full_name = format!(
        "{}{}{}",
        sanitize_record_name(thread_name),
        RECORD_PATH_SEPARATOR,
        sanitize_record_name(event_name)
    );

    vec![
        ScalarRecord::new(full_name.clone(), TIME_UNIT, aggregate.total),
        ScalarRecord::new(format!("{}{}", full_name, MAX_SUFFIX), TIME_UNIT, aggregate.max),
        ScalarRecord::new(format!("{}{}", full_name, AVG_SUFFIX), TIME_UNIT, aggregate.average),
    ]
}

/// One record per page-reported value, in key order
pub fn emit_page_results(results: &BTreeMap<String, PageResult>) -> Vec<ScalarRecord> {
    results
        .iter()
        .map(|(name, result)| {
            ScalarRecord::new(sanitize_record_name(name), result.units.clone(), result.value)
        })
        .collect()
}

/// Fail on the first record name that was already used
pub fn ensure_unique_names(records: &[ScalarRecord]) -> Result<(), AggregateError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(AggregateError::DuplicateRecord(record.name.clone()));
        }
    }
    Ok(())
}
