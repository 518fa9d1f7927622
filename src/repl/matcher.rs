//! # Event Matchers
//!
//! Pure lookup helpers over the [`EventStore`]. Each returns the matched
//! event's text or [`HistoryError::NoSuchEvent`]; a failed lookup aborts the
//! enclosing expansion and the whole input line is discarded.

use super::error::HistoryError;
use super::store::EventStore;

/// Text of the event with exactly this number
pub fn by_number(store: &EventStore, number: u64) -> Result<&str, HistoryError> {
    store
        .get(number)
        .map(|event| event.text())
        .ok_or(HistoryError::NoSuchEvent)
}

/// Text of the most recent event whose text starts with `prefix`
pub fn by_prefix<'a>(store: &'a EventStore, prefix: &str) -> Result<&'a str, HistoryError> {
    store
        .find(|event| event.text().starts_with(prefix))
        .map(|event| event.text())
        .ok_or(HistoryError::NoSuchEvent)
}

/// Text of the most recent event containing `pattern` anywhere
pub fn by_substring<'a>(store: &'a EventStore, pattern: &str) -> Result<&'a str, HistoryError> {
    store
        .find(|event| event.text().contains(pattern))
        .map(|event| event.text())
        .ok_or(HistoryError::NoSuchEvent)
}

/// Text of the most recent event
pub fn last(store: &EventStore) -> Result<&str, HistoryError> {
    store
        .latest()
        .map(|event| event.text())
        .ok_or(HistoryError::NoSuchEvent)
}
