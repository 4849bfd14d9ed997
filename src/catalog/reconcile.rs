//! Set comparison between source message ids and locale keys.
//!
//! All functions are pure and take the collections by reference. Matching is
//! exact string equality of `SourceMessage::id` against `LocaleEntry::key`.
//! Duplicate ids or keys are never collapsed; when several locale entries share
//! a key, the first one in sequence order is the one that is read.

use std::collections::{HashMap, HashSet};

use crate::catalog::types::{LocaleEntry, MatchingString, SourceMessage};

/// What: Index locale keys to the value of their first occurrence.
fn first_values(entries: &[LocaleEntry]) -> HashMap<&str, &str> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        index
            .entry(entry.key.as_str())
            .or_insert(entry.value.as_str());
    }
    index
}

/// What: Set of every source id.
fn source_ids(sources: &[SourceMessage]) -> HashSet<&str> {
    sources.iter().map(|s| s.id.as_str()).collect()
}

/// What: Count source messages that have at least one locale entry.
#[must_use]
pub fn matching_string_count(sources: &[SourceMessage], entries: &[LocaleEntry]) -> usize {
    let keys = first_values(entries);
    sources
        .iter()
        .filter(|s| keys.contains_key(s.id.as_str()))
        .count()
}

/// What: Count source messages with no locale entry.
#[must_use]
pub fn missing_string_count(sources: &[SourceMessage], entries: &[LocaleEntry]) -> usize {
    sources.len() - matching_string_count(sources, entries)
}

/// What: Count locale entries whose key matches some source id.
///
/// Details:
/// - Counts entries, not ids, so duplicated locale keys are each counted. This
///   can differ from [`matching_string_count`] when ids or keys repeat.
#[must_use]
pub fn matching_entry_count(sources: &[SourceMessage], entries: &[LocaleEntry]) -> usize {
    let ids = source_ids(sources);
    entries
        .iter()
        .filter(|e| ids.contains(e.key.as_str()))
        .count()
}

/// What: Count locale entries with no source message.
#[must_use]
pub fn orphaned_string_count(sources: &[SourceMessage], entries: &[LocaleEntry]) -> usize {
    entries.len() - matching_entry_count(sources, entries)
}

/// What: Join every matched source message with its first translation.
///
/// Inputs:
/// - `sources`: Source messages, in load order.
/// - `entries`: Locale entries for one locale.
///
/// Output:
/// - One record per matched source message, in source order.
///
/// Details:
/// - Only the first locale entry with a given key is surfaced, mirroring how
///   `matching` edits update the first occurrence.
#[must_use]
pub fn matching_strings(sources: &[SourceMessage], entries: &[LocaleEntry]) -> Vec<MatchingString> {
    let values = first_values(entries);
    sources
        .iter()
        .filter_map(|s| {
            values
                .get(s.id.as_str())
                .map(|message| MatchingString::from_parts(s, message))
        })
        .collect()
}

/// What: Source messages with no locale entry, in source order.
#[must_use]
pub fn missing_strings(sources: &[SourceMessage], entries: &[LocaleEntry]) -> Vec<SourceMessage> {
    let keys = first_values(entries);
    sources
        .iter()
        .filter(|s| !keys.contains_key(s.id.as_str()))
        .cloned()
        .collect()
}

/// What: Locale entries with no source message, in locale order.
#[must_use]
pub fn orphaned_strings(sources: &[SourceMessage], entries: &[LocaleEntry]) -> Vec<LocaleEntry> {
    let ids = source_ids(sources);
    entries
        .iter()
        .filter(|e| !ids.contains(e.key.as_str()))
        .cloned()
        .collect()
}
