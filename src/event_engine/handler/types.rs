// src/event_engine/handler/types.rs

// The data structures of event handling: the `EventType` contract every
// kind implements, and the summary record produced for one payload.

use crate::core::common::{EventTypeError, MetaValue, Metadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Result of the metadata-consuming operations.
pub type EventTypeResult<T> = Result<T, EventTypeError>;

/// Extraction contract shared by every event kind.
///
/// Implementations are stateless apart from immutable limits, so one
/// instance can serve any number of threads.
pub trait EventType: fmt::Debug + Send + Sync {
    /// Stable key under which this kind is stored and looked up.
    fn key(&self) -> &'static str;

    /// Extracts the kind-specific metadata record.
    ///
    /// Never fails: absent or malformed fields fall back to defaults.
    fn get_metadata(&self, data: &Value) -> Metadata;

    /// Display title derived from `metadata`.
    ///
    /// # Errors
    ///
    /// `ContractViolation` if `metadata` lacks a field this kind always writes.
    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>>;

    /// Location derived from `metadata`; kinds without one return `None`.
    ///
    /// # Errors
    ///
    /// `ContractViolation` if `metadata` lacks a field this kind always writes.
    fn get_location(&self, _metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(None)
    }

    /// Text blob for full-text indexing.
    ///
    /// Starts from `seed` and appends each metadata value, in field order,
    /// unless its text already occurs in the accumulated message.
    ///
    /// # Errors
    ///
    /// Overrides may return `ContractViolation` for foreign metadata.
    fn build_search_message(&self, seed: &str, metadata: &Metadata) -> EventTypeResult<String> {
        Ok(accumulate_search_message(seed, metadata.values()))
    }
}

/// Appends every value whose text is not yet a substring of the message.
///
/// Values are space-separated; no separator is added while the message is
/// still empty. Null and empty values never contribute.
pub fn accumulate_search_message<'a, I>(seed: &str, values: I) -> String
where
    I: IntoIterator<Item = &'a MetaValue>,
{
    let mut message = seed.to_string();
    for value in values {
        let text = value.to_display_string();
        if message.contains(&*text) {
            continue;
        }
        if !message.is_empty() {
            message.push(' ');
        }
        message.push_str(&text);
    }
    message
}

/// Everything derived from one payload, in the order callers need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub key: String,
    pub metadata: Metadata,
    pub title: Option<String>,
    pub location: Option<String>,
    pub search_message: String,
}
