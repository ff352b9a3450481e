// src/event_engine/handler/core.rs

// Dispatch: maps a stored event type key to its `EventType` and runs the
// full extraction flow for one payload.

use super::processors::{CspEvent, DefaultEvent, ErrorEvent, HostnameReportEvent, TransactionEvent};
use super::types::{EventSummary, EventType, EventTypeResult};
use crate::core::config::ExtractionConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Key → event type table.
///
/// Built once and read-only afterwards. Lookups never fail: unknown keys
/// resolve to the default event type.
#[derive(Debug)]
pub struct EventTypeRegistry {
    types: HashMap<&'static str, Box<dyn EventType>>,
    fallback: Box<dyn EventType>,
}

impl EventTypeRegistry {
    /// Registry with every built-in kind, sharing `config`.
    #[must_use]
    pub fn new(config: &ExtractionConfig) -> Self {
        Self::empty()
            .with_event_type(Box::new(DefaultEvent::new(config.clone())))
            .with_event_type(Box::new(ErrorEvent::new(config.clone())))
            .with_event_type(Box::new(TransactionEvent))
            .with_event_type(Box::new(CspEvent::new(config.clone())))
            .with_event_type(Box::new(HostnameReportEvent::hpkp(config.clone())))
            .with_event_type(Box::new(HostnameReportEvent::expect_ct(config.clone())))
            .with_event_type(Box::new(HostnameReportEvent::expect_staple(config.clone())))
    }

    /// Registry holding only a default-configured [`DefaultEvent`].
    #[must_use]
    pub fn empty() -> Self {
        Self { types: HashMap::new(), fallback: Box::new(DefaultEvent::default()) }
    }

    /// Adds `event_type`, replacing any kind registered under the same key.
    ///
    /// Registering under the default key replaces the fallback, so the
    /// fallback always answers to `"default"`.
    #[must_use]
    pub fn with_event_type(mut self, event_type: Box<dyn EventType>) -> Self {
        let key = event_type.key();
        if key == DefaultEvent::KEY {
            self.fallback = event_type;
        } else if self.types.insert(key, event_type).is_some() {
            tracing::debug!(key, "replaced registered event type");
        }
        self
    }

    /// Looks up `key` by exact match, falling back to the default kind.
    #[must_use]
    pub fn get(&self, key: &str) -> &dyn EventType {
        if key == DefaultEvent::KEY {
            return self.fallback.as_ref();
        }
        match self.types.get(key) {
            Some(event_type) => event_type.as_ref(),
            None => {
                tracing::debug!(key, fallback = self.fallback.key(), "unknown event type key");
                self.fallback.as_ref()
            }
        }
    }

    /// Whether `key` is registered (the default key always is).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        key == DefaultEvent::KEY || self.types.contains_key(key)
    }

    /// Registered keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self.types.keys().copied().collect();
        keys.push(DefaultEvent::KEY);
        keys.sort_unstable();
        keys
    }

    /// Resolves `key` and runs [`summarize`] on `data`.
    ///
    /// # Errors
    ///
    /// Propagates contract violations from the resolved kind.
    pub fn summarize(&self, key: &str, data: &Value, seed: &str) -> EventTypeResult<EventSummary> {
        summarize(self.get(key), data, seed)
    }
}

impl Default for EventTypeRegistry {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}

static REGISTRY: OnceLock<EventTypeRegistry> = OnceLock::new();

/// Process-wide registry with default limits, created on first use.
pub fn default_registry() -> &'static EventTypeRegistry {
    REGISTRY.get_or_init(EventTypeRegistry::default)
}

/// Shorthand for `default_registry().get(key)`.
pub fn get_event_type(key: &str) -> &'static dyn EventType {
    default_registry().get(key)
}

/// Runs metadata extraction followed by title, location and search message.
///
/// # Errors
///
/// Only a misbehaving `EventType` whose own metadata fails its contract can
/// make this fail.
pub fn summarize(event_type: &dyn EventType, data: &Value, seed: &str) -> EventTypeResult<EventSummary> {
    let metadata = event_type.get_metadata(data);
    let title = event_type.get_title(&metadata)?;
    let location = event_type.get_location(&metadata)?;
    let search_message = event_type.build_search_message(seed, &metadata)?;

    tracing::trace!(
        key = event_type.key(),
        title = title.as_deref().unwrap_or_default(),
        fields = metadata.len(),
        "summarized event"
    );

    Ok(EventSummary {
        key: event_type.key().to_string(),
        metadata,
        title,
        location,
        search_message,
    })
}
