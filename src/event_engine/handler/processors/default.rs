// --- Default Event Type ---
// Fallback for payloads without a more specific kind. Only a title is kept.

use crate::core::common::strings::{first_line, non_empty, strip, value_text};
use crate::core::common::{get_key_path, Metadata};
use crate::core::config::ExtractionConfig;
use crate::event_engine::handler::types::{EventType, EventTypeResult};
use serde_json::Value;
use std::borrow::Cow;

pub const UNLABELED_TITLE: &str = "<unlabeled event>";
pub const UNTITLED: &str = "<untitled>";

/// Reads `logentry.formatted`, falling back to `logentry.message`, stripped.
///
/// Empty strings count as absent at both steps.
pub(crate) fn logentry_message(data: &Value) -> Cow<'_, str> {
    let raw = non_empty(get_key_path(data, &["logentry", "formatted"]).and_then(value_text))
        .or_else(|| non_empty(get_key_path(data, &["logentry", "message"]).and_then(value_text)));
    match raw {
        Some(Cow::Borrowed(text)) => Cow::Borrowed(strip(text)),
        Some(Cow::Owned(text)) => Cow::Owned(strip(&text).to_string()),
        None => Cow::Borrowed(""),
    }
}

#[derive(Debug, Clone, Default)]
pub struct DefaultEvent {
    config: ExtractionConfig,
}

impl DefaultEvent {
    pub const KEY: &'static str = "default";

    #[must_use]
    pub const fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }
}

impl EventType for DefaultEvent {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn get_metadata(&self, data: &Value) -> Metadata {
        let message = logentry_message(data);
        let title = if message.is_empty() {
            UNLABELED_TITLE.to_string()
        } else {
            self.config.truncate_title(first_line(&message)).into_owned()
        };
        Metadata::new().with("title", title)
    }

    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        let title = metadata.get_text("title").map_or_else(|| UNTITLED.to_string(), Cow::into_owned);
        Ok(Some(title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::common::MetaValue;
    use serde_json::json;

    fn title_of(metadata: &Metadata) -> Option<&MetaValue> {
        metadata.get("title")
    }

    #[test]
    fn test_get_metadata_empty_payload() {
        let inst = DefaultEvent::default();
        assert_eq!(inst.get_metadata(&json!({})), Metadata::new().with("title", "<unlabeled event>"));
    }

    #[test]
    fn test_get_metadata_whitespace_only() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": "  "}});
        assert_eq!(inst.get_metadata(&data), Metadata::new().with("title", "<unlabeled event>"));
    }

    #[test]
    fn test_formatted_takes_precedence() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": "foo", "message": "bar"}});
        assert_eq!(inst.get_metadata(&data), Metadata::new().with("title", "foo"));
    }

    #[test]
    fn test_falls_back_to_message() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"message": "foo"}});
        assert_eq!(inst.get_metadata(&data), Metadata::new().with("title", "foo"));

        let data = json!({"logentry": {"formatted": "", "message": "bar"}});
        assert_eq!(title_of(&inst.get_metadata(&data)), Some(&MetaValue::from("bar")));
    }

    #[test]
    fn test_first_line_only() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": "  first line\nsecond line  "}});
        assert_eq!(title_of(&inst.get_metadata(&data)), Some(&MetaValue::from("first line")));
    }

    #[test]
    fn test_first_line_stops_at_unicode_line_breaks() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": "first\u{2028}second\u{000b}third"}});
        assert_eq!(title_of(&inst.get_metadata(&data)), Some(&MetaValue::from("first")));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": "x".repeat(250)}});
        let metadata = inst.get_metadata(&data);
        let title = metadata.get_text("title").unwrap();
        assert_eq!(title.chars().count(), 100);
        assert!(title.ends_with("..."));

        let data = json!({"logentry": {"formatted": "y".repeat(100)}});
        let metadata = inst.get_metadata(&data);
        assert_eq!(metadata.get_text("title").unwrap(), "y".repeat(100));
    }

    #[test]
    fn test_non_string_logentry_is_coerced() {
        let inst = DefaultEvent::default();
        let data = json!({"logentry": {"formatted": 404}});
        assert_eq!(title_of(&inst.get_metadata(&data)), Some(&MetaValue::from("404")));

        let data = json!({"logentry": "not an object"});
        assert_eq!(title_of(&inst.get_metadata(&data)), Some(&MetaValue::from(UNLABELED_TITLE)));
    }

    #[test]
    fn test_get_title() {
        let inst = DefaultEvent::default();
        let metadata = Metadata::new().with("title", "foo");
        assert_eq!(inst.get_title(&metadata).unwrap().as_deref(), Some("foo"));

        assert_eq!(inst.get_title(&Metadata::new()).unwrap().as_deref(), Some("<untitled>"));
        let empty = Metadata::new().with("title", "");
        assert_eq!(inst.get_title(&empty).unwrap().as_deref(), Some("<untitled>"));
    }

    #[test]
    fn test_no_location() {
        let inst = DefaultEvent::default();
        let metadata = inst.get_metadata(&json!({"logentry": {"formatted": "foo"}}));
        assert_eq!(inst.get_location(&metadata).unwrap(), None);
    }

    #[test]
    fn test_build_search_message() {
        let inst = DefaultEvent::default();
        let metadata = Metadata::new().with("first", "one").with("second", "two");
        let result = inst.build_search_message("", &metadata).unwrap();
        assert!(result.contains("one"));
        assert!(result.contains("two"));
        assert!(!result.contains("first"));
        assert!(!result.contains("second"));
    }
}
