// --- Error Event Type ---
// Exception-bearing payloads. The last entry of `exception.values` is the
// innermost exception of a chain and is the one that names the event.

use crate::core::common::strings::{first_line, non_empty, strip, truncate_chars, value_text};
use crate::core::common::{get_path, Metadata, PathSegment};
use crate::core::config::ExtractionConfig;
use crate::event_engine::handler::types::{EventType, EventTypeResult};
use serde_json::Value;
use std::borrow::Cow;

pub const DEFAULT_ERROR_TYPE: &str = "Error";
pub const UNKNOWN_ERROR_TITLE: &str = "<unknown error>";

#[derive(Debug, Clone, Default)]
pub struct ErrorEvent {
    config: ExtractionConfig,
}

impl ErrorEvent {
    pub const KEY: &'static str = "error";

    #[must_use]
    pub const fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    fn cap(&self, text: &str, max_chars: usize) -> String {
        truncate_chars(text, max_chars, &self.config.truncation_marker).into_owned()
    }
}

impl EventType for ErrorEvent {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn get_metadata(&self, data: &Value) -> Metadata {
        // An empty or missing list behaves like one record with no fields.
        let exception = get_path(
            data,
            &[PathSegment::Key("exception"), PathSegment::Key("values"), PathSegment::Index(-1)],
        );
        let field = |name: &str| exception.and_then(|record| get_path(record, &[PathSegment::Key(name)]));

        let ty = field("type").and_then(value_text).unwrap_or(Cow::Borrowed(DEFAULT_ERROR_TYPE));
        let value = field("value").and_then(value_text).unwrap_or(Cow::Borrowed(""));

        Metadata::new()
            .with("type", self.cap(&ty, self.config.max_error_type_length))
            .with("value", self.cap(&value, self.config.max_error_value_length))
    }

    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        let ty = metadata.require(Self::KEY, "type")?.to_optional_string();
        let value = metadata.require(Self::KEY, "value")?.to_optional_string();
        let line = non_empty(value.as_deref().map(strip))
            .map(|value| self.config.truncate_title(first_line(value)));

        let title = match (non_empty(ty.as_deref().map(strip)), line) {
            (Some(ty), Some(line)) => format!("{ty}: {line}"),
            (Some(ty), None) => ty.to_string(),
            (None, Some(line)) => line.into_owned(),
            (None, None) => UNKNOWN_ERROR_TITLE.to_string(),
        };
        Ok(Some(title))
    }
}
