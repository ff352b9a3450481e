// --- Transaction Event Type ---
// Performance traces. Title comes from the trace description, location from
// the transaction name, and the timestamps ride along for display only.

use crate::core::common::{get_key_path, MetaValue, Metadata};
use crate::event_engine::handler::types::{
    accumulate_search_message, EventType, EventTypeResult,
};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionEvent;

impl TransactionEvent {
    pub const KEY: &'static str = "transaction";
}

/// `null` and `""` count as absent when choosing between title sources.
fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.as_str().map_or(true, |s| !s.is_empty())
}

impl EventType for TransactionEvent {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn get_metadata(&self, data: &Value) -> Metadata {
        let description = get_key_path(data, &["contexts", "trace", "description"]);
        let transaction = get_key_path(data, &["transaction"]);
        let title = description.filter(|value| is_present(value)).or(transaction);

        Metadata::with_capacity(4)
            .with("title", MetaValue::from_optional_json(title))
            .with("location", MetaValue::from_optional_json(transaction))
            .with("startTimestamp", MetaValue::from_optional_json(get_key_path(data, &["start_timestamp"])))
            .with("timestamp", MetaValue::from_optional_json(get_key_path(data, &["timestamp"])))
    }

    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(metadata.require(Self::KEY, "title")?.to_optional_string())
    }

    fn get_location(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(metadata.require(Self::KEY, "location")?.to_optional_string())
    }

    /// Only title and location are indexed; timestamps would flood the
    /// index with unique tokens.
    fn build_search_message(&self, seed: &str, metadata: &Metadata) -> EventTypeResult<String> {
        let title = metadata.require(Self::KEY, "title")?;
        let location = metadata.require(Self::KEY, "location")?;
        Ok(accumulate_search_message(seed, [title, location]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TIMESTAMP: f64 = 1_571_234_567.125;

    fn full_payload() -> Value {
        json!({
            "contexts": {
                "trace": {
                    "type": "trace",
                    "parent_span_id": null,
                    "trace_id": "deadbeef",
                    "description": "/api/version"
                }
            },
            "transaction": "api_version",
            "start_timestamp": TIMESTAMP,
            "timestamp": TIMESTAMP + 2.0,
        })
    }

    #[test]
    fn test_get_metadata() {
        let inst = TransactionEvent;
        let expected = Metadata::new()
            .with("title", "/api/version")
            .with("location", "api_version")
            .with("startTimestamp", TIMESTAMP)
            .with("timestamp", TIMESTAMP + 2.0);
        assert_eq!(inst.get_metadata(&full_payload()), expected);
    }

    #[test]
    fn test_get_metadata_none() {
        let inst = TransactionEvent;
        let metadata = inst.get_metadata(&json!({}));
        let keys: Vec<&str> = metadata.keys().collect();
        assert_eq!(keys, vec!["title", "location", "startTimestamp", "timestamp"]);
        assert!(metadata.values().all(MetaValue::is_null));
    }

    #[test]
    fn test_title_falls_back_to_transaction() {
        let inst = TransactionEvent;
        let data = json!({"contexts": {"trace": {}}, "transaction": "checkout"});
        let metadata = inst.get_metadata(&data);
        assert_eq!(metadata.get("title"), Some(&MetaValue::from("checkout")));
        assert_eq!(metadata.get("location"), Some(&MetaValue::from("checkout")));

        let data = json!({"contexts": {"trace": {"description": ""}}, "transaction": "checkout"});
        assert_eq!(inst.get_metadata(&data).get("title"), Some(&MetaValue::from("checkout")));
    }

    #[test]
    fn test_location_is_independent_of_title() {
        let inst = TransactionEvent;
        let data = json!({"contexts": {"trace": {"description": "GET /users"}}});
        let metadata = inst.get_metadata(&data);
        assert_eq!(inst.get_title(&metadata).unwrap().as_deref(), Some("GET /users"));
        assert_eq!(inst.get_location(&metadata).unwrap(), None);
    }

    #[test]
    fn test_get_title_and_location() {
        let inst = TransactionEvent;
        let metadata = inst.get_metadata(&full_payload());
        assert_eq!(inst.get_title(&metadata).unwrap().as_deref(), Some("/api/version"));
        assert_eq!(inst.get_location(&metadata).unwrap().as_deref(), Some("api_version"));

        let empty = inst.get_metadata(&json!({}));
        assert_eq!(inst.get_title(&empty).unwrap(), None);
        assert_eq!(inst.get_location(&empty).unwrap(), None);
    }

    #[test]
    fn test_foreign_metadata_is_a_contract_violation() {
        let inst = TransactionEvent;
        let foreign = Metadata::new().with("type", "Error").with("value", "");
        assert!(inst.get_title(&foreign).unwrap_err().is_contract_violation());
        assert!(inst.get_location(&foreign).unwrap_err().is_contract_violation());
        assert!(inst.build_search_message("", &foreign).unwrap_err().is_contract_violation());
    }

    #[test]
    fn test_build_search_message() {
        let inst = TransactionEvent;
        let metadata = Metadata::new()
            .with("title", "/api/version")
            .with("location", "api_version")
            .with("startTimestamp", TIMESTAMP)
            .with("timestamp", TIMESTAMP + 2.0);
        let result = inst.build_search_message("", &metadata).unwrap();
        assert!(result.contains("/api/version"));
        assert!(result.contains("api_version"));
        assert!(!result.contains(&TIMESTAMP.to_string()));
        assert!(!result.contains(&(TIMESTAMP + 2.0).to_string()));
        assert!(!result.contains("1571234567"));
    }

    #[test]
    fn test_build_search_message_with_integer_timestamps() {
        let inst = TransactionEvent;
        let metadata = inst.get_metadata(&json!({
            "transaction": "worker.run",
            "start_timestamp": 1_600_000_000,
            "timestamp": 1_600_000_005
        }));
        let result = inst.build_search_message("seed", &metadata).unwrap();
        assert_eq!(result, "seed worker.run");
    }
}
