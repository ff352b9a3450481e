// src/event_engine/handler/mod.rs

// Per-kind metadata extraction, decomposed the same way as the rest of the
// engine:
// - "types.rs": the `EventType` contract and the summary record
// - "core.rs": key → kind dispatch and the end-to-end summarize flow
// - "processors/": one implementation per event kind
// - "tests.rs": cross-kind checks through the registry

pub mod core;
pub mod processors;
pub mod types;

pub use self::core::{default_registry, get_event_type, summarize, EventTypeRegistry};
pub use self::processors::{CspEvent, DefaultEvent, ErrorEvent, HostnameReportEvent, TransactionEvent};
pub use self::types::{accumulate_search_message, EventSummary, EventType, EventTypeResult};
