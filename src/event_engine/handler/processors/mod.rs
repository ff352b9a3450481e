// src/event_engine/handler/processors/mod.rs

// One module per event kind. Each implements `EventType` for the payloads of
// that kind; kinds with shared rules (the security reports) share a module.

pub mod default;
pub mod error;
pub mod security;
pub mod transaction;

pub use default::DefaultEvent;
pub use error::ErrorEvent;
pub use security::{CspEvent, HostnameReportEvent};
pub use transaction::TransactionEvent;
