#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::panic)]
#![warn(clippy::arithmetic_side_effects)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::cast_possible_wrap)]
#![warn(clippy::cast_precision_loss)]
#![warn(clippy::cast_sign_loss)]
#![forbid(unsafe_code)]
#![deny(clippy::todo, clippy::module_inception, clippy::wildcard_imports, clippy::correctness, clippy::perf)]
#![warn(clippy::missing_const_for_fn, clippy::all, clippy::pedantic, clippy::nursery)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::wildcard_imports, clippy::missing_docs_in_private_items))]

//! # eventmeta: event classification and metadata normalization
//!
//! `eventmeta` turns raw, semi-structured event payloads (errors, transaction
//! traces, browser security reports, plain log messages) into a small flat
//! metadata record, and derives from it:
//! - a display title
//! - an optional location
//! - a search message for full-text indexing
//!
//! Extraction is pure and never fails on missing or malformed input; every
//! absent field degrades to a documented default.
//!
//! ```
//! use eventmeta::{default_registry, EventType};
//! use serde_json::json;
//!
//! let error = default_registry().get("error");
//! let metadata = error.get_metadata(&json!({
//!     "exception": {"values": [{"type": "KeyError", "value": "'id'\nmore"}]}
//! }));
//! assert_eq!(error.get_title(&metadata).unwrap().as_deref(), Some("KeyError: 'id'"));
//! ```

pub mod core;
pub mod event_engine;

// Re-export key types for easier use by library consumers
pub use crate::core::common::{EventTypeError, MetaValue, Metadata};
pub use crate::core::config::ExtractionConfig;
pub use event_engine::handler::{
    default_registry, get_event_type, summarize, EventSummary, EventType, EventTypeRegistry,
};

/// Core result type for the library
pub type Result<T> = std::result::Result<T, EventTypeError>;
