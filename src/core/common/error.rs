// src/core/common/error.rs
//! Error type shared by the extraction engine.
//!
//! Extraction itself never fails: every absent field degrades to a default.
//! The variants below cover the remaining failure classes: metadata handed to
//! the wrong variant, and configuration loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventTypeError {
    /// Metadata did not come from the variant's own `get_metadata`.
    #[error("Contract violation: metadata for '{key}' is missing required field '{field}'")]
    ContractViolation { key: String, field: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Serialization/Deserialization Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EventTypeError {
    /// Builds a `ContractViolation` for `key` missing `field`.
    #[must_use]
    pub fn missing_field(key: &str, field: &str) -> Self {
        tracing::warn!(event_type = key, field, "metadata missing required field");
        Self::ContractViolation { key: key.to_string(), field: field.to_string() }
    }

    /// Returns `true` for programming errors in call sequencing.
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}
