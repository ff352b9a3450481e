// src/core/config.rs

use crate::core::common::strings::DEFAULT_TRUNCATION_MARKER;
use crate::core::common::EventTypeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Extraction limits shared by the event types.
///
/// Every field has a default so a partial TOML file is enough to override
/// a single limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum title length in characters, marker included.
    pub max_title_length: usize,
    /// Appended to any text that had to be cut.
    pub truncation_marker: String,
    /// Cap on an error's `type` field.
    pub max_error_type_length: usize,
    /// Cap on an error's `value` field.
    pub max_error_value_length: usize,
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExtractionConfigBuilder {
    max_title_length: Option<usize>,
    truncation_marker: Option<String>,
    max_error_type_length: Option<usize>,
    max_error_value_length: Option<usize>,
}

impl ExtractionConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum title length
    #[must_use]
    pub fn max_title_length(mut self, length: usize) -> Self {
        self.max_title_length = Some(length);
        self
    }

    /// Sets the truncation marker
    #[must_use]
    pub fn truncation_marker(mut self, marker: impl Into<String>) -> Self {
        self.truncation_marker = Some(marker.into());
        self
    }

    #[must_use]
    pub fn max_error_type_length(mut self, length: usize) -> Self {
        self.max_error_type_length = Some(length);
        self
    }

    #[must_use]
    pub fn max_error_value_length(mut self, length: usize) -> Self {
        self.max_error_value_length = Some(length);
        self
    }

    /// Builds the config and validates it.
    ///
    /// # Errors
    ///
    /// Returns `EventTypeError::Configuration` when a limit cannot hold the marker.
    pub fn build(self) -> Result<ExtractionConfig, EventTypeError> {
        let defaults = ExtractionConfig::default();
        let config = ExtractionConfig {
            max_title_length: self.max_title_length.unwrap_or(defaults.max_title_length),
            truncation_marker: self.truncation_marker.unwrap_or(defaults.truncation_marker),
            max_error_type_length: self
                .max_error_type_length
                .unwrap_or(defaults.max_error_type_length),
            max_error_value_length: self
                .max_error_value_length
                .unwrap_or(defaults.max_error_value_length),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            truncation_marker: DEFAULT_TRUNCATION_MARKER.to_string(),
            max_error_type_length: 128,
            max_error_value_length: 1024,
        }
    }
}

impl ExtractionConfig {
    #[must_use]
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::new()
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `EventTypeError::Configuration` describing the first bad limit.
    pub fn validate(&self) -> Result<(), EventTypeError> {
        let marker_len = self.truncation_marker.chars().count();

        if self.max_title_length <= marker_len {
            return Err(EventTypeError::Configuration(format!(
                "max_title_length ({}) must be greater than the truncation marker length ({})",
                self.max_title_length, marker_len
            )));
        }

        if self.max_error_type_length < marker_len {
            return Err(EventTypeError::Configuration(
                "max_error_type_length must be at least the truncation marker length".to_string(),
            ));
        }

        if self.max_error_value_length < marker_len {
            return Err(EventTypeError::Configuration(
                "max_error_value_length must be at least the truncation marker length".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `EventTypeError::Configuration` if parsing or validation fails
    /// and `EventTypeError::Io` for other read failures.
    pub fn load_from_file(path: &Path) -> Result<Self, EventTypeError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    EventTypeError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                config.validate()?;
                tracing::debug!(path = %path.display(), "loaded extraction config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(EventTypeError::Io(e)),
        }
    }

    /// Loads from `optional_path` when given, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`load_from_file`](Self::load_from_file).
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, EventTypeError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Truncates `text` to the title limit.
    #[must_use]
    pub fn truncate_title<'a>(&self, text: &'a str) -> std::borrow::Cow<'a, str> {
        crate::core::common::strings::truncate_chars(
            text,
            self.max_title_length,
            &self.truncation_marker,
        )
    }
}
