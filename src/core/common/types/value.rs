use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single metadata value.
///
/// Metadata is flat: text, numbers or null. `Bytes` exists for callers that
/// hand in raw byte strings; it is rendered with lossy UTF-8 decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl MetaValue {
    /// Converts a payload value into a metadata value.
    ///
    /// Booleans and containers become their compact JSON text.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::Text(n.to_string())),
            serde_json::Value::Bool(_)
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Self::Text(value.to_string()),
        }
    }

    /// Same as [`from_json`](Self::from_json) but maps an absent value to `Null`.
    #[must_use]
    pub fn from_optional_json(value: Option<&serde_json::Value>) -> Self {
        value.map_or(Self::Null, Self::from_json)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Display form used for titles and search text.
    ///
    /// Never fails: undecodable bytes are replaced with U+FFFD and `Null`
    /// renders as the empty string.
    #[must_use]
    pub fn to_display_string(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Bytes(bytes) => String::from_utf8_lossy(bytes),
        }
    }

    /// Display text, or `None` when the value is null.
    #[must_use]
    pub fn to_optional_string(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_display_string().into_owned())
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl<T: Into<Self>> From<Option<T>> for MetaValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
