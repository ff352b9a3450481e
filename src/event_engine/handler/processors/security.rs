// --- Security Report Event Types ---
// Browser security reports: CSP violations plus the certificate-related
// HPKP, Expect-CT and Expect-Staple reports. They share title and location
// rules; each kind only differs in which report fields it records.

use super::default::{logentry_message, UNTITLED};
use crate::core::common::strings::value_text;
use crate::core::common::{get_key_path, MetaValue, Metadata};
use crate::core::config::ExtractionConfig;
use crate::event_engine::handler::types::{EventType, EventTypeResult};
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Normalized form of a same-origin URI.
pub const LOCAL_URI: &str = "'self'";

static URI_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn uri_pattern() -> Option<&'static Regex> {
    URI_PATTERN
        .get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):(?://([^/?#]*))?").ok())
        .as_ref()
}

/// Reduces a blocked URI to the part worth grouping on.
///
/// Same-origin spellings collapse to `'self'`, bare schemes such as `data`
/// become `data:`, and http(s) URIs keep only their host.
#[must_use]
pub fn normalize_uri(value: &str) -> String {
    if value.is_empty() || value == LOCAL_URI || value == "self" {
        return LOCAL_URI.to_string();
    }
    if !value.contains(':') {
        return format!("{value}:");
    }
    let Some(captures) = uri_pattern().and_then(|pattern| pattern.captures(value)) else {
        return value.to_string();
    };
    let scheme = captures.get(1).map_or("", |m| m.as_str()).to_ascii_lowercase();
    let host = captures.get(2).map_or("", |m| m.as_str());
    if scheme == "http" || scheme == "https" {
        host.to_string()
    } else if host.is_empty() {
        format!("{scheme}:")
    } else {
        format!("{scheme}://{host}")
    }
}

/// Human-readable summary of a CSP violation when the report has no message.
#[must_use]
pub fn csp_message(directive: &str, uri: &str) -> String {
    let inline = uri == LOCAL_URI;
    let noun = match directive {
        "child-src" => Some("child"),
        "connect-src" => Some("connect"),
        "font-src" => Some("font"),
        "img-src" => Some("image"),
        "manifest-src" => Some("manifest"),
        "media-src" => Some("media"),
        "object-src" => Some("object"),
        "style-src" => Some("style"),
        _ => None,
    };
    match (directive, inline) {
        ("script-src", false) => format!("Blocked 'script' from '{uri}'"),
        ("script-src", true) => "Blocked unsafe (eval() or inline) 'script'".to_string(),
        ("form-action", false) => format!("Blocked 'form' action to '{uri}'"),
        ("unsafe-inline", true) => "Blocked unsafe inline 'script'".to_string(),
        ("unsafe-eval", true) => "Blocked unsafe eval() 'script'".to_string(),
        _ => match (noun, inline) {
            (Some(noun), false) => format!("Blocked '{noun}' from '{uri}'"),
            (Some(noun), true) => format!("Blocked inline '{noun}'"),
            (None, false) => format!("Blocked '{directive}' from '{uri}'"),
            (None, true) => format!("Blocked inline '{directive}'"),
        },
    }
}

fn security_title(config: &ExtractionConfig, metadata: &Metadata) -> Option<String> {
    let title = metadata
        .get_text("message")
        .or_else(|| metadata.get_text("title"))
        .unwrap_or(Cow::Borrowed(UNTITLED));
    Some(config.truncate_title(&title).into_owned())
}

fn security_location(metadata: &Metadata) -> Option<String> {
    metadata
        .get_text("uri")
        .or_else(|| metadata.get_text("origin"))
        .map(Cow::into_owned)
}

#[derive(Debug, Clone, Default)]
pub struct CspEvent {
    config: ExtractionConfig,
}

impl CspEvent {
    pub const KEY: &'static str = "csp";

    #[must_use]
    pub const fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }
}

impl EventType for CspEvent {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn get_metadata(&self, data: &Value) -> Metadata {
        let blocked = get_key_path(data, &["csp", "blocked_uri"]).and_then(value_text);
        let uri = normalize_uri(blocked.as_deref().unwrap_or(""));
        let directive = get_key_path(data, &["csp", "effective_directive"]);

        let mut message = logentry_message(data).into_owned();
        if message.is_empty() {
            let directive_text = directive.and_then(value_text);
            message = csp_message(directive_text.as_deref().unwrap_or("unknown"), &uri);
        }

        Metadata::with_capacity(3)
            .with("message", message)
            .with("uri", uri)
            .with("directive", MetaValue::from_optional_json(directive))
    }

    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(security_title(&self.config, metadata))
    }

    fn get_location(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(security_location(metadata))
    }
}

/// Reports identified by the hostname they were raised for.
#[derive(Debug, Clone)]
pub struct HostnameReportEvent {
    key: &'static str,
    failure: &'static str,
    config: ExtractionConfig,
}

impl HostnameReportEvent {
    pub const HPKP_KEY: &'static str = "hpkp";
    pub const EXPECT_CT_KEY: &'static str = "expectct";
    pub const EXPECT_STAPLE_KEY: &'static str = "expectstaple";

    #[must_use]
    pub const fn hpkp(config: ExtractionConfig) -> Self {
        Self { key: Self::HPKP_KEY, failure: "Public key pinning validation failed", config }
    }

    #[must_use]
    pub const fn expect_ct(config: ExtractionConfig) -> Self {
        Self { key: Self::EXPECT_CT_KEY, failure: "Expect-CT failed", config }
    }

    #[must_use]
    pub const fn expect_staple(config: ExtractionConfig) -> Self {
        Self { key: Self::EXPECT_STAPLE_KEY, failure: "Expect-Staple failed", config }
    }
}

impl EventType for HostnameReportEvent {
    fn key(&self) -> &'static str {
        self.key
    }

    fn get_metadata(&self, data: &Value) -> Metadata {
        let hostname = get_key_path(data, &[self.key, "hostname"]);

        let mut message = logentry_message(data).into_owned();
        if message.is_empty() {
            if let Some(host) = hostname.and_then(value_text) {
                message = format!("{} for '{}'", self.failure, host);
            }
        }

        Metadata::with_capacity(2)
            .with("message", message)
            .with("origin", MetaValue::from_optional_json(hostname))
    }

    fn get_title(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(security_title(&self.config, metadata))
    }

    fn get_location(&self, metadata: &Metadata) -> EventTypeResult<Option<String>> {
        Ok(security_location(metadata))
    }
}
