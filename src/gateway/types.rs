//! Forwarding request/result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A request to relay to an arbitrary upstream. Never persisted.
///
/// Deserialization is lenient: a missing or `null` field takes its default
/// and non-string header values are stringified, so a bad target surfaces
/// from the gateway as a transport failure rather than as a body rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardRequest {
    /// Absolute target URL. Empty when the caller sent none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// HTTP verb. Missing, `null` and `""` all mean GET.
    #[serde(default = "default_method", deserialize_with = "method_or_get")]
    pub method: String,

    /// Headers passed through to the upstream unmodified.
    #[serde(default, deserialize_with = "stringified_headers")]
    pub headers: BTreeMap<String, String>,

    /// JSON payload, sent only for POST, PUT and PATCH.
    #[serde(default)]
    pub body: Option<Value>,
}

fn default_method() -> String {
    "GET".to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn method_or_get<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|m| !m.is_empty())
        .unwrap_or_else(default_method))
}

fn stringified_headers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => (name, s),
            other => (name, other.to_string()),
        })
        .collect())
}

impl ForwardRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// What the upstream answered, relayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResult {
    pub status: u16,
    /// Reason phrase the upstream sent, or the canonical one for `status`.
    pub status_text: String,
    /// Lower-cased header names; repeated headers joined with ", ".
    pub headers: BTreeMap<String, String>,
    /// Raw response body as text. Never parsed.
    pub body: String,
}
