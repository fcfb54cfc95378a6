//! History record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::RecordId;

/// One executed request/response exchange, as retained by the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: RecordId,
    pub user_id: RecordId,
    pub url: String,
    pub method: String,
    pub headers: Map<String, Value>,
    pub params: Map<String, Value>,
    /// Request payload as sent by the client. Opaque.
    pub body: Value,
    /// Response payload as observed by the client. Opaque.
    pub response: Value,
    pub timestamp: DateTime<Utc>,
}

/// Payload of an append: everything except the id and timestamp.
///
/// `userId` is required; the remaining fields default when omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub user_id: RecordId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: Map<String, Value>,
    #[serde(default)]
    pub params: Map<String, Value>,
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub response: Value,
}

impl NewHistoryEntry {
    /// Minimal entry for `user_id`, mostly for seeding and tests.
    pub fn for_user(user_id: RecordId, url: impl Into<String>) -> Self {
        Self {
            user_id,
            url: url.into(),
            method: "GET".to_string(),
            headers: Map::new(),
            params: Map::new(),
            body: Value::Null,
            response: Value::Null,
        }
    }
}
