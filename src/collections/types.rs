//! Collection and saved-request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::RecordId;

/// A user-owned, named group of saved requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: RecordId,
    pub user_id: RecordId,
    pub name: String,
    pub requests: Vec<SavedRequest>,
    pub created_at: DateTime<Utc>,
}

/// A request definition stored inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequest {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    pub method: String,
    pub headers: Map<String, Value>,
    pub params: Map<String, Value>,
    pub body: Value,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollection {
    pub user_id: RecordId,
    pub name: String,
}

/// Payload for adding a request to a collection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestSpec {
    pub name: String,
    pub url: String,
    pub method: String,
    pub headers: Map<String, Value>,
    pub params: Map<String, Value>,
    pub body: Value,
}
