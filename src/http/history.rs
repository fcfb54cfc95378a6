//! History handlers.

use axum::{extract::State, Json};

use crate::history::{HistoryEntry, NewHistoryEntry};
use crate::http::request::{ApiJson, ApiPath};
use crate::http::server::AppState;
use crate::store::RecordId;

pub async fn list_history(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<RecordId>,
) -> Json<Vec<HistoryEntry>> {
    Json(state.history.list(user_id))
}

pub async fn append_history(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewHistoryEntry>,
) -> Json<HistoryEntry> {
    Json(state.history.append(new))
}
