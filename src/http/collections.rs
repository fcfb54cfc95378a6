//! Collection CRUD handlers.

use axum::{extract::State, Json};

use crate::collections::{Collection, NewCollection, RequestSpec, SavedRequest};
use crate::error::ApiResult;
use crate::http::request::{ApiJson, ApiPath};
use crate::http::response::MessageBody;
use crate::http::server::AppState;
use crate::store::RecordId;

pub async fn list_collections(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<RecordId>,
) -> Json<Vec<Collection>> {
    Json(state.collections.list_by_user(user_id))
}

pub async fn create_collection(
    State(state): State<AppState>,
    ApiJson(new): ApiJson<NewCollection>,
) -> Json<Collection> {
    Json(state.collections.create(new.user_id, &new.name))
}

pub async fn add_request(
    State(state): State<AppState>,
    ApiPath(collection_id): ApiPath<RecordId>,
    ApiJson(spec): ApiJson<RequestSpec>,
) -> ApiResult<Json<SavedRequest>> {
    let request = state.collections.add_request(collection_id, spec)?;
    Ok(Json(request))
}

pub async fn delete_collection(
    State(state): State<AppState>,
    ApiPath(collection_id): ApiPath<RecordId>,
) -> Json<MessageBody> {
    if state.collections.delete(collection_id).is_none() {
        tracing::debug!(collection_id, "Delete of unknown collection");
    }
    Json(MessageBody::new("Collection deleted"))
}
