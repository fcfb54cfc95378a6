//! Forwarding handler.
//!
//! Thin wrapper over the gateway: logs the exchange, records metrics and
//! lets `ApiError` render transport failures as `500 {"error": ...}`.

use std::time::Instant;

use axum::{extract::State, http::HeaderMap, Json};

use crate::error::ApiResult;
use crate::gateway::{ForwardRequest, ForwardResult};
use crate::http::request::{request_id, ApiJson};
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn forward(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<ForwardRequest>,
) -> ApiResult<Json<ForwardResult>> {
    let start = Instant::now();
    let request_id = request_id(&headers).to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method,
        url = %request.url,
        "Forwarding request"
    );

    match state.gateway.forward(request).await {
        Ok(result) => {
            metrics::record_forward(Some(result.status), start);
            tracing::debug!(
                request_id = %request_id,
                status = result.status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Upstream responded"
            );
            Ok(Json(result))
        }
        Err(e) => {
            metrics::record_forward(None, start);
            tracing::warn!(request_id = %request_id, error = %e, "Forwarding failed");
            Err(e)
        }
    }
}
