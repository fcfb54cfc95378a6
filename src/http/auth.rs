//! Registration and login handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::accounts::{Credentials, UserSummary};
use crate::error::ApiResult;
use crate::http::request::ApiJson;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserSummary,
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state.users.register(&credentials.email, &credentials.password)?;
    Ok(Json(AuthResponse {
        message: "User registered successfully".to_string(),
        user: UserSummary::from(&user),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .users
        .authenticate(&credentials.email, &credentials.password)?;
    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: UserSummary::from(&user),
    }))
}
