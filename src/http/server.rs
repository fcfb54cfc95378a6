//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request id, tracing, CORS, body limit)
//! - Bind server to listener
//! - Stop on Ctrl+C/SIGTERM or an explicit shutdown broadcast

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::accounts::UserStore;
use crate::collections::CollectionStore;
use crate::config::{CorsConfig, ServerConfig};
use crate::gateway::ForwardingGateway;
use crate::history::HistoryLedger;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};
use crate::http::{auth, collections, history, proxy};
use crate::lifecycle::signals::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub collections: Arc<CollectionStore>,
    pub history: Arc<HistoryLedger>,
    pub gateway: ForwardingGateway,
}

impl AppState {
    /// In-memory state sized by the configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            users: Arc::new(UserStore::in_memory()),
            collections: Arc::new(CollectionStore::in_memory()),
            history: Arc::new(HistoryLedger::in_memory(config.history.max_entries_per_user)),
            gateway: ForwardingGateway::new(),
        }
    }
}

/// HTTP server for the api-tester backend.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with fresh in-memory state.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server over existing state (e.g. custom stores).
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/api/auth/register", post(auth::register))
            .route("/api/auth/login", post(auth::login))
            .route("/api/collections", post(collections::create_collection))
            .route(
                "/api/collections/{id}",
                get(collections::list_collections).delete(collections::delete_collection),
            )
            .route("/api/collections/{id}/requests", post(collections::add_request))
            .route("/api/history", post(history::append_history))
            .route("/api/history/{user_id}", get(history::list_history))
            .route("/api/proxy", post(proxy::forward))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(cors_layer(&config.cors)),
            )
    }

    /// The fully layered router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            history_cap = self.config.history.max_entries_per_user,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Liveness text served at `/`.
async fn root() -> &'static str {
    "Backend is running..."
}

/// CORS policy from the configured allow-list.
///
/// Wildcards and unparsable entries are skipped; validation reports them.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| Method::from_bytes(m.as_bytes()).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(methods)
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
}
