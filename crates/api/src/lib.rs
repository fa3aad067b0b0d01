//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the upload service
//! - Application state
//! - Router assembly with tracing and CORS layers

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use docdrop_core::storage::StorageService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Storage service for uploaded files.
    pub storage: Arc<StorageService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::home::routes())
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
