//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod health;
pub mod home;
pub mod upload;

/// Creates the router nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(upload::routes())
}
