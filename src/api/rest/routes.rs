//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{
    AppState, health, list_suppliers, search_transfers, update_supplier,
};
use axum::Router;
use axum::routing::{get, post, put};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the REST router with tracing and CORS layers.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/transfers/search", post(search_transfers))
        .route("/api/v1/suppliers", get(list_suppliers))
        .route("/api/v1/suppliers/{code}", put(update_supplier))
        .route("/api/v1/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
