//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Dashboard
        .route("/stats", get(handlers::get_stats))
        // Resource CRUD
        .route("/resources", get(handlers::list_resources))
        .route("/resources", post(handlers::create_resource))
        .route("/resources/{id}", get(handlers::get_resource))
        .route("/resources/{id}", put(handlers::update_resource))
        .route("/resources/{id}", delete(handlers::delete_resource))
        .route("/resources/{id}/bookings", get(handlers::list_resource_bookings))
        // Booking lifecycle
        .route("/bookings", get(handlers::list_bookings))
        .route("/bookings", post(handlers::create_booking))
        .route("/bookings/{id}", get(handlers::get_booking))
        .route("/bookings/{id}", put(handlers::update_booking))
        .route("/bookings/{id}", delete(handlers::delete_booking))
        .route("/bookings/{id}/cancel", post(handlers::cancel_booking));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo =
            Arc::new(LocalRepository::new()) as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
