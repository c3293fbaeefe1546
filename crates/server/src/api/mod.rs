pub mod documents;
pub mod health;
pub mod index;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use depot_service::DocumentService;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The document service instance.
    pub service: Arc<DocumentService>,
}

/// Build the Axum router with all API routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Homepage with upload form
        .route("/", get(index::index))
        // Health check
        .route("/health", get(health::health))
        // File upload endpoint
        .route("/upload", post(documents::upload))
        // List all uploaded documents
        .route("/documents", get(documents::list))
        // Download a document by id
        .route("/dl/{id}", get(documents::download))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
