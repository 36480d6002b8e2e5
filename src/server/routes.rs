// src/server/routes.rs
//! Axum router configuration for the cookbook server

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{SharedStore, handlers};

/// Create the main application router
pub fn create_router(store: SharedStore) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Name normalization
        .route("/parse", post(handlers::parse_name))
        // Entry registration
        .route("/entry", post(handlers::create_entry))
        // Summary queries (ingredient or recipe)
        .route("/summary", get(handlers::get_summary))
        .with_state(store)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookbook::CookbookStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(Arc::new(RwLock::new(CookbookStore::new())));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
