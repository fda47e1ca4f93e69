/// Application routes configuration
use crate::handlers::{get_snapshot, health, home, page, photos, refresh_snapshot, AppState};
use axum::{routing::get, Router};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Site pages
        .route("/", get(home))
        .route("/photos", get(photos))
        // Health check
        .route("/health", get(health))
        // Snapshot endpoints
        .route("/api/snapshot", get(get_snapshot))
        .route("/api/refresh", get(refresh_snapshot))
        // Any other named page
        .route("/:page", get(page))
        .with_state(state)
}
