use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Categories
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:category/titles", get(handlers::category_titles))
        .route("/categories/:category/validate", get(handlers::validate))
        // Picking
        .route("/categories/:category/random", get(handlers::random_from_category))
        .route("/categories/:category/picks", get(handlers::picks))
        .route("/random", get(handlers::random_movie))
        // Lookup
        .route("/movies/:title", get(handlers::movie_details))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
