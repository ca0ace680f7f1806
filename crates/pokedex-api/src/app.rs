//! Application builder: router, middleware and static assets.

use std::time::Duration;

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let config = state.config.clone();
    let images = ServeDir::new(&config.catalog.image_dir);

    build_router(state)
        .nest_service(&config.catalog.images_route, images)
        .layer(build_compression_layer())
        .layer(build_cors_layer(&config.server.cors))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}
