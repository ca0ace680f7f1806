//! Route definitions for the catalog HTTP API.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the router with every catalog route and the health check.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(pokemon_routes())
        .merge(health_routes())
        .fallback(handlers::route_not_found)
        .with_state(state)
}

/// Catalog listing, search, filtering and CRUD.
fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/pokemon",
            get(handlers::pokemon::list_pokemon).post(handlers::pokemon::create_pokemon),
        )
        .route("/pokemon/search", get(handlers::pokemon::search_pokemon))
        .route("/pokemon/filter", get(handlers::pokemon::filter_pokemon))
        .route("/pokemon/by-ids", get(handlers::pokemon::pokemon_by_ids))
        .route("/pokemon/list-all", get(handlers::pokemon::list_all_pokemon))
        .route(
            "/pokemon/{id}",
            get(handlers::pokemon::get_pokemon)
                .put(handlers::pokemon::update_pokemon)
                .delete(handlers::pokemon::delete_pokemon),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
