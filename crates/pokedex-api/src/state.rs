//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use pokedex_core::config::AppConfig;
use pokedex_database::RecordStore;
use pokedex_service::PokemonService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Catalog service.
    pub pokemon_service: Arc<PokemonService>,
}

impl AppState {
    /// Build the state around an open record store.
    pub fn new(config: AppConfig, store: Arc<dyn RecordStore>) -> Self {
        let pokemon_service = PokemonService::new(store, config.catalog.clone());
        Self {
            config: Arc::new(config),
            pokemon_service: Arc::new(pokemon_service),
        }
    }
}
