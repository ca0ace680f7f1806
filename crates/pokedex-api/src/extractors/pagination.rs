//! Pagination query parameters.

use serde::Deserialize;

use pokedex_core::types::PageRequest;
use pokedex_service::PokemonService;

/// Raw `page`/`limit` values. Invalid values fall back to the defaults
/// rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// Page number (1-based).
    pub page: Option<String>,
    /// Items per page.
    pub limit: Option<String>,
}

impl PageParams {
    /// Resolve against the service's configured page sizes.
    pub fn resolve(&self, service: &PokemonService) -> PageRequest {
        service.page_request(self.page.as_deref(), self.limit.as_deref())
    }
}
