//! Catalog handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use pokedex_core::types::PageResponse;
use pokedex_entity::{CreatePokemon, Pokemon, PokemonSummary, UpdatePokemon};
use pokedex_service::FilterParams;

use crate::dto::DeleteResponse;
use crate::error::ApiError;
use crate::extractors::{PageParams, PokemonId, ValidJson, ValidQuery};
use crate::state::AppState;

/// Query of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    /// Term to look for in every name language.
    pub name: Option<String>,
}

/// Query of the batch lookup endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdsParams {
    /// Comma-separated ids.
    pub ids: Option<String>,
}

/// GET /pokemon?page=&limit=
pub async fn list_pokemon(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<PageResponse<Pokemon>>, ApiError> {
    let service = &state.pokemon_service;
    let page = service.list(params.resolve(service)).await?;
    Ok(Json(page))
}

/// GET /pokemon/search?name=
pub async fn search_pokemon(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SearchParams>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let records = state
        .pokemon_service
        .search(params.name.as_deref())
        .await?;
    Ok(Json(records))
}

/// GET /pokemon/filter?types=&minHP=&maxHP=...&page=&limit=
pub async fn filter_pokemon(
    State(state): State<AppState>,
    ValidQuery(page): ValidQuery<PageParams>,
    ValidQuery(filter): ValidQuery<FilterParams>,
) -> Result<Json<PageResponse<Pokemon>>, ApiError> {
    let service = &state.pokemon_service;
    let result = service.filter(&filter, page.resolve(service)).await?;
    Ok(Json(result))
}

/// GET /pokemon/by-ids?ids=1,2,3
pub async fn pokemon_by_ids(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<IdsParams>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let records = state
        .pokemon_service
        .find_by_ids(params.ids.as_deref())
        .await?;
    Ok(Json(records))
}

/// GET /pokemon/list-all
pub async fn list_all_pokemon(
    State(state): State<AppState>,
) -> Result<Json<Vec<PokemonSummary>>, ApiError> {
    Ok(Json(state.pokemon_service.list_all().await?))
}

/// GET /pokemon/{id}
pub async fn get_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> Result<Json<Pokemon>, ApiError> {
    Ok(Json(state.pokemon_service.get(id).await?))
}

/// POST /pokemon
pub async fn create_pokemon(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreatePokemon>,
) -> Result<(StatusCode, Json<Pokemon>), ApiError> {
    let created = state.pokemon_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /pokemon/{id}
pub async fn update_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
    ValidJson(patch): ValidJson<UpdatePokemon>,
) -> Result<Json<Pokemon>, ApiError> {
    Ok(Json(state.pokemon_service.update(id, patch).await?))
}

/// DELETE /pokemon/{id}
pub async fn delete_pokemon(
    State(state): State<AppState>,
    PokemonId(id): PokemonId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let record = state.pokemon_service.delete(id).await?;
    Ok(Json(DeleteResponse {
        message: "Pokemon deleted".to_string(),
        record,
    }))
}
