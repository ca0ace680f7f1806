//! Catalog use cases over a [`RecordStore`].

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use pokedex_core::config::CatalogConfig;
use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::{PageRequest, PageResponse, Predicate, SortField};
use pokedex_database::store::ID_FIELD;
use pokedex_database::{FindOptions, RecordStore};
use pokedex_entity::{CreatePokemon, Pokemon, PokemonSummary, UpdatePokemon};

use super::allocator::IdAllocator;
use super::filter::{FilterParams, PokemonFilter};
use super::lookup::parse_id_list;
use super::search::name_predicate;

/// Attempts made by [`PokemonService::create`] when the allocated id is taken.
const CREATE_ATTEMPTS: usize = 2;

/// Catalog service: every HTTP and CLI operation goes through here.
#[derive(Debug, Clone)]
pub struct PokemonService {
    store: Arc<dyn RecordStore>,
    allocator: IdAllocator,
    catalog: CatalogConfig,
}

impl PokemonService {
    /// Create the service and start its id allocator.
    pub fn new(store: Arc<dyn RecordStore>, catalog: CatalogConfig) -> Self {
        let allocator = IdAllocator::spawn(Arc::clone(&store));
        Self {
            store,
            allocator,
            catalog,
        }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Resolve raw `page`/`limit` values with the configured defaults.
    pub fn page_request(&self, page: Option<&str>, limit: Option<&str>) -> PageRequest {
        PageRequest::from_raw(
            page,
            limit,
            self.catalog.default_page_size,
            self.catalog.max_page_size,
        )
    }

    /// One page of the whole catalog.
    pub async fn list(&self, page: PageRequest) -> AppResult<PageResponse<Pokemon>> {
        self.paginate(&Predicate::All, page).await
    }

    /// One page of records matching the filter parameters.
    pub async fn filter(
        &self,
        params: &FilterParams,
        page: PageRequest,
    ) -> AppResult<PageResponse<Pokemon>> {
        let predicate = PokemonFilter::parse(params)?.to_predicate();
        self.paginate(&predicate, page).await
    }

    /// Records whose name contains `term` in any language, by id.
    pub async fn search(&self, term: Option<&str>) -> AppResult<Vec<Pokemon>> {
        let predicate = name_predicate(term)?;
        self.store.find(&predicate, &FindOptions::by_id()).await
    }

    /// Records for a comma-separated id list, by id. Invalid ids are ignored.
    pub async fn find_by_ids(&self, raw: Option<&str>) -> AppResult<Vec<Pokemon>> {
        let ids = parse_id_list(raw)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.store
            .find(&Predicate::in_ints(ID_FIELD, ids), &FindOptions::by_id())
            .await
    }

    /// The listing projection of every record, by id.
    pub async fn list_all(&self) -> AppResult<Vec<PokemonSummary>> {
        let records = self
            .store
            .find(&Predicate::All, &FindOptions::by_id())
            .await?;
        Ok(records.iter().map(Pokemon::summary).collect())
    }

    /// The record with logical id `id`.
    pub async fn get(&self, id: i64) -> AppResult<Pokemon> {
        self.store
            .find_one(&Predicate::eq_int(ID_FIELD, id), SortField::asc(ID_FIELD))
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate, allocate an id, default the image, and persist.
    pub async fn create(&self, body: CreatePokemon) -> AppResult<Pokemon> {
        body.validate()?;

        let mut attempt = 0;
        loop {
            attempt += 1;
            let id = self.allocator.next().await?;
            let pokemon = body
                .clone()
                .into_pokemon(id, |id| self.catalog.image_url(id));
            pokemon.validate()?;

            match self.store.insert(&pokemon).await {
                Ok(created) => {
                    info!(pokemon_id = created.id, name = %created.name.english, "Pokemon created");
                    return Ok(created);
                }
                Err(e) if e.is_conflict() && attempt < CREATE_ATTEMPTS => {
                    warn!(pokemon_id = id, "Allocated id already taken, retrying");
                    self.allocator.invalidate().await?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Merge `patch` onto the stored record, re-validate, and replace it.
    pub async fn update(&self, id: i64, patch: UpdatePokemon) -> AppResult<Pokemon> {
        let current = self.get(id).await?;
        let updated = patch.apply(&current, |id| self.catalog.image_url(id))?;

        let stored = self
            .store
            .find_one_and_replace(&Predicate::eq_int(ID_FIELD, id), &updated)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(pokemon_id = id, "Pokemon updated");
        Ok(stored)
    }

    /// Delete the record, returning it.
    pub async fn delete(&self, id: i64) -> AppResult<Pokemon> {
        let deleted = self
            .store
            .find_one_and_delete(&Predicate::eq_int(ID_FIELD, id))
            .await?
            .ok_or_else(|| not_found(id))?;

        info!(pokemon_id = id, "Pokemon deleted");
        Ok(deleted)
    }

    async fn paginate(
        &self,
        predicate: &Predicate,
        page: PageRequest,
    ) -> AppResult<PageResponse<Pokemon>> {
        let total = self.store.count(predicate).await?;
        let items = self.store.find(predicate, &FindOptions::page(page)).await?;
        Ok(PageResponse::new(items, page, total))
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Pokemon {id} not found"))
}
