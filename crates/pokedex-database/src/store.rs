//! The record store contract.

use async_trait::async_trait;

use pokedex_core::result::AppResult;
use pokedex_core::types::{PageRequest, Predicate, SortField};
use pokedex_entity::Pokemon;

/// Path of the logical record key.
pub const ID_FIELD: &str = "id";

/// Sorting and windowing for [`RecordStore::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    /// Sort order; store order is unspecified when absent.
    pub sort: Option<SortField>,
    /// Number of matching records to skip.
    pub skip: u64,
    /// Maximum number of records to return.
    pub limit: Option<u64>,
}

impl FindOptions {
    /// All matches, ordered by id ascending.
    pub fn by_id() -> Self {
        Self {
            sort: Some(SortField::asc(ID_FIELD)),
            ..Self::default()
        }
    }

    /// One page of matches, ordered by id ascending.
    pub fn page(request: PageRequest) -> Self {
        Self {
            sort: Some(SortField::asc(ID_FIELD)),
            skip: request.offset(),
            limit: Some(request.limit),
        }
    }

    /// Only the first record of the given order.
    pub fn first(sort: SortField) -> Self {
        Self {
            sort: Some(sort),
            skip: 0,
            limit: Some(1),
        }
    }
}

/// A persistent collection of records addressed by their logical `id`.
///
/// Single-document operations are atomic; nothing else is. The
/// replace/delete operations act on the first match in id order.
#[async_trait]
pub trait RecordStore: Send + Sync + std::fmt::Debug + 'static {
    /// Records matching `predicate`, sorted and windowed by `options`.
    async fn find(&self, predicate: &Predicate, options: &FindOptions) -> AppResult<Vec<Pokemon>>;

    /// Number of records matching `predicate`.
    async fn count(&self, predicate: &Predicate) -> AppResult<u64>;

    /// Insert a new record. Fails with a conflict if the id is taken.
    async fn insert(&self, pokemon: &Pokemon) -> AppResult<Pokemon>;

    /// Replace the first matching record, returning the stored replacement.
    async fn find_one_and_replace(
        &self,
        predicate: &Predicate,
        replacement: &Pokemon,
    ) -> AppResult<Option<Pokemon>>;

    /// Delete the first matching record, returning it.
    async fn find_one_and_delete(&self, predicate: &Predicate) -> AppResult<Option<Pokemon>>;

    /// Check that the store is reachable.
    async fn ping(&self) -> AppResult<()>;

    /// First record in the given order.
    async fn find_one(
        &self,
        predicate: &Predicate,
        sort: SortField,
    ) -> AppResult<Option<Pokemon>> {
        let mut found = self.find(predicate, &FindOptions::first(sort)).await?;
        Ok(if found.is_empty() {
            None
        } else {
            Some(found.swap_remove(0))
        })
    }
}
