//! In-memory record store for single-process deployments and tests.
//!
//! Records live in a `BTreeMap` keyed by id behind a Tokio `RwLock`.
//! Every operation takes the lock once, so single-record operations are
//! atomic with respect to each other.

mod eval;

pub use eval::{compare_values, evaluate, resolve};

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::Predicate;
use pokedex_entity::Pokemon;

use crate::store::{FindOptions, RecordStore};

/// A stored record and its JSON form, kept together so predicates do not
/// re-serialize on every scan.
#[derive(Debug, Clone)]
struct Entry {
    record: Pokemon,
    doc: Value,
}

impl Entry {
    fn new(record: Pokemon) -> AppResult<Self> {
        let doc = serde_json::to_value(&record)?;
        Ok(Self { record, doc })
    }
}

/// Record store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<BTreeMap<i64, Entry>>>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn first_match(records: &BTreeMap<i64, Entry>, predicate: &Predicate) -> Option<i64> {
    records
        .iter()
        .find(|(_, entry)| evaluate(predicate, &entry.doc))
        .map(|(id, _)| *id)
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn find(&self, predicate: &Predicate, options: &FindOptions) -> AppResult<Vec<Pokemon>> {
        let records = self.records.read().await;
        let mut matches: Vec<&Entry> = records
            .values()
            .filter(|entry| evaluate(predicate, &entry.doc))
            .collect();

        if let Some(sort) = &options.sort {
            matches.sort_by(|a, b| {
                let ordering = compare_values(
                    resolve(&a.doc, &sort.field),
                    resolve(&b.doc, &sort.field),
                );
                sort.direction.apply(ordering)
            });
        }

        let skip = usize::try_from(options.skip).unwrap_or(usize::MAX);
        let limit = options
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(matches
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(|entry| entry.record.clone())
            .collect())
    }

    async fn count(&self, predicate: &Predicate) -> AppResult<u64> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|entry| evaluate(predicate, &entry.doc))
            .count() as u64)
    }

    async fn insert(&self, pokemon: &Pokemon) -> AppResult<Pokemon> {
        let entry = Entry::new(pokemon.clone())?;
        let mut records = self.records.write().await;
        if records.contains_key(&pokemon.id) {
            return Err(AppError::conflict(format!(
                "Pokemon with id {} already exists",
                pokemon.id
            )));
        }
        records.insert(pokemon.id, entry);
        debug!(id = pokemon.id, "Inserted record");
        Ok(pokemon.clone())
    }

    async fn find_one_and_replace(
        &self,
        predicate: &Predicate,
        replacement: &Pokemon,
    ) -> AppResult<Option<Pokemon>> {
        let entry = Entry::new(replacement.clone())?;
        let mut records = self.records.write().await;
        let Some(id) = first_match(&records, predicate) else {
            return Ok(None);
        };
        if replacement.id != id && records.contains_key(&replacement.id) {
            return Err(AppError::conflict(format!(
                "Pokemon with id {} already exists",
                replacement.id
            )));
        }
        records.remove(&id);
        records.insert(replacement.id, entry);
        Ok(Some(replacement.clone()))
    }

    async fn find_one_and_delete(&self, predicate: &Predicate) -> AppResult<Option<Pokemon>> {
        let mut records = self.records.write().await;
        let removed = first_match(&records, predicate)
            .and_then(|id| records.remove(&id))
            .map(|entry| entry.record);
        Ok(removed)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
