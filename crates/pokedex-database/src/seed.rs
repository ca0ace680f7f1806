//! Bulk import of catalog records from JSON.
//!
//! The input is an array of documents in the classic pokedex layout:
//! `id`, `name`, `type`, `base` and an optional `image`. Statistic keys
//! may use either `SpecialAttack` or `Sp. Attack` spelling.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use pokedex_core::config::CatalogConfig;
use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;
use pokedex_core::types::Predicate;
use pokedex_entity::{CreatePokemon, Pokemon};

use crate::store::RecordStore;

/// One document of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedRecord {
    /// Explicit record id.
    pub id: i64,
    /// Everything but the id.
    #[serde(flatten)]
    pub body: CreatePokemon,
}

impl SeedRecord {
    /// Build the validated record, deriving the image URL when absent.
    pub fn into_pokemon(self, catalog: &CatalogConfig) -> AppResult<Pokemon> {
        let id = self.id;
        let pokemon = self.body.into_pokemon(id, |id| catalog.image_url(id));
        pokemon.validate().map_err(|e| {
            let err = AppError::from(e);
            AppError::validation(format!("Seed record {id}: {}", err.message))
        })?;
        Ok(pokemon)
    }
}

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Records written.
    pub inserted: u64,
    /// Records left alone because their id already existed.
    pub skipped: u64,
}

/// Parse a seed file.
pub async fn read_seed_file(path: impl AsRef<Path>) -> AppResult<Vec<SeedRecord>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Internal,
            format!("Failed to read seed file {}", path.display()),
            e,
        )
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid seed file {}: {e}", path.display()),
            e,
        )
    })
}

/// Insert `records` one by one.
///
/// With `skip_existing`, id conflicts are counted and skipped; otherwise
/// the first conflict aborts the import (earlier inserts stay).
pub async fn import_records(
    store: &dyn RecordStore,
    records: Vec<SeedRecord>,
    catalog: &CatalogConfig,
    skip_existing: bool,
) -> AppResult<ImportReport> {
    let mut report = ImportReport::default();
    for record in records {
        let pokemon = record.into_pokemon(catalog)?;
        match store.insert(&pokemon).await {
            Ok(_) => report.inserted += 1,
            Err(e) if e.is_conflict() && skip_existing => {
                warn!(id = pokemon.id, "Skipping existing record");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Import `catalog.seed_file` when configured and the store is empty.
pub async fn seed_if_empty(
    store: &dyn RecordStore,
    catalog: &CatalogConfig,
) -> AppResult<Option<ImportReport>> {
    let Some(path) = catalog.seed_file.as_deref().filter(|p| !p.trim().is_empty()) else {
        return Ok(None);
    };

    let existing = store.count(&Predicate::All).await?;
    if existing > 0 {
        info!(existing, "Store already populated, skipping seed");
        return Ok(None);
    }

    let records = read_seed_file(path).await?;
    let report = import_records(store, records, catalog, true).await?;
    info!(
        file = %path,
        inserted = report.inserted,
        skipped = report.skipped,
        "Seeded catalog"
    );
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRecordStore;
    use serde_json::json;

    fn classic_records() -> Vec<SeedRecord> {
        serde_json::from_value(json!([
            {
                "id": 1,
                "name": { "english": "Bulbasaur", "french": "Bulbizarre",
                          "japanese": "フシギダネ", "chinese": "妙蛙种子" },
                "type": ["Grass", "Poison"],
                "base": { "HP": 45, "Attack": 49, "Defense": 49,
                          "Sp. Attack": 65, "Sp. Defense": 65, "Speed": 45 }
            },
            {
                "id": 4,
                "name": { "english": "Charmander", "french": "Salamèche",
                          "japanese": "ヒトカゲ", "chinese": "小火龙" },
                "type": ["Fire"],
                "base": { "HP": 39, "Attack": 52, "Defense": 43,
                          "SpecialAttack": 60, "SpecialDefense": 50, "Speed": 65 },
                "image": "https://img.example/4.png"
            }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_import_derives_missing_images() {
        let store = MemoryRecordStore::new();
        let catalog = CatalogConfig::default();
        let report = import_records(&store, classic_records(), &catalog, false)
            .await
            .unwrap();
        assert_eq!(report, ImportReport { inserted: 2, skipped: 0 });

        let all = store
            .find(&Predicate::All, &crate::store::FindOptions::by_id())
            .await
            .unwrap();
        assert_eq!(all[0].image, "http://localhost:3000/images/1.png");
        assert_eq!(all[0].base.special_attack, 65);
        assert_eq!(all[1].image, "https://img.example/4.png");
    }

    #[tokio::test]
    async fn test_import_conflicts() {
        let store = MemoryRecordStore::new();
        let catalog = CatalogConfig::default();
        import_records(&store, classic_records(), &catalog, false)
            .await
            .unwrap();

        let skipped = import_records(&store, classic_records(), &catalog, true)
            .await
            .unwrap();
        assert_eq!(skipped, ImportReport { inserted: 0, skipped: 2 });

        let err = import_records(&store, classic_records(), &catalog, false)
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_seed_if_empty_reads_file_once() {
        let path = std::env::temp_dir().join(format!("pokedex-seed-{}.json", std::process::id()));
        let body = serde_json::to_string(&json!([{
            "id": 7,
            "name": { "english": "Squirtle", "french": "Carapuce",
                      "japanese": "ゼニガメ", "chinese": "杰尼龟" },
            "type": ["Water"],
            "base": { "HP": 44, "Attack": 48, "Defense": 65,
                      "Sp. Attack": 50, "Sp. Defense": 64, "Speed": 43 }
        }]))
        .unwrap();
        tokio::fs::write(&path, body).await.unwrap();

        let catalog = CatalogConfig {
            seed_file: Some(path.to_string_lossy().into_owned()),
            ..CatalogConfig::default()
        };
        let store = MemoryRecordStore::new();

        let first = seed_if_empty(&store, &catalog).await.unwrap();
        assert_eq!(first, Some(ImportReport { inserted: 1, skipped: 0 }));
        let second = seed_if_empty(&store, &catalog).await.unwrap();
        assert_eq!(second, None);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_record_is_rejected() {
        let mut records = classic_records();
        records[0].body.types.clear();
        let store = MemoryRecordStore::new();
        let err = import_records(&store, records, &CatalogConfig::default(), false)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.starts_with("Seed record 1"));
    }
}
