//! Table bootstrap for the PostgreSQL store.

use sqlx::PgPool;
use tracing::info;

use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;

/// Idempotent DDL run at startup, in order.
pub const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS pokemon (
        id              BIGINT PRIMARY KEY CHECK (id > 0),
        name_english    TEXT NOT NULL,
        name_french     TEXT NOT NULL,
        name_japanese   TEXT NOT NULL,
        name_chinese    TEXT NOT NULL,
        types           TEXT[] NOT NULL,
        hp              INTEGER NOT NULL,
        attack          INTEGER NOT NULL,
        defense         INTEGER NOT NULL,
        special_attack  INTEGER NOT NULL,
        special_defense INTEGER NOT NULL,
        speed           INTEGER NOT NULL,
        image           TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS pokemon_types_idx ON pokemon USING GIN (types)",
    "CREATE INDEX IF NOT EXISTS pokemon_name_english_idx ON pokemon (lower(name_english))",
];

/// Create the `pokemon` table and its indexes if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> AppResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to bootstrap schema", e)
        })?;
    }
    info!("Database schema ready");
    Ok(())
}
