//! Pokemon table access.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use pokedex_core::error::{AppError, ErrorKind};
use pokedex_core::result::AppResult;
use pokedex_core::types::Predicate;
use pokedex_entity::{BaseStats, Pokemon, PokemonName};

use super::query::{push_predicate, sort_column};
use crate::store::{FindOptions, RecordStore};

/// Columns selected for a full record, in [`PokemonRow`] order.
const COLUMNS: &str = "id, name_english, name_french, name_japanese, name_chinese, types, \
                       hp, attack, defense, special_attack, special_defense, speed, image";

/// One row of the `pokemon` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct PokemonRow {
    id: i64,
    name_english: String,
    name_french: String,
    name_japanese: String,
    name_chinese: String,
    types: Vec<String>,
    hp: i32,
    attack: i32,
    defense: i32,
    special_attack: i32,
    special_defense: i32,
    speed: i32,
    image: String,
}

impl From<PokemonRow> for Pokemon {
    fn from(row: PokemonRow) -> Self {
        Self {
            id: row.id,
            name: PokemonName {
                english: row.name_english,
                french: row.name_french,
                japanese: row.name_japanese,
                chinese: row.name_chinese,
            },
            types: row.types,
            base: BaseStats {
                hp: row.hp,
                attack: row.attack,
                defense: row.defense,
                special_attack: row.special_attack,
                special_defense: row.special_defense,
                speed: row.speed,
            },
            image: row.image,
        }
    }
}

/// [`RecordStore`] over the PostgreSQL `pokemon` table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Create a store over an open pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Borrow the pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Append `id = (SELECT id ... first match in id order)`.
fn push_first_match(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) -> AppResult<()> {
    qb.push("id = (SELECT id FROM pokemon WHERE ");
    push_predicate(qb, predicate)?;
    qb.push(" ORDER BY id ASC LIMIT 1)");
    Ok(())
}

fn push_values(qb: &mut QueryBuilder<'_, Postgres>, pokemon: &Pokemon) {
    let mut values = qb.separated(", ");
    values
        .push_bind(pokemon.id)
        .push_bind(pokemon.name.english.clone())
        .push_bind(pokemon.name.french.clone())
        .push_bind(pokemon.name.japanese.clone())
        .push_bind(pokemon.name.chinese.clone())
        .push_bind(pokemon.types.clone())
        .push_bind(pokemon.base.hp)
        .push_bind(pokemon.base.attack)
        .push_bind(pokemon.base.defense)
        .push_bind(pokemon.base.special_attack)
        .push_bind(pokemon.base.special_defense)
        .push_bind(pokemon.base.speed)
        .push_bind(pokemon.image.clone());
}

/// `BIGINT` value for a row count; counts past `i64::MAX` saturate.
fn sql_count(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Append `LIMIT`/`OFFSET` for the requested window.
fn push_window(qb: &mut QueryBuilder<'_, Postgres>, options: &FindOptions) {
    if let Some(limit) = options.limit {
        qb.push(" LIMIT ").push_bind(sql_count(limit));
    }
    if options.skip > 0 {
        qb.push(" OFFSET ").push_bind(sql_count(options.skip));
    }
}

/// Map a write failure, turning unique violations into conflicts.
fn write_error(id: i64, context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        let duplicate = matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
        if duplicate {
            AppError::with_source(
                ErrorKind::Conflict,
                format!("Pokemon with id {id} already exists"),
                e,
            )
        } else {
            AppError::with_source(ErrorKind::Database, context, e)
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn find(&self, predicate: &Predicate, options: &FindOptions) -> AppResult<Vec<Pokemon>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM pokemon WHERE "));
        push_predicate(&mut qb, predicate)?;

        if let Some(sort) = &options.sort {
            qb.push(" ORDER BY ")
                .push(sort_column(&sort.field)?)
                .push(" ")
                .push(sort.direction.as_sql());
        }
        push_window(&mut qb, options);

        let rows = qb
            .build_query_as::<PokemonRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query pokemon", e))?;
        Ok(rows.into_iter().map(Pokemon::from).collect())
    }

    async fn count(&self, predicate: &Predicate) -> AppResult<u64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM pokemon WHERE ");
        push_predicate(&mut qb, predicate)?;

        let total: i64 = qb
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pokemon", e))?;
        Ok(total.max(0) as u64)
    }

    async fn insert(&self, pokemon: &Pokemon) -> AppResult<Pokemon> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("INSERT INTO pokemon ({COLUMNS}) VALUES ("));
        push_values(&mut qb, pokemon);
        qb.push(format!(") RETURNING {COLUMNS}"));

        qb.build_query_as::<PokemonRow>()
            .fetch_one(&self.pool)
            .await
            .map(Pokemon::from)
            .map_err(write_error(pokemon.id, "Failed to insert pokemon"))
    }

    async fn find_one_and_replace(
        &self,
        predicate: &Predicate,
        replacement: &Pokemon,
    ) -> AppResult<Option<Pokemon>> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("UPDATE pokemon SET ({COLUMNS}) = ROW("));
        push_values(&mut qb, replacement);
        qb.push(") WHERE ");
        push_first_match(&mut qb, predicate)?;
        qb.push(format!(" RETURNING {COLUMNS}"));

        let row = qb
            .build_query_as::<PokemonRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(write_error(replacement.id, "Failed to update pokemon"))?;
        Ok(row.map(Pokemon::from))
    }

    async fn find_one_and_delete(&self, predicate: &Predicate) -> AppResult<Option<Pokemon>> {
        let mut qb = QueryBuilder::<Postgres>::new("DELETE FROM pokemon WHERE ");
        push_first_match(&mut qb, predicate)?;
        qb.push(format!(" RETURNING {COLUMNS}"));

        let row = qb
            .build_query_as::<PokemonRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pokemon", e))?;
        Ok(row.map(Pokemon::from))
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
