//! Store selection from configuration.

use std::sync::Arc;

use tracing::info;

use pokedex_core::config::{DatabaseConfig, StoreProvider};
use pokedex_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryRecordStore;
use crate::repositories::PgRecordStore;
use crate::schema::ensure_schema;
use crate::store::RecordStore;

/// Open the configured record store. Connection or bootstrap failures are
/// returned to the caller, which treats them as fatal.
pub async fn connect_store(config: &DatabaseConfig) -> AppResult<Arc<dyn RecordStore>> {
    match config.provider {
        StoreProvider::Postgres => {
            let pool = DatabasePool::connect(config).await?;
            ensure_schema(pool.pool()).await?;
            Ok(Arc::new(PgRecordStore::new(pool.into_pool())))
        }
        StoreProvider::Memory => {
            info!("Using in-memory record store");
            Ok(Arc::new(MemoryRecordStore::new()))
        }
    }
}
