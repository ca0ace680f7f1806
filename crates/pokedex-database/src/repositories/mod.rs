//! PostgreSQL-backed record store.

pub mod pokemon;
pub mod query;

pub use pokemon::PgRecordStore;
