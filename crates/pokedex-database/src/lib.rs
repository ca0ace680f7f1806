//! # pokedex-database
//!
//! The record store behind the catalog. [`RecordStore`] is the
//! store-agnostic contract (find/count/insert/find-and-replace/
//! find-and-delete); [`PgRecordStore`] implements it on PostgreSQL and
//! [`MemoryRecordStore`] in process memory. Both evaluate the same
//! [`pokedex_core::types::Predicate`] semantics.

pub mod connection;
pub mod memory;
pub mod provider;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryRecordStore;
pub use provider::connect_store;
pub use repositories::PgRecordStore;
pub use store::{FindOptions, RecordStore};
