//! # pokedex-service
//!
//! Business logic for the catalog. Request parameters arrive as raw
//! strings, are parsed into typed filters here, and become store
//! predicates. [`PokemonService`] owns the record store handle and the
//! single-writer [`IdAllocator`].

pub mod pokemon;

pub use pokemon::{FilterParams, IdAllocator, PokemonFilter, PokemonService};
