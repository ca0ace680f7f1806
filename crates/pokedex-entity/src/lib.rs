//! # pokedex-entity
//!
//! Domain model for the catalog: the [`Pokemon`] record, its multilingual
//! name and base statistics, the listing projection, and the create/update
//! payloads validated at the write boundary.

pub mod pokemon;

pub use pokemon::{
    BaseStats, CreatePokemon, Language, Pokemon, PokemonName, PokemonSummary, Stat,
    UpdatePokemon,
};
