//! Pokemon record types.

pub mod model;
pub mod payload;
pub mod stat;

pub use model::{BaseStats, Language, Pokemon, PokemonName, PokemonSummary};
pub use payload::{CreatePokemon, UpdatePokemon};
pub use stat::Stat;
