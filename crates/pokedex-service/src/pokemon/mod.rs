//! Catalog services: filtering, search, batch lookup, id allocation, CRUD.

pub mod allocator;
pub mod filter;
pub mod lookup;
pub mod search;
pub mod service;

pub use allocator::IdAllocator;
pub use filter::{FilterParams, PokemonFilter, StatRange};
pub use service::PokemonService;
