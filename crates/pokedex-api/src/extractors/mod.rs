//! Custom Axum extractors.
//!
//! Axum's stock rejections answer with plain text and 415/422 codes; these
//! wrappers turn every rejection into a validation error instead.

pub mod json;
pub mod pagination;
pub mod path;
pub mod query;

pub use json::ValidJson;
pub use pagination::PageParams;
pub use path::PokemonId;
pub use query::ValidQuery;
