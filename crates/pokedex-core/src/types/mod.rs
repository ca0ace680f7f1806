//! Core type definitions used across the Pokedex workspace.

pub mod filter;
pub mod pagination;
pub mod sorting;

pub use filter::{FilterField, FilterOp, FilterValue, LIKE_ESCAPE, LikePattern, Predicate};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
