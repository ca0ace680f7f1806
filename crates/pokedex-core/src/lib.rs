//! # pokedex-core
//!
//! Core crate for the Pokedex catalog service. Contains configuration
//! schemas, the store-agnostic predicate model, pagination/sorting types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Pokedex crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
