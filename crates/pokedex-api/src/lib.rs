//! # pokedex-api
//!
//! HTTP API layer for the Pokedex catalog built on Axum.
//!
//! Provides the REST endpoints, extractors that turn malformed input into
//! validation errors, middleware (CORS, compression, tracing, request
//! logging, timeouts), static image serving, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
