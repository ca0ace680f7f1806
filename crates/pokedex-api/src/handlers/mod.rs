//! HTTP handlers.

pub mod health;
pub mod pokemon;

use pokedex_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unknown routes.
pub async fn route_not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}
