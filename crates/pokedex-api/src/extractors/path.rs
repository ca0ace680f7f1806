//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use pokedex_core::error::AppError;

use crate::error::ApiError;

/// The logical record id from `/pokemon/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PokemonId(pub i64);

impl<S> FromRequestParts<S> for PokemonId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;
        Ok(Self(parse_id(&raw)?))
    }
}

/// Parse a record id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::validation(format!("Invalid pokemon id: {s}")))
}
