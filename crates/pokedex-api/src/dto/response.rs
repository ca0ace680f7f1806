//! Response DTOs.

use serde::{Deserialize, Serialize};

use pokedex_entity::Pokemon;

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Confirmation text.
    pub message: String,
    /// The record as it was before deletion.
    pub record: Pokemon,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub store: String,
}
