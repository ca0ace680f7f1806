//! Batch id parsing.

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;

/// Parse a comma-separated id list.
///
/// Tokens that are not integers are dropped; duplicates are removed. An
/// absent parameter is a validation error, an empty or fully invalid one
/// yields an empty list.
pub fn parse_id_list(raw: Option<&str>) -> AppResult<Vec<i64>> {
    let raw = raw.ok_or_else(|| AppError::missing_parameter("ids"))?;
    let mut ids: Vec<i64> = raw
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}
