//! Write payloads: creation and partial update.

use serde::Deserialize;
use validator::Validate;

use pokedex_core::error::AppError;

use super::model::{BaseStats, Pokemon, PokemonName, validate_types};

/// Body of a creation request. The id is never taken from the client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePokemon {
    /// Name in each of the four languages.
    #[validate(nested)]
    pub name: PokemonName,
    /// Category list.
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_types"))]
    pub types: Vec<String>,
    /// Base battle statistics.
    #[validate(nested)]
    pub base: BaseStats,
    /// Image URL; derived from the allocated id when omitted.
    #[serde(default)]
    pub image: Option<String>,
}

impl CreatePokemon {
    /// Build the record for an allocated id.
    pub fn into_pokemon(self, id: i64, default_image: impl FnOnce(i64) -> String) -> Pokemon {
        let image = match self.image {
            Some(image) if !image.trim().is_empty() => image,
            _ => default_image(id),
        };
        Pokemon {
            id,
            name: self.name,
            types: self.types,
            base: self.base,
            image,
        }
    }
}

/// Body of an update request. Absent fields keep their current value;
/// present fields replace the whole value (a `name` must carry all four
/// languages, a `base` all six statistics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePokemon {
    /// Optional id; must equal the addressed record's id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Replacement name.
    #[serde(default)]
    pub name: Option<PokemonName>,
    /// Replacement category list.
    #[serde(default, rename = "type")]
    pub types: Option<Vec<String>>,
    /// Replacement statistics.
    #[serde(default)]
    pub base: Option<BaseStats>,
    /// Replacement image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl UpdatePokemon {
    /// Merge this patch onto `current` and validate the resulting document.
    ///
    /// A blank `image` is replaced by `default_image(id)`, as on creation.
    pub fn apply(
        self,
        current: &Pokemon,
        default_image: impl FnOnce(i64) -> String,
    ) -> Result<Pokemon, AppError> {
        if let Some(id) = self.id {
            if id != current.id {
                return Err(AppError::validation(format!(
                    "id is immutable: cannot change {} to {id}",
                    current.id
                )));
            }
        }

        let updated = Pokemon {
            id: current.id,
            name: self.name.unwrap_or_else(|| current.name.clone()),
            types: self.types.unwrap_or_else(|| current.types.clone()),
            base: self.base.unwrap_or(current.base),
            image: match self.image {
                Some(image) if image.trim().is_empty() => default_image(current.id),
                Some(image) => image,
                None => current.image.clone(),
            },
        };
        updated.validate()?;
        Ok(updated)
    }
}
