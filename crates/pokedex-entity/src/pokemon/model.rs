//! Pokemon entity model.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::stat::Stat;

/// One catalog record.
///
/// `id` is the logical key used by every single-record operation. It is
/// assigned once at creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Pokemon {
    /// Logical identifier, unique across live records.
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i64,
    /// Name in each of the four languages.
    #[validate(nested)]
    pub name: PokemonName,
    /// Category list (e.g. `["Fire", "Flying"]`). Order is preserved.
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_types"))]
    pub types: Vec<String>,
    /// Base battle statistics.
    #[validate(nested)]
    pub base: BaseStats,
    /// Image URL.
    pub image: String,
}

impl Pokemon {
    /// The listing projection of this record.
    pub fn summary(&self) -> PokemonSummary {
        PokemonSummary {
            id: self.id,
            name: SummaryName {
                english: self.name.english.clone(),
            },
            types: self.types.clone(),
            image: self.image.clone(),
        }
    }
}

/// Name of a record in each supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PokemonName {
    /// English name.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub english: String,
    /// French name.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub french: String,
    /// Japanese name.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub japanese: String,
    /// Chinese name.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub chinese: String,
}

impl PokemonName {
    /// The name in the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::French => &self.french,
            Language::Japanese => &self.japanese,
            Language::Chinese => &self.chinese,
        }
    }
}

/// The six base statistics.
///
/// `Sp. Attack` and `Sp. Defense` are accepted as input aliases so that
/// classic pokedex data files import unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BaseStats {
    /// Hit points.
    #[serde(rename = "HP")]
    #[validate(range(min = 0))]
    pub hp: i32,
    /// Physical attack.
    #[serde(rename = "Attack")]
    #[validate(range(min = 0))]
    pub attack: i32,
    /// Physical defense.
    #[serde(rename = "Defense")]
    #[validate(range(min = 0))]
    pub defense: i32,
    /// Special attack.
    #[serde(rename = "SpecialAttack", alias = "Sp. Attack")]
    #[validate(range(min = 0))]
    pub special_attack: i32,
    /// Special defense.
    #[serde(rename = "SpecialDefense", alias = "Sp. Defense")]
    #[validate(range(min = 0))]
    pub special_defense: i32,
    /// Speed.
    #[serde(rename = "Speed")]
    #[validate(range(min = 0))]
    pub speed: i32,
}

impl BaseStats {
    /// Value of one statistic.
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }
}

/// One of the four languages a name is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    English,
    /// French.
    French,
    /// Japanese.
    Japanese,
    /// Chinese.
    Chinese,
}

impl Language {
    /// Every language, in document order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Japanese,
        Language::Chinese,
    ];

    /// Key of this language inside the `name` object.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::French => "french",
            Self::Japanese => "japanese",
            Self::Chinese => "chinese",
        }
    }

    /// Dotted document path, e.g. `name.english`.
    pub fn path(&self) -> String {
        format!("name.{}", self.field_name())
    }
}

/// Projection returned by the list-all endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// Logical identifier.
    pub id: i64,
    /// English name only.
    pub name: SummaryName,
    /// Category list.
    #[serde(rename = "type")]
    pub types: Vec<String>,
    /// Image URL.
    pub image: String,
}

/// Name subset carried by [`PokemonSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryName {
    /// English name.
    pub english: String,
}

/// A record needs at least one type, and no type may be blank.
pub(crate) fn validate_types(types: &[String]) -> Result<(), ValidationError> {
    if types.is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("at least one type is required".into());
        return Err(err);
    }
    if types.iter().any(|t| t.trim().is_empty()) {
        let mut err = ValidationError::new("blank");
        err.message = Some("types must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur() -> serde_json::Value {
        json!({
            "id": 1,
            "name": {
                "english": "Bulbasaur",
                "french": "Bulbizarre",
                "japanese": "フシギダネ",
                "chinese": "妙蛙种子"
            },
            "type": ["Grass", "Poison"],
            "base": {
                "HP": 45,
                "Attack": 49,
                "Defense": 49,
                "SpecialAttack": 65,
                "SpecialDefense": 65,
                "Speed": 45
            },
            "image": "http://localhost:3000/images/1.png"
        })
    }

    #[test]
    fn test_deserialize_and_validate() {
        let pokemon: Pokemon = serde_json::from_value(bulbasaur()).unwrap();
        assert!(pokemon.validate().is_ok());
        assert_eq!(pokemon.base.get(Stat::SpecialAttack), 65);
        assert_eq!(pokemon.name.get(Language::French), "Bulbizarre");
    }

    #[test]
    fn test_serialize_uses_document_keys() {
        let pokemon: Pokemon = serde_json::from_value(bulbasaur()).unwrap();
        let value = serde_json::to_value(&pokemon).unwrap();
        assert_eq!(value, bulbasaur());
    }

    #[test]
    fn test_classic_stat_aliases() {
        let base: BaseStats = serde_json::from_value(json!({
            "HP": 39, "Attack": 52, "Defense": 43,
            "Sp. Attack": 60, "Sp. Defense": 50, "Speed": 65
        }))
        .unwrap();
        assert_eq!(base.special_attack, 60);
        assert_eq!(base.special_defense, 50);
    }

    #[test]
    fn test_missing_stat_fails_to_deserialize() {
        let mut doc = bulbasaur();
        doc["base"].as_object_mut().unwrap().remove("Speed");
        assert!(serde_json::from_value::<Pokemon>(doc).is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name_and_empty_types() {
        let mut pokemon: Pokemon = serde_json::from_value(bulbasaur()).unwrap();
        pokemon.name.chinese.clear();
        pokemon.types.clear();
        let errors = pokemon.validate().unwrap_err();
        let fields = errors.errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("types") || fields.contains_key("type"));
    }

    #[test]
    fn test_summary_projection() {
        let pokemon: Pokemon = serde_json::from_value(bulbasaur()).unwrap();
        let summary = serde_json::to_value(pokemon.summary()).unwrap();
        assert_eq!(
            summary,
            json!({
                "id": 1,
                "name": { "english": "Bulbasaur" },
                "type": ["Grass", "Poison"],
                "image": "http://localhost:3000/images/1.png"
            })
        );
    }
}
