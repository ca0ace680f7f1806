//! Filter builder: raw query parameters → typed filter → predicate.

use serde::Deserialize;

use pokedex_core::error::AppError;
use pokedex_core::result::AppResult;
use pokedex_core::types::Predicate;
use pokedex_entity::Stat;

/// The `type` document path.
const TYPE_PATH: &str = "type";

/// Filter query parameters exactly as received. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Comma-separated type names.
    pub types: Option<String>,
    #[serde(rename = "minHP")]
    pub min_hp: Option<String>,
    #[serde(rename = "maxHP")]
    pub max_hp: Option<String>,
    #[serde(rename = "minAttack")]
    pub min_attack: Option<String>,
    #[serde(rename = "maxAttack")]
    pub max_attack: Option<String>,
    #[serde(rename = "minDefense")]
    pub min_defense: Option<String>,
    #[serde(rename = "maxDefense")]
    pub max_defense: Option<String>,
    #[serde(rename = "minSpecialAttack")]
    pub min_special_attack: Option<String>,
    #[serde(rename = "maxSpecialAttack")]
    pub max_special_attack: Option<String>,
    #[serde(rename = "minSpecialDefense")]
    pub min_special_defense: Option<String>,
    #[serde(rename = "maxSpecialDefense")]
    pub max_special_defense: Option<String>,
    #[serde(rename = "minSpeed")]
    pub min_speed: Option<String>,
    #[serde(rename = "maxSpeed")]
    pub max_speed: Option<String>,
}

impl FilterParams {
    /// Raw `(min, max)` bounds for one statistic.
    pub fn bounds(&self, stat: Stat) -> (Option<&str>, Option<&str>) {
        let (min, max) = match stat {
            Stat::Hp => (&self.min_hp, &self.max_hp),
            Stat::Attack => (&self.min_attack, &self.max_attack),
            Stat::Defense => (&self.min_defense, &self.max_defense),
            Stat::SpecialAttack => (&self.min_special_attack, &self.max_special_attack),
            Stat::SpecialDefense => (&self.min_special_defense, &self.max_special_defense),
            Stat::Speed => (&self.min_speed, &self.max_speed),
        };
        (min.as_deref(), max.as_deref())
    }
}

/// Inclusive bounds on one statistic. At least one side is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRange {
    /// The statistic being bounded.
    pub stat: Stat,
    /// Lower bound, inclusive.
    pub min: Option<f64>,
    /// Upper bound, inclusive.
    pub max: Option<f64>,
}

/// A validated filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonFilter {
    /// Accepted types; a record matches if it has any of them.
    pub types: Vec<String>,
    /// Statistic ranges, all of which must hold.
    pub ranges: Vec<StatRange>,
}

impl PokemonFilter {
    /// Parse raw parameters, rejecting bounds that are not numbers.
    pub fn parse(params: &FilterParams) -> AppResult<Self> {
        let types = params
            .types
            .as_deref()
            .map(split_types)
            .unwrap_or_default();

        let mut ranges = Vec::new();
        for stat in Stat::ALL {
            let (min, max) = params.bounds(stat);
            let min = parse_bound(&format!("min{}", stat.field_name()), min)?;
            let max = parse_bound(&format!("max{}", stat.field_name()), max)?;
            if min.is_some() || max.is_some() {
                ranges.push(StatRange { stat, min, max });
            }
        }

        Ok(Self { types, ranges })
    }

    /// Whether no clause is active.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.ranges.is_empty()
    }

    /// The store predicate: type membership AND every range.
    pub fn to_predicate(&self) -> Predicate {
        let mut clauses = Vec::new();
        if !self.types.is_empty() {
            clauses.push(Predicate::in_strings(TYPE_PATH, self.types.clone()));
        }
        for range in &self.ranges {
            let path = range.stat.path();
            if let Some(min) = range.min {
                clauses.push(Predicate::gte(path.clone(), min));
            }
            if let Some(max) = range.max {
                clauses.push(Predicate::lte(path, max));
            }
        }
        Predicate::and(clauses)
    }
}

/// Split a comma list, trimming tokens and dropping empty ones.
fn split_types(raw: &str) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !types.iter().any(|t| t == token) {
            types.push(token.to_string());
        }
    }
    types
}

/// A blank bound counts as absent; anything else must be a finite number.
fn parse_bound(name: &str, raw: Option<&str>) -> AppResult<Option<f64>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(AppError::validation(format!(
            "Parameter '{name}' must be a number, got '{raw}'"
        ))),
    }
}
