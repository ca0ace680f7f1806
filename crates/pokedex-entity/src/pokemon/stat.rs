//! The six base statistics and their document paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six base battle statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// Hit points.
    #[serde(rename = "HP")]
    Hp,
    /// Physical attack.
    Attack,
    /// Physical defense.
    Defense,
    /// Special attack.
    SpecialAttack,
    /// Special defense.
    SpecialDefense,
    /// Speed.
    Speed,
}

impl Stat {
    /// Every statistic, in document order.
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Key of this statistic inside the `base` object.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "SpecialAttack",
            Self::SpecialDefense => "SpecialDefense",
            Self::Speed => "Speed",
        }
    }

    /// Dotted document path, e.g. `base.HP`.
    pub fn path(&self) -> String {
        format!("base.{}", self.field_name())
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Stat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stat| stat.field_name() == s)
            .ok_or_else(|| format!("Unknown statistic '{s}'"))
    }
}
