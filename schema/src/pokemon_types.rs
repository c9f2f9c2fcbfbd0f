use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl PokemonType {
    /// Human-readable label, as shown in roster listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Grass => "Grass",
        }
    }

    /// Storage tag (`"NORMAL"`, `"FIRE"`, ...). Parsing accepts any case.
    pub fn tag(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = PokemonType> {
        PokemonType::iter()
    }

    /// Calculate type effectiveness multiplier for attacking type vs defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective
    ///
    /// Fire and Normal attackers carry no matchup rules and always deal neutral damage.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            // Grass
            (Grass, Water) => 2.0,
            (Grass, Fire) | (Grass, Grass) => 0.5,
            (Grass, Normal) => 1.0,

            // Water
            (Water, Fire) => 2.0,
            (Water, Water) | (Water, Grass) => 0.5,
            (Water, Normal) => 1.0,

            (Fire, _) => 1.0,
            (Normal, _) => 1.0,
        }
    }

    pub fn is_super_effective(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) > 1.0
    }

    pub fn is_not_very_effective(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) < 1.0
    }
}
