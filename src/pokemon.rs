use crate::errors::{ConstructionError, ConstructionResult};
use ordered_float::OrderedFloat;
use schema::{PokemonRecord, PokemonType};
use std::fmt;
use std::str::FromStr;

/// A user-defined creature: a name, four combat stats and one type tag.
///
/// Stats are stored as `OrderedFloat` so that equality and hashing cover every
/// scalar attribute plus the type. The factory rejects non-finite values, so
/// the total order never has to rank a NaN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pokemon {
    name: String,
    health: OrderedFloat<f64>,
    attack: OrderedFloat<f64>,
    defense: OrderedFloat<f64>,
    speed: OrderedFloat<f64>,
    pokemon_type: PokemonType,
}

impl Pokemon {
    /// Build a creature for the given type tag, validating every field.
    pub fn create_by_type(
        pokemon_type: PokemonType,
        name: impl Into<String>,
        health: f64,
        attack: f64,
        defense: f64,
        speed: f64,
    ) -> ConstructionResult<Self> {
        let name = validate_name(name.into())?;
        Ok(Self {
            name,
            health: finite_stat("health", health)?,
            attack: finite_stat("attack", attack)?,
            defense: finite_stat("defense", defense)?,
            speed: finite_stat("speed", speed)?,
            pokemon_type,
        })
    }

    /// Same as [`Pokemon::create_by_type`], but takes the type as a tag
    /// (`"GRASS"`, `"grass"`, ...).
    pub fn create_by_type_name(
        type_tag: &str,
        name: impl Into<String>,
        health: f64,
        attack: f64,
        defense: f64,
        speed: f64,
    ) -> ConstructionResult<Self> {
        let pokemon_type = PokemonType::from_str(type_tag.trim())
            .map_err(|_| ConstructionError::UnknownType(type_tag.to_string()))?;
        Self::create_by_type(pokemon_type, name, health, attack, defense, speed)
    }

    /// Rebuild a creature from a persisted row.
    pub fn from_record(record: &PokemonRecord) -> ConstructionResult<Self> {
        Self::create_by_type_name(
            &record.type_tag,
            record.name.clone(),
            record.health,
            record.attack,
            record.defense,
            record.speed,
        )
    }

    /// Flatten into a persisted row with the given sequential id.
    pub fn to_record(&self, id: usize) -> PokemonRecord {
        PokemonRecord {
            id,
            name: self.name.clone(),
            health: self.health(),
            attack: self.attack(),
            defense: self.defense(),
            speed: self.speed(),
            type_tag: self.pokemon_type.tag().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> f64 {
        self.health.into_inner()
    }

    pub fn attack(&self) -> f64 {
        self.attack.into_inner()
    }

    pub fn defense(&self) -> f64 {
        self.defense.into_inner()
    }

    pub fn speed(&self) -> f64 {
        self.speed.into_inner()
    }

    pub fn pokemon_type(&self) -> PokemonType {
        self.pokemon_type
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ConstructionResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn set_health(&mut self, health: f64) -> ConstructionResult<()> {
        self.health = finite_stat("health", health)?;
        Ok(())
    }

    pub fn set_attack(&mut self, attack: f64) -> ConstructionResult<()> {
        self.attack = finite_stat("attack", attack)?;
        Ok(())
    }

    pub fn set_defense(&mut self, defense: f64) -> ConstructionResult<()> {
        self.defense = finite_stat("defense", defense)?;
        Ok(())
    }

    pub fn set_speed(&mut self, speed: f64) -> ConstructionResult<()> {
        self.speed = finite_stat("speed", speed)?;
        Ok(())
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.pokemon_type)
    }
}

fn validate_name(name: String) -> ConstructionResult<String> {
    if name.trim().is_empty() {
        return Err(ConstructionError::EmptyName);
    }
    Ok(name)
}

fn finite_stat(stat: &'static str, value: f64) -> ConstructionResult<OrderedFloat<f64>> {
    if !value.is_finite() {
        return Err(ConstructionError::NonFiniteStat { stat, value });
    }
    Ok(OrderedFloat(value))
}
