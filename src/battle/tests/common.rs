use crate::pokemon::Pokemon;
use schema::PokemonType;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(PokemonType::Grass)
///     .with_attack(4.0)
///     .with_speed(5.0)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    pokemon_type: PokemonType,
    name: String,
    health: f64,
    attack: f64,
    defense: f64,
    speed: f64,
}

impl TestPokemonBuilder {
    /// Creates a new builder with health 10 and every other stat 1.
    pub fn new(pokemon_type: PokemonType) -> Self {
        Self {
            pokemon_type,
            name: format!("Test{}", pokemon_type),
            health: 10.0,
            attack: 1.0,
            defense: 1.0,
            speed: 1.0,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    pub fn with_attack(mut self, attack: f64) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: f64) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn build(self) -> Pokemon {
        match Pokemon::create_by_type(
            self.pokemon_type,
            self.name,
            self.health,
            self.attack,
            self.defense,
            self.speed,
        ) {
            Ok(pokemon) => pokemon,
            Err(err) => panic!("Failed to build test Pokemon: {}", err),
        }
    }
}
