use crate::errors::{CombatError, CombatResult};
use crate::pokemon::Pokemon;
use schema::PokemonType;

/// Matchup multiplier for one attacker hitting one defender.
pub fn type_multiplier(attacker: &Pokemon, defender: &Pokemon) -> f64 {
    PokemonType::type_effectiveness(attacker.pokemon_type(), defender.pokemon_type())
}

/// Damage `attacker` deals to `defender` in a single exchange:
/// `attack / defense`, scaled by the type matchup.
///
/// Fails when the defender's defense is zero or negative instead of producing
/// an infinite or sign-flipped value.
pub fn damage(attacker: &Pokemon, defender: &Pokemon) -> CombatResult<f64> {
    let defense = defender.defense();
    if defense <= 0.0 {
        return Err(CombatError::NonPositiveDefense {
            name: defender.name().to_string(),
            defense,
        });
    }

    let base = attacker.attack() / defense;
    Ok(base * type_multiplier(attacker, defender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pokemon(pokemon_type: PokemonType, attack: f64, defense: f64) -> Pokemon {
        Pokemon::create_by_type(pokemon_type, "Test", 10.0, attack, defense, 1.0).unwrap()
    }

    #[rstest]
    #[case("grass is super effective on water", PokemonType::Grass, PokemonType::Water, 8.0)]
    #[case("grass is weak on fire", PokemonType::Grass, PokemonType::Fire, 2.0)]
    #[case("grass is weak on grass", PokemonType::Grass, PokemonType::Grass, 2.0)]
    #[case("water is super effective on fire", PokemonType::Water, PokemonType::Fire, 8.0)]
    #[case("fire has no matchups", PokemonType::Fire, PokemonType::Water, 4.0)]
    #[case("normal has no matchups", PokemonType::Normal, PokemonType::Grass, 4.0)]
    fn test_damage_applies_type_multiplier(
        #[case] desc: &str,
        #[case] attacker_type: PokemonType,
        #[case] defender_type: PokemonType,
        #[case] expected: f64,
    ) {
        let attacker = pokemon(attacker_type, 8.0, 5.0);
        let defender = pokemon(defender_type, 8.0, 2.0);
        assert_eq!(damage(&attacker, &defender), Ok(expected), "{}", desc);
    }

    #[test]
    fn test_damage_does_not_depend_on_attacker_defense() {
        let attacker = pokemon(PokemonType::Normal, 9.0, 0.0);
        let defender = pokemon(PokemonType::Normal, 1.0, 3.0);
        assert_eq!(damage(&attacker, &defender), Ok(3.0));
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    fn test_non_positive_defense_is_an_error(#[case] defense: f64) {
        let attacker = pokemon(PokemonType::Grass, 4.0, 2.0);
        let defender = pokemon(PokemonType::Water, 4.0, defense);
        assert_eq!(
            damage(&attacker, &defender),
            Err(CombatError::NonPositiveDefense {
                name: "Test".to_string(),
                defense,
            })
        );
    }
}
