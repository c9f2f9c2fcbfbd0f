#[cfg(test)]
mod tests {
    use crate::battle::engine::{resolve, resolve_fight, Outcome};
    use crate::battle::tests::common::TestPokemonBuilder;
    use crate::config::CombatConfig;
    use crate::errors::CombatError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::PokemonType;

    #[test]
    fn test_zero_defense_on_first_fails_resolution() {
        let fragile = TestPokemonBuilder::new(PokemonType::Grass)
            .with_name("Paper")
            .with_defense(0.0)
            .with_speed(10.0)
            .build();
        let opponent = TestPokemonBuilder::new(PokemonType::Water).build();

        assert_eq!(
            resolve(&fragile, &opponent),
            Err(CombatError::NonPositiveDefense {
                name: "Paper".to_string(),
                defense: 0.0,
            })
        );
    }

    #[test]
    fn test_zero_defense_on_slower_side_still_fails() {
        // Both damages are computed before the first round, so even a side
        // that would never be hit makes the fight undefined.
        let fast = TestPokemonBuilder::new(PokemonType::Normal)
            .with_speed(10.0)
            .build();
        let broken = TestPokemonBuilder::new(PokemonType::Normal)
            .with_name("Broken")
            .with_defense(-1.0)
            .build();

        let result = resolve_fight(&broken, &fast, &CombatConfig::default());
        assert!(matches!(
            result,
            Err(CombatError::NonPositiveDefense { ref name, .. }) if name == "Broken"
        ));
    }

    #[rstest]
    #[case("zero attack", 0.0, 10.0)]
    #[case("negative attack", -3.0, 10.0)]
    #[case("damage below float resolution", 1.0, 1e20)]
    fn test_non_progressing_fight_is_a_stalemate(
        #[case] desc: &str,
        #[case] attack: f64,
        #[case] defender_health: f64,
    ) {
        let attacker = TestPokemonBuilder::new(PokemonType::Fire)
            .with_name("Idle")
            .with_attack(attack)
            .with_speed(5.0)
            .build();
        let defender = TestPokemonBuilder::new(PokemonType::Normal)
            .with_health(defender_health)
            .build();

        assert_eq!(
            resolve(&attacker, &defender),
            Err(CombatError::Stalemate {
                attacker: "Idle".to_string(),
                damage: attack,
            }),
            "{}",
            desc
        );
    }

    #[test]
    fn test_zero_attack_still_wins_against_zero_health() {
        let attacker = TestPokemonBuilder::new(PokemonType::Normal)
            .with_attack(0.0)
            .build();
        let defender = TestPokemonBuilder::new(PokemonType::Normal)
            .with_health(0.0)
            .build();
        assert_eq!(resolve(&attacker, &defender), Ok(Outcome::FirstWins));
    }

    #[test]
    fn test_slower_side_stats_do_not_matter() {
        let fast = TestPokemonBuilder::new(PokemonType::Water)
            .with_attack(2.0)
            .with_speed(3.0)
            .build();
        let harmless = TestPokemonBuilder::new(PokemonType::Fire)
            .with_attack(0.0)
            .build();
        assert_eq!(resolve(&fast, &harmless), Ok(Outcome::FirstWins));
    }
}
