use crate::battle::engine::{resolve, Outcome};
use crate::errors::{
    ConstructionResult, PokedexResult, RosterError, RosterResult, StoreResult,
};
use crate::pokemon::Pokemon;
use crate::store::RosterStore;
use schema::PokemonType;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

/// Columns a roster listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterColumn {
    Name,
    Health,
    Attack,
    Defense,
    Speed,
    Type,
}

impl RosterColumn {
    pub const ALL: [RosterColumn; 6] = [
        RosterColumn::Name,
        RosterColumn::Health,
        RosterColumn::Attack,
        RosterColumn::Defense,
        RosterColumn::Speed,
        RosterColumn::Type,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            RosterColumn::Name => "Name",
            RosterColumn::Health => "Health",
            RosterColumn::Attack => "Attack",
            RosterColumn::Defense => "Defense",
            RosterColumn::Speed => "Speed",
            RosterColumn::Type => "Type",
        }
    }

    fn compare(&self, a: &Pokemon, b: &Pokemon) -> Ordering {
        match self {
            RosterColumn::Name => a.name().cmp(b.name()),
            RosterColumn::Health => a.health().total_cmp(&b.health()),
            RosterColumn::Attack => a.attack().total_cmp(&b.attack()),
            RosterColumn::Defense => a.defense().total_cmp(&b.defense()),
            RosterColumn::Speed => a.speed().total_cmp(&b.speed()),
            RosterColumn::Type => a
                .pokemon_type()
                .display_name()
                .cmp(b.pokemon_type().display_name()),
        }
    }
}

impl FromStr for RosterColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RosterColumn::ALL
            .into_iter()
            .find(|column| column.header().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown column '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// The ordered, in-memory collection of creatures a user curates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pokemon: Vec<Pokemon>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three entries a fresh roster starts with.
    pub fn with_starters() -> ConstructionResult<Self> {
        let pokemon = vec![
            Pokemon::create_by_type(PokemonType::Grass, "Bulbasaur", 1.0, 1.0, 1.0, 1.0)?,
            Pokemon::create_by_type(PokemonType::Fire, "Charmander", 1.0, 1.0, 1.0, 1.0)?,
            Pokemon::create_by_type(PokemonType::Water, "Squirtle", 1.0, 1.0, 1.0, 1.0)?,
        ];
        Ok(Self { pokemon })
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.pokemon.iter()
    }

    pub fn as_slice(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn get(&self, index: usize) -> RosterResult<&Pokemon> {
        self.pokemon.get(index).ok_or(RosterError::IndexOutOfBounds {
            index,
            len: self.pokemon.len(),
        })
    }

    pub fn index_of(&self, pokemon: &Pokemon) -> Option<usize> {
        self.pokemon.iter().position(|p| p == pokemon)
    }

    /// Append and return the new entry's index.
    pub fn add(&mut self, pokemon: Pokemon) -> usize {
        debug!("Adding {} to roster", pokemon);
        self.pokemon.push(pokemon);
        self.pokemon.len() - 1
    }

    /// Replace the entry at `index`, keeping its position. Returns the old entry.
    pub fn edit(&mut self, index: usize, replacement: Pokemon) -> RosterResult<Pokemon> {
        self.check_index(index)?;
        debug!("Replacing roster entry {} with {}", index, replacement);
        Ok(std::mem::replace(&mut self.pokemon[index], replacement))
    }

    pub fn remove(&mut self, index: usize) -> RosterResult<Pokemon> {
        self.check_index(index)?;
        let removed = self.pokemon.remove(index);
        debug!("Removed {} from roster", removed);
        Ok(removed)
    }

    /// Append an independent copy of the entry at `index`; returns the copy's index.
    pub fn clone_entry(&mut self, index: usize) -> RosterResult<usize> {
        let copy = self.get(index)?.clone();
        Ok(self.add(copy))
    }

    /// Resolve a fight between two entries.
    pub fn fight(&self, first: usize, second: usize) -> PokedexResult<Outcome> {
        let first = self.get(first)?;
        let second = self.get(second)?;
        Ok(resolve(first, second)?)
    }

    /// Entries ordered by `column`, with their roster indices. The roster
    /// itself keeps its order; ties keep roster order.
    pub fn sorted_view(&self, column: RosterColumn, order: SortOrder) -> Vec<(usize, &Pokemon)> {
        let mut rows: Vec<(usize, &Pokemon)> = self.pokemon.iter().enumerate().collect();
        rows.sort_by(|(_, a), (_, b)| {
            let ordering = column.compare(a, b);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        rows
    }

    /// Swap in every record from `store`. On failure the roster is unchanged.
    pub fn load_from(&mut self, store: &dyn RosterStore) -> StoreResult<()> {
        let loaded = store.load_all()?;
        info!("Loaded {} Pokemon into roster", loaded.len());
        self.pokemon = loaded;
        Ok(())
    }

    pub fn save_to(&self, store: &mut dyn RosterStore) -> StoreResult<()> {
        store.replace_all(&self.pokemon)?;
        info!("Saved {} Pokemon from roster", self.pokemon.len());
        Ok(())
    }

    fn check_index(&self, index: usize) -> RosterResult<()> {
        self.get(index).map(|_| ())
    }
}

impl From<Vec<Pokemon>> for Roster {
    fn from(pokemon: Vec<Pokemon>) -> Self {
        Self { pokemon }
    }
}

impl fmt::Display for Roster {
    /// Tabular listing with one row per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_header())?;
        for (index, pokemon) in self.pokemon.iter().enumerate() {
            writeln!(f, "{}", format_row(index, pokemon))?;
        }
        Ok(())
    }
}

/// Column headers for a roster listing.
pub fn format_header() -> String {
    let [name, health, attack, defense, speed, pokemon_type] =
        RosterColumn::ALL.map(|column| column.header());
    format!(
        "{:>3}  {:<16} {:>8} {:>8} {:>8} {:>8}  {}",
        "#", name, health, attack, defense, speed, pokemon_type
    )
}

/// One roster row, aligned with [`format_header`].
pub fn format_row(index: usize, pokemon: &Pokemon) -> String {
    format!(
        "{:>3}  {:<16} {:>8} {:>8} {:>8} {:>8}  {}",
        index,
        pokemon.name(),
        pokemon.health(),
        pokemon.attack(),
        pokemon.defense(),
        pokemon.speed(),
        pokemon.pokemon_type().display_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CombatError, PokedexError, StoreError};
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pokemon(pokemon_type: PokemonType, name: &str, health: f64, speed: f64) -> Pokemon {
        Pokemon::create_by_type(pokemon_type, name, health, 2.0, 1.0, speed).unwrap()
    }

    fn sample_roster() -> Roster {
        Roster::from(vec![
            pokemon(PokemonType::Water, "Squirtle", 44.0, 43.0),
            pokemon(PokemonType::Grass, "Bulbasaur", 45.0, 45.0),
            pokemon(PokemonType::Fire, "Charmander", 39.0, 65.0),
        ])
    }

    /// A store whose every call fails.
    struct BrokenStore;

    impl RosterStore for BrokenStore {
        fn load_all(&self) -> StoreResult<Vec<Pokemon>> {
            Err(StoreError::UnsupportedVersion(99))
        }

        fn replace_all(&mut self, _pokemon: &[Pokemon]) -> StoreResult<()> {
            Err(StoreError::UnsupportedVersion(99))
        }
    }

    #[test]
    fn test_starters() {
        let roster = Roster::with_starters().unwrap();
        assert_eq!(roster.len(), 3);
        let names: Vec<_> = roster.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Bulbasaur", "Charmander", "Squirtle"]);
        let types: Vec<_> = roster.iter().map(|p| p.pokemon_type()).collect();
        assert_eq!(
            types,
            vec![PokemonType::Grass, PokemonType::Fire, PokemonType::Water]
        );
        assert!(roster.iter().all(|p| p.health() == 1.0));
    }

    #[test]
    fn test_edit_keeps_position() {
        let mut roster = sample_roster();
        let replacement = pokemon(PokemonType::Grass, "Ivysaur", 60.0, 60.0);

        let old = roster.edit(1, replacement.clone()).unwrap();
        assert_eq!(old.name(), "Bulbasaur");
        assert_eq!(roster.get(1), Ok(&replacement));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_remove_and_bounds() {
        let mut roster = sample_roster();
        let removed = roster.remove(0).unwrap();
        assert_eq!(removed.name(), "Squirtle");
        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.remove(2),
            Err(RosterError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert!(roster.edit(5, removed).is_err());
    }

    #[test]
    fn test_clone_entry_appends_independent_copy() {
        let mut roster = sample_roster();
        let copy_index = roster.clone_entry(0).unwrap();
        assert_eq!(copy_index, 3);
        assert_eq!(roster.get(3), roster.get(0));

        let mut edited = roster.get(3).unwrap().clone();
        edited.set_name("Wartortle").unwrap();
        roster.edit(3, edited).unwrap();
        assert_eq!(roster.get(0).unwrap().name(), "Squirtle");
        assert_eq!(roster.index_of(roster.get(3).unwrap()), Some(3));
    }

    #[test]
    fn test_fight_uses_roster_entries() {
        let roster = sample_roster();
        // Charmander is fastest.
        assert_eq!(roster.fight(0, 2).unwrap(), Outcome::SecondWins);
        assert_eq!(roster.fight(2, 0).unwrap(), Outcome::FirstWins);
    }

    #[test]
    fn test_fight_reports_index_and_combat_failures_as_one_error() {
        let mut roster = sample_roster();
        assert!(matches!(
            roster.fight(0, 7),
            Err(PokedexError::Roster(RosterError::IndexOutOfBounds { index: 7, len: 3 }))
        ));

        roster.add(
            Pokemon::create_by_type(PokemonType::Normal, "Paper", 10.0, 1.0, 0.0, 1.0).unwrap(),
        );
        assert!(matches!(
            roster.fight(0, 3),
            Err(PokedexError::Combat(CombatError::NonPositiveDefense { .. }))
        ));
    }

    #[rstest]
    #[case(RosterColumn::Name, SortOrder::Ascending, vec![1, 2, 0])]
    #[case(RosterColumn::Health, SortOrder::Descending, vec![1, 0, 2])]
    #[case(RosterColumn::Speed, SortOrder::Ascending, vec![0, 1, 2])]
    #[case(RosterColumn::Type, SortOrder::Ascending, vec![2, 1, 0])]
    fn test_sorted_view(
        #[case] column: RosterColumn,
        #[case] order: SortOrder,
        #[case] expected: Vec<usize>,
    ) {
        let roster = sample_roster();
        let indices: Vec<usize> = roster
            .sorted_view(column, order)
            .into_iter()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(indices, expected);
        assert_eq!(roster, sample_roster());
    }

    #[test]
    fn test_column_from_str() {
        assert_eq!("speed".parse::<RosterColumn>(), Ok(RosterColumn::Speed));
        assert!("colour".parse::<RosterColumn>().is_err());
    }

    #[test]
    fn test_save_and_load_through_store() {
        let mut store = MemoryStore::default();
        let roster = sample_roster();
        roster.save_to(&mut store).unwrap();

        let mut loaded = Roster::new();
        loaded.load_from(&store).unwrap();
        assert_eq!(loaded, roster);
    }

    #[test]
    fn test_failed_load_leaves_roster_untouched() {
        let mut roster = sample_roster();
        assert!(roster.load_from(&BrokenStore).is_err());
        assert_eq!(roster, sample_roster());

        let mut store = BrokenStore;
        assert!(roster.save_to(&mut store).is_err());
        assert_eq!(roster, sample_roster());
    }

    #[test]
    fn test_display_lists_every_row() {
        let listing = sample_roster().to_string();
        assert_eq!(listing.lines().count(), 4);
        assert!(listing.contains("Charmander"));
        assert!(listing.lines().nth(2).unwrap().contains("Grass"));
    }
}
