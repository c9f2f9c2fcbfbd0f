// In: src/lib.rs

//! Pokedex
//!
//! A roster of user-defined creatures with a deterministic, type-aware fight
//! resolver, a persistent roster store and the configuration around them.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod pokemon;
pub mod roster;
pub mod store;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{PokemonRecord, PokemonType, RosterDocument};

// --- From this crate's modules (`src/`) ---

// Fight resolution.
pub use battle::calculators::{damage, type_multiplier};
pub use battle::engine::{resolve, resolve_fight, FightReport, Outcome};
pub use battle::runner::FightRunner;
pub use battle::state::{BattleEvent, EventBus, Side};

// Core runtime types.
pub use config::{CombatConfig, PokedexConfig, PresentationConfig};
pub use pokemon::Pokemon;
pub use roster::{Roster, RosterColumn, SortOrder};
pub use store::{MemoryStore, RonFileStore, RosterStore};

// Crate-specific error and result types.
pub use errors::{
    CombatError, CombatResult, ConfigError, ConfigResult, ConstructionError, ConstructionResult,
    PokedexError, PokedexResult, RosterError, RosterResult, StoreError, StoreResult,
};
