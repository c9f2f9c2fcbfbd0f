// Pokedex Schema - Shared type definitions
// This crate holds the closed type set, its matchup table, and the row shape
// the roster store persists.

// Re-export the main types
pub use pokemon_record::*;
pub use pokemon_types::*;

pub mod pokemon_record;
pub mod pokemon_types;
