use serde::{Deserialize, Serialize};

/// One persisted roster row.
///
/// The type is kept as its storage tag so that an unknown tag surfaces as a
/// construction failure on load instead of a parse failure of the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: usize,
    pub name: String,
    pub health: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub type_tag: String,
}

/// Top-level layout of a roster document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterDocument {
    pub version: u32,
    #[serde(default)]
    pub records: Vec<PokemonRecord>,
}

impl RosterDocument {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(records: Vec<PokemonRecord>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            records,
        }
    }
}
