use std::path::PathBuf;

/// Main error type for the Pokedex crate
#[derive(Debug, thiserror::Error)]
pub enum PokedexError {
    /// Error related to building a creature from raw attributes
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),
    /// Error raised while resolving a fight
    #[error("Combat error: {0}")]
    Combat(#[from] CombatError),
    /// Error raised by the roster store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    /// Error related to roster indexing
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    /// Error related to loading or saving configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the creature factory
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("unknown type tag '{0}'")]
    UnknownType(String),
    #[error("{stat} must be a finite number, got {value}")]
    NonFiniteStat { stat: &'static str, value: f64 },
}

/// Errors raised while resolving a fight
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CombatError {
    /// Damage divides by the defender's defense, so it must be strictly positive.
    #[error("{name} has non-positive defense {defense}; damage is undefined")]
    NonPositiveDefense { name: String, defense: f64 },
    /// The side holding initiative can never bring its opponent down.
    #[error("{attacker} deals {damage} per round, which cannot reduce its opponent's health")]
    Stalemate { attacker: String, damage: f64 },
}

/// Errors raised by roster stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse roster document: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize roster document: {0}")]
    Serialize(#[from] ron::Error),
    #[error("record {id} is malformed: {source}")]
    MalformedRecord {
        id: usize,
        #[source]
        source: ConstructionError,
    },
    #[error("unsupported roster document version {0}")]
    UnsupportedVersion(u32),
}

/// Errors related to roster indexing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("index {index} is out of bounds for a roster of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Errors related to configuration files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using ConstructionError
pub type ConstructionResult<T> = Result<T, ConstructionError>;

/// Type alias for Results using CombatError
pub type CombatResult<T> = Result<T, CombatError>;

/// Type alias for Results using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Type alias for Results using RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
